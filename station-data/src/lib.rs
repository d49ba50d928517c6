macro_rules! id_wrapper_impl {
    ($name:ident, $inner_type:ty, $value_type:ty) => {
        impl $name {
            #[allow(dead_code)]
            pub fn new(value: $value_type) -> Option<Self> {
                <$inner_type>::new(value).map($name)
            }

            #[allow(dead_code)]
            pub fn get(&self) -> $value_type {
                self.0.get()
            }
        }

        #[allow(dead_code)]
        impl FromStr for $name {
            type Err = <$inner_type as std::str::FromStr>::Err;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name(s.parse::<$inner_type>()?))
            }
        }
    };
}

mod npc_database;
mod orientation;
mod zone;

pub use npc_database::{NpcData, NpcDatabase, NpcId};
pub use orientation::Orientation;
pub use zone::{ZoneData, ZoneId, ZoneNpcSpawn, ZoneWallmount};
