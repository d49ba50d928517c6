use serde::{Deserialize, Serialize};
use std::{collections::HashMap, num::NonZeroU16, str::FromStr};

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcId(NonZeroU16);

id_wrapper_impl!(NpcId, NonZeroU16, u16);

#[derive(Clone, Debug)]
pub struct NpcData {
    pub id: NpcId,
    pub name: String,
    pub health: i32,
    pub walk_speed: i32,
}

pub struct NpcDatabase {
    npcs: HashMap<u16, NpcData>,
}

impl NpcDatabase {
    pub fn new(npcs: Vec<NpcData>) -> Self {
        Self {
            npcs: npcs.into_iter().map(|npc| (npc.id.get(), npc)).collect(),
        }
    }

    pub fn get_npc(&self, id: NpcId) -> Option<&NpcData> {
        self.npcs.get(&id.get())
    }
}
