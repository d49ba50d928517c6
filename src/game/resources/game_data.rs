use station_data::{NpcDatabase, ZoneData};

pub struct GameData {
    pub npcs: NpcDatabase,
    pub zones: Vec<ZoneData>,
}
