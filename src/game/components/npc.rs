use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use station_data::NpcId;

#[derive(Component, Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Npc {
    pub id: NpcId,
}

impl Npc {
    pub fn new(id: NpcId) -> Self {
        Self { id }
    }
}
