use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::{num::NonZeroU16, str::FromStr, time::Duration};

use crate::{NpcId, Orientation};

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneId(NonZeroU16);

id_wrapper_impl!(ZoneId, NonZeroU16, u16);

/// An authored NPC spawn point inside a zone.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ZoneNpcSpawn {
    pub npc_id: NpcId,
    pub position: Point3<f32>,
    pub facing: Orientation,
    pub interval: Duration,
    pub limit_count: u32,
    pub range: f32,
}

/// An authored wall-mounted decoration inside a zone. The facing is fixed at
/// authoring time; render part count matches the sprite layers of the mount.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ZoneWallmount {
    pub position: Point3<f32>,
    pub facing: Orientation,
    pub render_part_count: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ZoneData {
    pub id: ZoneId,
    pub name: String,
    pub npc_spawns: Vec<ZoneNpcSpawn>,
    pub wallmounts: Vec<ZoneWallmount>,
}
