use bevy_ecs::prelude::{Commands, Res};
use log::debug;

use crate::game::{
    bundles::spawn_wallmount,
    components::{NpcSpawnPoint, Position},
    resources::GameData,
};

/// Populates the world from the authored zone data: wallmounts with their
/// render parts, and NPC spawn points.
pub fn startup_zones_system(mut commands: Commands, game_data: Res<GameData>) {
    for zone_data in game_data.zones.iter() {
        for wallmount in zone_data.wallmounts.iter() {
            spawn_wallmount(
                &mut commands,
                wallmount.position,
                zone_data.id,
                wallmount.facing,
                wallmount.render_part_count,
            );
        }

        for npc_spawn in zone_data.npc_spawns.iter() {
            commands
                .spawn()
                .insert(NpcSpawnPoint::new(
                    npc_spawn.npc_id,
                    npc_spawn.facing,
                    npc_spawn.interval,
                    npc_spawn.limit_count,
                    npc_spawn.range,
                ))
                .insert(Position::new(npc_spawn.position, zone_data.id));
        }

        debug!(
            "Populated zone {} with {} wallmounts, {} npc spawns",
            zone_data.name,
            zone_data.wallmounts.len(),
            zone_data.npc_spawns.len()
        );
    }
}
