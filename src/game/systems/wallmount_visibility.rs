use bevy_ecs::prelude::{Query, With};

use crate::game::{
    components::{Directional, Position, RenderPart, Viewer, Wallmount},
    facing::{is_facing_position, is_hidden},
};

/// Shows or hides every wallmount based on whether it faces the local viewer.
/// A mount facing the viewer presents its sprite side towards them and is
/// shown; otherwise all of its render parts are made fully transparent.
pub fn wallmount_visibility_system(
    viewer_query: Query<&Position, With<Viewer>>,
    wallmount_query: Query<(&Wallmount, &Position, &Directional)>,
    mut render_part_query: Query<&mut RenderPart>,
) {
    let viewer_position = match viewer_query.iter().next() {
        Some(viewer_position) => viewer_position,
        None => return,
    };

    for (wallmount, position, directional) in wallmount_query.iter() {
        if position.zone_id != viewer_position.zone_id {
            continue;
        }

        let facing_viewer = is_facing_position(
            position.position,
            directional.current_direction.vector(),
            viewer_position.position,
        );

        // Already fully hidden and staying hidden, skip rewriting the parts.
        if !facing_viewer {
            let already_hidden = is_hidden(
                wallmount
                    .render_parts
                    .iter()
                    .filter_map(|part| render_part_query.get(*part).ok())
                    .map(|part| part.opacity),
            );
            if already_hidden {
                continue;
            }
        }

        let opacity = if facing_viewer { 1.0 } else { 0.0 };
        for part_entity in wallmount.render_parts.iter() {
            if let Ok(mut render_part) = render_part_query.get_mut(*part_entity) {
                render_part.opacity = opacity;
            }
        }
    }
}
