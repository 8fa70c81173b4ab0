use crate::effect::EffectController;
use crate::render::nodes::to_world;
use bevy::prelude::*;

/// Zeichnet die Kanten aller Dreiecke als Gizmo-Linien.
pub fn draw_triangle_outlines_system(controller: Res<EffectController>, mut gizmos: Gizmos) {
    if !controller.config().show_wireframe {
        return;
    }
    let viewport = controller.viewport();
    for triangle in controller.mesh().iter() {
        let [a, b, c] = triangle.vertices.map(|p| to_world(p, viewport));
        // Geschlossener Linienzug
        gizmos.linestrip_2d([a, b, c, a], Color::WHITE);
    }
}
