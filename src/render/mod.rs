// src/render/mod.rs

// Anbindung des Effekts an Bevys 2D-Rendering
pub mod nodes;
pub mod systems;

use crate::effect::EffectSet;
use bevy::prelude::*;
use systems::*;

pub use nodes::{RasterBackground, TriangleNode, TriangleNodePool};

pub struct RenderAdapterPlugin;

impl Plugin for RenderAdapterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TriangleNodePool>().add_systems(
            Update,
            (
                sync_raster_background_system,
                sync_triangle_nodes_system,
                apply_scale_updates_system,
            )
                .chain()
                .in_set(EffectSet::Render),
        );
    }
}
