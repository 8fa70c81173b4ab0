// ./src/setup.rs
use crate::effect::EffectLoaded;
use bevy::prelude::*;

pub fn setup_scene(mut commands: Commands) {
    // Kamera im Ursprung = Mitte des Viewports
    commands.spawn(Camera2dBundle::default());
}

/// Meldet jedes fertig geladene Bild.
pub fn log_effect_loaded_system(mut loaded: EventReader<EffectLoaded>) {
    for event in loaded.read() {
        info!(
            "Effect ready for {:?} with {} triangles.",
            event.path, event.triangle_count
        );
    }
}
