// ./src/main.rs
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

// Eigene Module deklarieren
pub mod debug;
pub mod effect;
pub mod math;
pub mod render;
pub mod setup; // Wird für Kamera-Setup verwendet

use debug::{
    ui::effect_control_ui_system, visualization::wireframe::draw_triangle_outlines_system,
};
use effect::{EffectConfig, EffectController, EffectPlugin, ImageSet};
use setup::{log_effect_loaded_system, setup_scene};

const DEFAULT_IMAGE: &str = "image.png";

fn main() {
    // Bildpfade relativ zu `assets/`, mehrere werden per `N` durchgeschaltet
    let args: Vec<String> = std::env::args().skip(1).collect();
    let images = if args.is_empty() {
        ImageSet::from(DEFAULT_IMAGE)
    } else {
        ImageSet::from(args)
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Delaunay Image Effect".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_plugins(EffectPlugin::new(EffectConfig::default(), images))
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                log_effect_loaded_system,
                effect_control_ui_system,
                draw_triangle_outlines_system,
            )
                .run_if(resource_exists::<EffectController>),
        )
        .run();
}
