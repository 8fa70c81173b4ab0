//! Provides the Bevy `Plugin` that wires the triangle effect into an `App`.
//!
//! All handlers are registered exactly once here; the controller itself never
//! rebinds callbacks.

use super::{
    config::EffectConfig,
    controller::{EffectController, ScaleUpdate},
    events::{EffectLoaded, NextImageRequested, RebuildRequested},
    images::ImageSet,
    systems::*,
};
use crate::render::RenderAdapterPlugin;
use bevy::prelude::*;

/// Adds the `EffectController` resource, its events and systems.
///
/// The pointer system is only registered when `disable_pointer` is false.
pub struct EffectPlugin {
    pub config: EffectConfig,
    pub images: ImageSet,
    pub disable_pointer: bool,
}

impl EffectPlugin {
    pub fn new(config: EffectConfig, images: impl Into<ImageSet>) -> Self {
        Self {
            config,
            images: images.into(),
            disable_pointer: false,
        }
    }

    pub fn without_pointer(mut self) -> Self {
        self.disable_pointer = true;
        self
    }
}

impl Plugin for EffectPlugin {
    fn build(&self, app: &mut App) {
        let mut controller = match EffectController::new(self.config.clone(), self.images.clone())
        {
            Ok(controller) => controller,
            Err(e) => {
                error!("Triangle effect disabled: {}", e);
                return;
            }
        };
        let first_image = controller.init(self.disable_pointer);
        if first_image.is_none() {
            warn!("No images configured; the triangle effect has nothing to show.");
        }

        app.insert_resource(controller)
            .insert_resource(EffectImage::pending(first_image))
            .add_event::<ScaleUpdate>()
            .add_event::<EffectLoaded>()
            .add_event::<NextImageRequested>()
            .add_event::<RebuildRequested>()
            .add_plugins(RenderAdapterPlugin)
            .add_systems(
                Update,
                (
                    // Block 1: Eingaben und Anfragen
                    keyboard_next_image_system,
                    next_image_system,
                    rebuild_request_system,
                    load_pending_image_system,
                    image_loaded_system,
                    image_load_failure_system,
                    window_resized_system,
                )
                    .chain()
                    .in_set(EffectSet::Input),
            )
            .add_systems(Update, frame_tick_system.in_set(EffectSet::Tick))
            .configure_sets(
                Update,
                (EffectSet::Input, EffectSet::Tick, EffectSet::Render).chain(),
            );

        if !self.disable_pointer {
            app.add_systems(
                Update,
                pointer_moved_system
                    .in_set(EffectSet::Input)
                    .after(window_resized_system),
            );
        }
    }
}

/// Reihenfolge innerhalb eines Frames.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EffectSet {
    /// Eingaben, Laden, Größenänderungen
    Input,
    /// Timer und Animationsschritt
    Tick,
    /// Render-Knoten synchronisieren und skalieren
    Render,
}
