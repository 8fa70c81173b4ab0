// src/effect/systems.rs
use super::controller::{EffectController, ScaleUpdate};
use super::events::{EffectLoaded, NextImageRequested, RebuildRequested};
use crate::math::types::Point;
use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

/// Das aktuell geladene bzw. zu ladende Bild.
#[derive(Resource, Debug, Default)]
pub struct EffectImage {
    pub pending_path: Option<String>,
    pub path: Option<String>,
    pub handle: Option<Handle<Image>>,
    failure_reported: bool,
}

impl EffectImage {
    pub fn pending(path: Option<String>) -> Self {
        Self {
            pending_path: path,
            ..default()
        }
    }
}

fn primary_viewport(windows: &Query<&Window, With<PrimaryWindow>>) -> Option<Vec2> {
    windows
        .get_single()
        .ok()
        .map(|window| Vec2::new(window.width(), window.height()))
}

pub fn load_pending_image_system(mut image: ResMut<EffectImage>, asset_server: Res<AssetServer>) {
    if let Some(path) = image.pending_path.take() {
        image.handle = Some(asset_server.load(path.clone()));
        image.path = Some(path);
        image.failure_reported = false;
    }
}

/// Sobald das angeforderte Bild verfügbar ist, wird das erste Netz gebaut.
/// Geprüft wird der Asset-Bestand statt der Lade-Events, damit auch ein
/// bereits geladenes Bild (ein einzelnes Bild beim Durchschalten) greift.
pub fn image_loaded_system(
    images: Res<Assets<Image>>,
    effect_image: Res<EffectImage>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut controller: ResMut<EffectController>,
    mut loaded_events: EventWriter<EffectLoaded>,
) {
    if controller.is_loaded() {
        return;
    }
    let Some(image) = effect_image.handle.as_ref().and_then(|h| images.get(h)) else {
        return;
    };
    let Some(viewport) = primary_viewport(&windows) else {
        warn!("Image loaded, but no primary window to fit it into.");
        return;
    };

    match controller.on_image_loaded(image.size().as_vec2(), viewport) {
        Ok(()) => {
            loaded_events.send(EffectLoaded {
                path: effect_image.path.clone().unwrap_or_default(),
                triangle_count: controller.mesh().len(),
            });
        }
        Err(e) => error!("Failed to build triangle mesh: {}", e),
    }
}

/// Ein fehlgeschlagener Ladevorgang wird nur gemeldet; der Effekt bleibt
/// dann uninitialisiert.
pub fn image_load_failure_system(
    mut effect_image: ResMut<EffectImage>,
    asset_server: Res<AssetServer>,
) {
    if effect_image.failure_reported {
        return;
    }
    let Some(handle) = &effect_image.handle else {
        return;
    };
    if matches!(asset_server.get_load_state(handle.id()), Some(LoadState::Failed)) {
        warn!(
            "Could not load image {:?}; effect stays inactive.",
            effect_image.path
        );
        effect_image.failure_reported = true;
    }
}

pub fn pointer_moved_system(
    mut cursor_events: EventReader<CursorMoved>,
    mut controller: ResMut<EffectController>,
) {
    // Nur die letzte Bewegung zählt, der Controller entprellt ohnehin.
    if let Some(event) = cursor_events.read().last() {
        controller.on_pointer_moved(Point::from(event.position));
    }
}

pub fn window_resized_system(
    mut resize_events: EventReader<WindowResized>,
    windows: Query<Entity, With<PrimaryWindow>>,
    mut controller: ResMut<EffectController>,
) {
    let primary = windows.get_single().ok();
    let last = resize_events
        .read()
        .filter(|event| Some(event.window) == primary)
        .last();
    if let Some(event) = last {
        controller.on_resize(Vec2::new(event.width, event.height));
    }
}

pub fn frame_tick_system(
    time: Res<Time>,
    mut controller: ResMut<EffectController>,
    mut scale_updates: EventWriter<ScaleUpdate>,
) {
    match controller.on_frame(time.delta()) {
        Ok(updates) => {
            scale_updates.send_batch(updates);
        }
        Err(e) => error!("Failed to rebuild triangle mesh: {}", e),
    }
}

pub fn keyboard_next_image_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut requests: EventWriter<NextImageRequested>,
) {
    if keys.just_pressed(KeyCode::KeyN) {
        requests.send(NextImageRequested);
    }
}

pub fn next_image_system(
    mut requests: EventReader<NextImageRequested>,
    mut controller: ResMut<EffectController>,
    mut effect_image: ResMut<EffectImage>,
) {
    if requests.read().count() == 0 {
        return;
    }
    if let Some(path) = controller.next_image() {
        effect_image.pending_path = Some(path);
    }
}

pub fn rebuild_request_system(
    mut requests: EventReader<RebuildRequested>,
    mut controller: ResMut<EffectController>,
) {
    if requests.read().count() == 0 || !controller.is_loaded() {
        return;
    }
    if let Err(e) = controller.rebuild() {
        error!("Failed to rebuild triangle mesh: {}", e);
    }
}
