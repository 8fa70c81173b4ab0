use bevy::prelude::*;

/// Wird einmal pro abgeschlossenem Bild-Ladevorgang gesendet.
#[derive(Event, Debug, Clone)]
pub struct EffectLoaded {
    pub path: String,
    pub triangle_count: usize,
}

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct NextImageRequested;

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RebuildRequested;
