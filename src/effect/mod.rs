// src/effect/mod.rs

pub mod animation;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod events;
pub mod images;
pub mod plugin;
pub mod systems;

pub use animation::{AnimationScheduler, AnimationState, tent_scale};
pub use config::EffectConfig;
pub use controller::{EffectController, ScaleUpdate};
pub use events::{EffectLoaded, NextImageRequested, RebuildRequested};
pub use images::ImageSet;
pub use plugin::{EffectPlugin, EffectSet};
