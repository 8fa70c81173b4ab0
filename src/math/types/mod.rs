// src/math/types/mod.rs
pub mod point;

pub use point::*;

// Re-export häufig verwendete externe Typen
pub use bevy::math::Vec2;
pub use spade::Point2;

pub type SpadePoint = Point2<f64>;
