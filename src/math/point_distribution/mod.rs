// src/math/point_distribution/mod.rs

// Zufällige Punktmenge als Grundlage für die Triangulation
pub mod sampler;

pub use self::sampler::{EdgePointCounts, PointSampler};
