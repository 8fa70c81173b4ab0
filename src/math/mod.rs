pub mod error;
pub mod geometry;
pub mod point_distribution;
pub mod types;

// Re-exports für einfache Verwendung
pub use error::{EffectError, EffectResult};
pub use types::*;
