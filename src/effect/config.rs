// src/effect/config.rs

use crate::math::{
    error::{EffectError, EffectResult},
    point_distribution::EdgePointCounts,
};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::time::Duration;

/// Konfiguration des Dreieckseffekts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectConfig {
    /// Halbe Kantenlänge der Nachbarschafts-Box um den Zeiger (px).
    pub mouse_point_radius: f32,
    /// Anzahl gleichverteilter Punkte im Bildinneren.
    pub num_random_points: usize,
    /// Zusätzliche Punkte auf den vier Bildkanten.
    pub edge_points: EdgePointCounts,
    /// Frames pro Skalierungspuls. Muss gerade sein: die Hälfte skaliert hoch,
    /// die andere Hälfte wieder herunter.
    pub num_anim_iterations: u32,
    /// Bereich, aus dem die Maximalskalierung je Dreieck gezogen wird.
    pub max_scale_range: Range<f32>,
    pub pointer_debounce: Duration,
    pub resize_debounce: Duration,
    /// Optionaler Seed für reproduzierbare Netze und Skalierungen.
    pub seed: Option<u64>,
    /// Dreieckskanten als Gizmo-Linien zeichnen.
    pub show_wireframe: bool,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            mouse_point_radius: 50.0,
            num_random_points: 300,
            edge_points: EdgePointCounts::default(),
            num_anim_iterations: 16,
            max_scale_range: 1.3..1.7,
            pointer_debounce: Duration::from_millis(60),
            resize_debounce: Duration::from_millis(500),
            seed: None,
            show_wireframe: false,
        }
    }
}

impl EffectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mouse_point_radius(mut self, radius: f32) -> Self {
        self.mouse_point_radius = radius.max(0.0);
        self
    }

    pub fn with_random_points(mut self, count: usize) -> Self {
        self.num_random_points = count;
        self
    }

    pub fn with_edge_points(mut self, edges: EdgePointCounts) -> Self {
        self.edge_points = edges;
        self
    }

    pub fn with_anim_iterations(mut self, iterations: u32) -> Self {
        self.num_anim_iterations = iterations;
        self
    }

    pub fn with_max_scale_range(mut self, range: Range<f32>) -> Self {
        self.max_scale_range = range;
        self
    }

    pub fn with_debounce(mut self, pointer: Duration, resize: Duration) -> Self {
        self.pointer_debounce = pointer;
        self.resize_debounce = resize;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_wireframe(mut self, show: bool) -> Self {
        self.show_wireframe = show;
        self
    }

    pub fn validate(&self) -> EffectResult<()> {
        if self.num_anim_iterations == 0 || self.num_anim_iterations % 2 != 0 {
            return Err(EffectError::InvalidConfiguration {
                message: format!(
                    "num_anim_iterations must be a positive even number, got {}",
                    self.num_anim_iterations
                ),
            });
        }
        if !self.mouse_point_radius.is_finite() || self.mouse_point_radius < 0.0 {
            return Err(EffectError::InvalidConfiguration {
                message: format!(
                    "mouse_point_radius must be finite and non-negative, got {}",
                    self.mouse_point_radius
                ),
            });
        }
        let range = &self.max_scale_range;
        if !(range.start.is_finite() && range.end.is_finite()) || range.start > range.end {
            return Err(EffectError::InvalidConfiguration {
                message: format!("max_scale_range {:?} is not a valid range", range),
            });
        }
        Ok(())
    }
}
