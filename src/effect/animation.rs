// src/effect/animation.rs

use crate::math::error::{EffectError, EffectResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::ops::Range;

/// Zustand eines laufenden Skalierungspulses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub triangle_id: usize,
    pub scale: f32,
    pub max_scale: f32,
    pub iteration: u32,
}

impl AnimationState {
    fn new(triangle_id: usize, max_scale: f32) -> Self {
        Self {
            triangle_id,
            scale: 1.0,
            max_scale,
            iteration: 0,
        }
    }
}

/// Zeltförmige Interpolation: linear von 1 auf `max_scale` bis zur Hälfte
/// der Iterationen, danach symmetrisch zurück auf 1.
pub fn tent_scale(max_scale: f32, iteration: u32, num_iterations: u32) -> f32 {
    let half = num_iterations / 2;
    let step = (max_scale - 1.0) / half as f32;
    if iteration < half {
        1.0 + step * iteration as f32
    } else {
        max_scale - step * (iteration - half) as f32
    }
}

/// Verwaltet alle laufenden Animationen, höchstens eine pro Dreieck.
pub struct AnimationScheduler {
    animating: BTreeMap<usize, AnimationState>,
    num_iterations: u32,
    max_scale_range: Range<f32>,
    rng: StdRng,
}

impl AnimationScheduler {
    pub fn new(
        num_iterations: u32,
        max_scale_range: Range<f32>,
        seed: Option<u64>,
    ) -> EffectResult<Self> {
        if num_iterations == 0 || num_iterations % 2 != 0 {
            return Err(EffectError::InvalidConfiguration {
                message: format!(
                    "animation needs a positive even iteration count, got {}",
                    num_iterations
                ),
            });
        }
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            animating: BTreeMap::new(),
            num_iterations,
            max_scale_range,
            rng,
        })
    }

    /// Nimmt ein Dreieck in die Animation auf. Läuft bereits eine Animation
    /// für diese Id, passiert nichts; die laufende wird nicht neu gestartet.
    pub fn enroll(&mut self, triangle_id: usize) -> bool {
        if self.animating.contains_key(&triangle_id) {
            return false;
        }
        let span = self.max_scale_range.end - self.max_scale_range.start;
        let max_scale = self.max_scale_range.start + self.rng.random::<f32>() * span;
        self.enroll_with_max_scale(triangle_id, max_scale)
    }

    /// Wie `enroll`, aber mit vorgegebener Maximalskalierung.
    pub fn enroll_with_max_scale(&mut self, triangle_id: usize, max_scale: f32) -> bool {
        if self.animating.contains_key(&triangle_id) {
            return false;
        }
        self.animating
            .insert(triangle_id, AnimationState::new(triangle_id, max_scale));
        true
    }

    /// Bricht eine laufende Animation ab. Der Controller nutzt das nicht:
    /// erneutes Betreten lässt die laufende Animation weiterlaufen.
    pub fn cancel(&mut self, triangle_id: usize) -> Option<AnimationState> {
        self.animating.remove(&triangle_id)
    }

    /// Ein Frame: berechnet für jede Animation die nächste Skalierung,
    /// meldet `(triangle_id, scale)` und entfernt abgeschlossene Einträge.
    pub fn tick(&mut self) -> Vec<(usize, f32)> {
        let num_iterations = self.num_iterations;
        let mut emitted = Vec::with_capacity(self.animating.len());

        for state in self.animating.values_mut() {
            state.scale = tent_scale(state.max_scale, state.iteration, num_iterations);
            emitted.push((state.triangle_id, state.scale));
            state.iteration += 1;
        }
        self.animating
            .retain(|_, state| state.iteration <= num_iterations);

        emitted
    }

    pub fn clear(&mut self) {
        self.animating.clear();
    }

    pub fn get(&self, triangle_id: usize) -> Option<&AnimationState> {
        self.animating.get(&triangle_id)
    }

    pub fn is_animating(&self, triangle_id: usize) -> bool {
        self.animating.contains_key(&triangle_id)
    }

    pub fn len(&self) -> usize {
        self.animating.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animating.is_empty()
    }

    pub fn num_iterations(&self) -> u32 {
        self.num_iterations
    }

    pub fn animating_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.animating.keys().copied()
    }
}
