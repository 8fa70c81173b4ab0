// src/math/point_distribution/sampler.rs

use crate::math::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Anzahl zusätzlicher Punkte pro Bildkante.
///
/// Ohne Randpunkte entstehen an den Bildrändern extrem schmale Dreiecke und
/// die Ränder werden nur von wenigen Dreiecken abgedeckt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgePointCounts {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl Default for EdgePointCounts {
    fn default() -> Self {
        Self {
            top: 20,
            bottom: 20,
            left: 10,
            right: 10,
        }
    }
}

impl EdgePointCounts {
    pub fn uniform(per_side: usize) -> Self {
        Self {
            top: per_side,
            bottom: per_side,
            left: per_side,
            right: per_side,
        }
    }

    pub fn total(&self) -> usize {
        self.top + self.bottom + self.left + self.right
    }
}

/// Erzeugt die Punktmenge, aus der das Dreiecksnetz trianguliert wird.
pub struct PointSampler {
    rng: StdRng,
}

impl PointSampler {
    /// Sampler mit zufälligem Seed
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Sampler mit festem Seed (reproduzierbare Netze)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::with_seed(s),
            None => Self::new(),
        }
    }

    /// Liefert `interior_count` gleichverteilte Punkte in `[0,width]×[0,height]`,
    /// gefolgt von den Randpunkten (oben, unten, links, rechts).
    /// Alle Koordinaten werden auf ganze Zahlen gerundet.
    pub fn sample(
        &mut self,
        width: f32,
        height: f32,
        interior_count: usize,
        edges: EdgePointCounts,
    ) -> Vec<Point> {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let mut points = Vec::with_capacity(interior_count + edges.total());

        for _ in 0..interior_count {
            let x = self.coordinate(width);
            let y = self.coordinate(height);
            points.push(Point::new(x, y));
        }

        for _ in 0..edges.top {
            let x = self.coordinate(width);
            points.push(Point::new(x, 0.0));
        }
        for _ in 0..edges.bottom {
            let x = self.coordinate(width);
            points.push(Point::new(x, height.round()));
        }
        for _ in 0..edges.left {
            let y = self.coordinate(height);
            points.push(Point::new(0.0, y));
        }
        for _ in 0..edges.right {
            let y = self.coordinate(height);
            points.push(Point::new(width.round(), y));
        }

        points
    }

    fn coordinate(&mut self, extent: f32) -> f32 {
        (self.rng.random::<f32>() * extent).round()
    }
}

impl Default for PointSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_counts_and_bounds() {
        let mut sampler = PointSampler::with_seed(7);
        let points = sampler.sample(800.0, 600.0, 300, EdgePointCounts::default());

        assert_eq!(points.len(), 360);
        for p in &points {
            assert!((0.0..=800.0).contains(&p.x), "x out of range: {:?}", p);
            assert!((0.0..=600.0).contains(&p.y), "y out of range: {:?}", p);
            assert_eq!(p.x, p.x.round());
            assert_eq!(p.y, p.y.round());
        }
    }

    #[test]
    fn test_edge_points_lie_on_their_edges() {
        let mut sampler = PointSampler::with_seed(11);
        let edges = EdgePointCounts {
            top: 3,
            bottom: 4,
            left: 5,
            right: 6,
        };
        let points = sampler.sample(200.0, 100.0, 0, edges);
        assert_eq!(points.len(), 18);

        assert!(points[0..3].iter().all(|p| p.y == 0.0));
        assert!(points[3..7].iter().all(|p| p.y == 100.0));
        assert!(points[7..12].iter().all(|p| p.x == 0.0));
        assert!(points[12..18].iter().all(|p| p.x == 200.0));
    }

    #[test]
    fn test_zero_counts_give_empty_set() {
        let mut sampler = PointSampler::with_seed(1);
        let points = sampler.sample(100.0, 100.0, 0, EdgePointCounts::uniform(0));
        assert!(points.is_empty());
    }

    #[test]
    fn test_same_seed_same_points() {
        let a = PointSampler::with_seed(42).sample(640.0, 480.0, 50, EdgePointCounts::default());
        let b = PointSampler::with_seed(42).sample(640.0, 480.0, 50, EdgePointCounts::default());
        assert_eq!(a, b);
    }
}
