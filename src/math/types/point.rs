use bevy::math::Vec2;
use spade::Point2;

/// Ein Punkt im Effekt-Raum (Ursprung oben links, y nach unten, logische Pixel).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Achsenparalleler Nachbarschaftstest: beide Komponenten liegen höchstens
    /// `half_extent` von `center` entfernt (Grenze inklusive).
    pub fn within_box(&self, center: Point, half_extent: f32) -> bool {
        (self.x - center.x).abs() <= half_extent && (self.y - center.y).abs() <= half_extent
    }

    pub fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

// Conversion traits
impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<Point> for Point2<f64> {
    fn from(p: Point) -> Self {
        Point2::new(p.x as f64, p.y as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_box_is_inclusive() {
        let center = Point::new(400.0, 300.0);
        assert!(Point::new(450.0, 350.0).within_box(center, 50.0));
        assert!(Point::new(350.0, 250.0).within_box(center, 50.0));
        assert!(!Point::new(450.5, 300.0).within_box(center, 50.0));
        assert!(!Point::new(400.0, 249.0).within_box(center, 50.0));
    }
}
