// src/math/geometry/fit.rs

use crate::math::types::{Point, Vec2};

/// Skaliert `image_size` seitenverhältnistreu so, dass der Viewport
/// vollständig bedeckt ist ("fill"); Überstand wird später abgeschnitten.
pub fn fit_cover(image_size: Vec2, viewport: Vec2) -> Vec2 {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return viewport;
    }
    let factor = (viewport.x / image_size.x).max(viewport.y / image_size.y);
    image_size * factor
}

/// Texturkoordinate eines Punktes, wenn das Bild mit Größe `size`
/// zentriert auf `center` liegt. Ergebnis liegt für Punkte innerhalb des
/// Bildes in `[0,1]²`.
pub fn image_uv(point: Point, center: Point, size: Vec2) -> [f32; 2] {
    if size.x <= 0.0 || size.y <= 0.0 {
        return [0.5, 0.5];
    }
    let min = center.to_vec2() - size * 0.5;
    let uv = (point.to_vec2() - min) / size;
    [uv.x, uv.y]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_cover_wide_viewport() {
        let base = fit_cover(Vec2::new(100.0, 100.0), Vec2::new(800.0, 600.0));
        assert_relative_eq!(base.x, 800.0);
        assert_relative_eq!(base.y, 800.0);
    }

    #[test]
    fn test_fit_cover_tall_viewport() {
        let base = fit_cover(Vec2::new(400.0, 200.0), Vec2::new(300.0, 600.0));
        assert_relative_eq!(base.x, 1200.0);
        assert_relative_eq!(base.y, 600.0);
    }

    #[test]
    fn test_image_uv_centered() {
        let center = Point::new(400.0, 300.0);
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(image_uv(Point::new(0.0, 0.0), center, size), [0.0, 0.0]);
        assert_eq!(image_uv(Point::new(800.0, 600.0), center, size), [1.0, 1.0]);
        assert_eq!(image_uv(center, center, size), [0.5, 0.5]);
    }

    #[test]
    fn test_image_uv_scaled_image_magnifies() {
        let center = Point::new(400.0, 300.0);
        // Bei Skalierung 2 zeigt die linke obere Viewport-Ecke das Bildviertel.
        let uv = image_uv(Point::new(0.0, 0.0), center, Vec2::new(1600.0, 1200.0));
        assert_relative_eq!(uv[0], 0.25);
        assert_relative_eq!(uv[1], 0.25);
    }
}
