// src/math/geometry/delaunay.rs

use crate::math::{
    error::{EffectError, EffectResult},
    types::{Point, SpadePoint},
};
use spade::{DelaunayTriangulation, Triangulation};

/// Ein Dreieck als Indextripel in die Eingabe-Punktliste.
pub type IndexTriple = [usize; 3];

/// Trianguliert eine Punktmenge und liefert Indextripel in die Eingabeliste.
///
/// Implementierungen gelten als externe, ungeprüfte Abhängigkeit: der
/// `MeshBuilder` prüft die gelieferten Indizes selbst.
pub trait Triangulator: Send + Sync {
    fn triangulate(&self, points: &[Point]) -> EffectResult<Vec<IndexTriple>>;
}

/// Delaunay-Triangulation über `spade`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpadeTriangulator;

impl Triangulator for SpadeTriangulator {
    fn triangulate(&self, points: &[Point]) -> EffectResult<Vec<IndexTriple>> {
        let mut triangulation: DelaunayTriangulation<SpadePoint> = DelaunayTriangulation::new();
        // spade-Vertex-Index -> Index des ersten Eingabepunktes an dieser Position
        let mut input_index_of_vertex: Vec<usize> = Vec::with_capacity(points.len());

        for (input_index, point) in points.iter().enumerate() {
            let handle = triangulation
                .insert(SpadePoint::from(*point))
                .map_err(|e| EffectError::TriangulationFailed {
                    reason: format!("could not insert point {:?}: {:?}", point, e),
                })?;
            // Doppelte Positionen liefern den bereits vorhandenen Vertex zurück.
            if handle.index() == input_index_of_vertex.len() {
                input_index_of_vertex.push(input_index);
            }
        }

        let triples = triangulation
            .inner_faces()
            .map(|face| {
                let [a, b, c] = face.vertices();
                [
                    input_index_of_vertex[a.fix().index()],
                    input_index_of_vertex[b.fix().index()],
                    input_index_of_vertex[c.fix().index()],
                ]
            })
            .collect();

        Ok(triples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_triangle() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 10.0),
        ];
        let triples = SpadeTriangulator.triangulate(&points).unwrap();
        assert_eq!(triples.len(), 1);

        let mut indices = triples[0].to_vec();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_square_gives_two_triangles() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let triples = SpadeTriangulator.triangulate(&points).unwrap();
        assert_eq!(triples.len(), 2);
    }

    #[test]
    fn test_duplicate_points_map_to_first_occurrence() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(5.0, 10.0),
        ];
        let triples = SpadeTriangulator.triangulate(&points).unwrap();
        assert_eq!(triples.len(), 1);
        assert!(triples[0].iter().all(|&i| i != 2));
        assert!(triples[0].iter().all(|&i| i < points.len()));
    }

    #[test]
    fn test_too_few_points_give_no_triangles() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert!(SpadeTriangulator.triangulate(&points).unwrap().is_empty());
        assert!(SpadeTriangulator.triangulate(&[]).unwrap().is_empty());
    }
}
