// src/math/geometry/proximity.rs

use super::mesh::{Triangle, TriangleMesh};
use crate::math::types::Point;

/// Sucht Dreiecke in der Nähe des Zeigers.
///
/// "Nähe" ist bewusst ein achsenparalleler Box-Test mit halber Kantenlänge
/// `radius` und kein Kreistest: eine Ecke bei `(px + r, py + r)` zählt noch.
pub struct ProximityIndex;

impl ProximityIndex {
    /// Alle Dreiecke mit mindestens einer Ecke in der Box, in Netz-Reihenfolge.
    pub fn query<'a>(mesh: &'a TriangleMesh, pointer: Point, radius: f32) -> Vec<&'a Triangle> {
        mesh.iter()
            .filter(|triangle| triangle.any_vertex_within_box(pointer, radius))
            .collect()
    }

    /// Wie `query`, aber nur die Ids.
    pub fn query_ids(mesh: &TriangleMesh, pointer: Point, radius: f32) -> Vec<usize> {
        Self::query(mesh, pointer, radius)
            .into_iter()
            .map(|t| t.id)
            .collect()
    }
}
