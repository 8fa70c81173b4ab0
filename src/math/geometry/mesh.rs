// src/math/geometry/mesh.rs

use super::delaunay::IndexTriple;
use crate::math::{
    error::{EffectError, EffectResult},
    types::Point,
};

/// Ein Dreieck des Netzes. `id` ist seine Position im Netz und bleibt für
/// die gesamte Lebensdauer einer Netz-Generation stabil.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub id: usize,
    pub vertices: [Point; 3],
}

impl Triangle {
    /// Prüft, ob mindestens eine Ecke in der achsenparallelen Box um `center` liegt.
    pub fn any_vertex_within_box(&self, center: Point, half_extent: f32) -> bool {
        self.vertices
            .iter()
            .any(|v| v.within_box(center, half_extent))
    }
}

/// Geordnete Dreiecksliste einer Generation, indiziert über `Triangle::id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    triangles: Vec<Triangle>,
}

impl TriangleMesh {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn get(&self, id: usize) -> Option<&Triangle> {
        self.triangles.get(id)
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triangle> {
        self.triangles.iter()
    }
}

pub struct MeshBuilder;

impl MeshBuilder {
    /// Baut aus Punktmenge und Indextripeln das Dreiecksnetz.
    /// Die Ecken werden in Tripel-Reihenfolge übernommen; Indizes außerhalb
    /// der Punktliste führen zu `EffectError::InvalidIndex`.
    pub fn build(points: &[Point], triples: &[IndexTriple]) -> EffectResult<TriangleMesh> {
        let lookup = |index: usize| {
            points.get(index).copied().ok_or(EffectError::InvalidIndex {
                index,
                point_count: points.len(),
            })
        };

        let triangles = triples
            .iter()
            .enumerate()
            .map(|(id, &[a, b, c])| {
                Ok(Triangle {
                    id,
                    vertices: [lookup(a)?, lookup(b)?, lookup(c)?],
                })
            })
            .collect::<EffectResult<Vec<_>>>()?;

        Ok(TriangleMesh { triangles })
    }
}
