// src/render/nodes.rs

use crate::math::{
    geometry::{Triangle, image_uv},
    types::{Point, Vec2},
};
use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;

/// Z-Ebene der Dreiecke über dem Hintergrund-Raster.
pub const TRIANGLE_Z: f32 = 1.0;

/// Markiert eine Render-Entität, die aktuell das Dreieck `triangle_id` zeigt.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleNode {
    pub triangle_id: usize,
}

/// Markiert das vollflächige Bild hinter den Dreiecken.
#[derive(Component, Debug, Default)]
pub struct RasterBackground;

/// Freiliste wiederverwendbarer Render-Entitäten.
///
/// Beim Neuaufbau wandern alle aktiven Knoten in die Freiliste und werden
/// danach in Netz-Reihenfolge wieder ausgegeben; `active[id]` zeigt das
/// Dreieck `id`.
#[derive(Resource, Debug, Default)]
pub struct TriangleNodePool {
    free: Vec<Entity>,
    active: Vec<Entity>,
    generation: Option<u64>,
    pub material: Option<Handle<ColorMaterial>>,
    pub material_image: Option<AssetId<Image>>,
}

impl TriangleNodePool {
    /// Gibt alle aktiven Knoten frei; die Rückgabe muss versteckt werden.
    pub fn recycle_all(&mut self) -> Vec<Entity> {
        let released: Vec<Entity> = self.active.drain(..).collect();
        self.free.extend(released.iter().copied());
        released
    }

    /// Nimmt einen freien Knoten, falls vorhanden.
    pub fn acquire(&mut self) -> Option<Entity> {
        self.free.pop()
    }

    pub fn activate(&mut self, entity: Entity) {
        self.active.push(entity);
    }

    pub fn node_for(&self, triangle_id: usize) -> Option<Entity> {
        self.active.get(triangle_id).copied()
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == Some(generation)
    }

    pub fn mark_generation(&mut self, generation: u64) {
        self.generation = Some(generation);
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn free_len(&self) -> usize {
        self.free.len()
    }
}

/// Effekt-Raum (oben links, y nach unten) -> Bevy-Weltraum (Zentrum, y nach oben).
pub fn to_world(point: Point, viewport: Vec2) -> Vec2 {
    Vec2::new(point.x - viewport.x * 0.5, viewport.y * 0.5 - point.y)
}

/// Ecken in Welt-Koordinaten gegen den Uhrzeigersinn sortiert.
pub fn ccw_vertices(triangle: &Triangle, viewport: Vec2) -> [Point; 3] {
    let [a, b, c] = triangle.vertices;
    let (wa, wb, wc) = (
        to_world(a, viewport),
        to_world(b, viewport),
        to_world(c, viewport),
    );
    if (wb - wa).perp_dot(wc - wa) < 0.0 {
        [a, c, b]
    } else {
        [a, b, c]
    }
}

/// UVs der Ecken für ein Bild der Größe `size`, zentriert auf `center`.
pub fn triangle_uvs(vertices: &[Point; 3], center: Point, size: Vec2) -> Vec<[f32; 2]> {
    vertices.iter().map(|&v| image_uv(v, center, size)).collect()
}

/// Erzeugt das 2D-Mesh eines Dreiecks, dessen Textur den unskalierten
/// Bildausschnitt zeigt.
pub fn triangle_render_mesh(
    triangle: &Triangle,
    viewport: Vec2,
    center: Point,
    size: Vec2,
) -> Mesh {
    let vertices = ccw_vertices(triangle, viewport);
    let positions: Vec<[f32; 3]> = vertices
        .iter()
        .map(|&v| {
            let w = to_world(v, viewport);
            [w.x, w.y, 0.0]
        })
        .collect();

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, vec![[0.0, 0.0, 1.0]; 3])
        .with_inserted_attribute(
            Mesh::ATTRIBUTE_UV_0,
            triangle_uvs(&vertices, center, size),
        )
        .with_inserted_indices(Indices::U32(vec![0, 1, 2]))
}

/// Setzt die UVs eines bestehenden Dreiecks-Meshes neu (Skalierung).
pub fn update_triangle_uvs(
    mesh: &mut Mesh,
    triangle: &Triangle,
    viewport: Vec2,
    center: Point,
    size: Vec2,
) {
    let vertices = ccw_vertices(triangle, viewport);
    mesh.insert_attribute(
        Mesh::ATTRIBUTE_UV_0,
        triangle_uvs(&vertices, center, size),
    );
}
