// src/render/systems.rs
use super::nodes::*;
use crate::effect::{EffectController, ScaleUpdate, systems::EffectImage};
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

/// Hält das vollflächige Raster auf Cover-Größe und im Zentrum.
pub fn sync_raster_background_system(
    mut commands: Commands,
    controller: Res<EffectController>,
    effect_image: Res<EffectImage>,
    mut background: Query<(&mut Sprite, &mut Handle<Image>), With<RasterBackground>>,
) {
    let Some(image) = effect_image.handle.clone() else {
        return;
    };
    let size = controller.base_size();

    match background.get_single_mut() {
        Ok((mut sprite, mut texture)) => {
            if *texture != image {
                *texture = image;
            }
            if sprite.custom_size != Some(size) {
                sprite.custom_size = Some(size);
            }
        }
        Err(_) => {
            commands.spawn((
                SpriteBundle {
                    texture: image,
                    sprite: Sprite {
                        custom_size: Some(size),
                        ..default()
                    },
                    ..default()
                },
                RasterBackground,
            ));
        }
    }
}

/// Gleicht die Render-Knoten mit der aktuellen Netz-Generation ab.
pub fn sync_triangle_nodes_system(
    mut commands: Commands,
    controller: Res<EffectController>,
    effect_image: Res<EffectImage>,
    mut pool: ResMut<TriangleNodePool>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if pool.is_current(controller.generation()) {
        return;
    }

    for entity in pool.recycle_all() {
        commands.entity(entity).insert(Visibility::Hidden);
    }
    pool.mark_generation(controller.generation());

    let Some(image) = effect_image.handle.clone() else {
        return;
    };
    if controller.mesh().is_empty() {
        return;
    }

    // Ein gemeinsames Material je Bild
    if pool.material_image != Some(image.id()) {
        pool.material = Some(materials.add(ColorMaterial {
            color: Color::WHITE,
            texture: Some(image.clone()),
        }));
        pool.material_image = Some(image.id());
    }
    let Some(material) = pool.material.clone() else {
        return;
    };

    let viewport = controller.viewport();
    let center = controller.center();
    let base_size = controller.base_size();
    let transform = Transform::from_xyz(0.0, 0.0, TRIANGLE_Z);

    for triangle in controller.mesh().iter() {
        let mesh = Mesh2dHandle(meshes.add(triangle_render_mesh(
            triangle, viewport, center, base_size,
        )));
        let node = TriangleNode {
            triangle_id: triangle.id,
        };
        let entity = match pool.acquire() {
            Some(entity) => {
                commands.entity(entity).insert((
                    mesh,
                    material.clone(),
                    transform,
                    Visibility::Visible,
                    node,
                ));
                entity
            }
            None => commands
                .spawn((
                    MaterialMesh2dBundle {
                        mesh,
                        material: material.clone(),
                        transform,
                        ..default()
                    },
                    node,
                ))
                .id(),
        };
        pool.activate(entity);
    }

    debug!(
        "Triangle nodes synced: {} active, {} spare",
        pool.active_len(),
        pool.free_len()
    );
}

/// Überträgt die Skalierungen des Frames auf die Bildausschnitte.
pub fn apply_scale_updates_system(
    mut updates: EventReader<ScaleUpdate>,
    controller: Res<EffectController>,
    pool: Res<TriangleNodePool>,
    nodes: Query<&Mesh2dHandle, With<TriangleNode>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let viewport = controller.viewport();
    for update in updates.read() {
        let Some(triangle) = controller.mesh().get(update.triangle_id) else {
            continue;
        };
        let Some(entity) = pool.node_for(update.triangle_id) else {
            continue;
        };
        let Ok(handle) = nodes.get(entity) else {
            continue;
        };
        if let Some(mesh) = meshes.get_mut(&handle.0) {
            update_triangle_uvs(mesh, triangle, viewport, update.center, update.size);
        }
    }
}
