use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;
use bevy::sprite::{ColorMaterial, MeshMaterial2d};

use fd_core::{FillColor, ShapeGeometry};

use crate::ShapeVisual;

// Resource storing the shared unit circle mesh handle.
#[derive(Resource)]
pub(crate) struct CircleMeshHandle(Handle<Mesh>);

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn prepare_meshes(mut meshes: ResMut<Assets<Mesh>>, mut commands: Commands) {
    let mesh = meshes.add(Mesh::from(Circle::new(1.0)));
    commands.insert_resource(CircleMeshHandle(mesh));
}

/// Spawn a mesh child for every newly added shape.
pub(crate) fn spawn_shape_visuals(
    mut commands: Commands,
    circle_mesh: Option<Res<CircleMeshHandle>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    q_new: Query<(Entity, &ShapeGeometry, &FillColor), Added<ShapeGeometry>>,
) {
    let Some(circle_mesh) = circle_mesh else { return };
    for (entity, geometry, fill) in q_new.iter() {
        let (mesh, scale) = match geometry {
            ShapeGeometry::Circle { radius } => (circle_mesh.0.clone(), Vec3::splat(*radius)),
            ShapeGeometry::Polygon { points } => (meshes.add(polygon_mesh(points)), Vec3::ONE),
        };
        let material = materials.add(ColorMaterial::from(fill.0.to_bevy()));
        let child = commands
            .spawn((
                Mesh2d::from(mesh),
                MeshMaterial2d(material),
                Transform::from_scale(scale),
                Visibility::Visible,
                InheritedVisibility::VISIBLE,
                ShapeVisual,
            ))
            .id();
        commands.entity(entity).add_child(child);
    }
}

/// Repaint the child material whenever a shape's fill color changes. Materials
/// are per-visual, so mutating in place never bleeds onto other shapes.
pub(crate) fn sync_fill_colors(
    mut materials: ResMut<Assets<ColorMaterial>>,
    changed: Query<(&FillColor, &Children), Changed<FillColor>>,
    visuals: Query<&MeshMaterial2d<ColorMaterial>, With<ShapeVisual>>,
) {
    for (fill, children) in &changed {
        for child in children.iter() {
            if let Ok(mesh_mat) = visuals.get(child) {
                if let Some(material) = materials.get_mut(&mesh_mat.0) {
                    material.color = fill.0.to_bevy();
                }
            }
        }
    }
}

/// Fan-triangulate a convex outline into a 2D mesh.
fn polygon_mesh(points: &[Vec2]) -> Mesh {
    let min = points.iter().copied().reduce(Vec2::min).unwrap_or(Vec2::ZERO);
    let max = points.iter().copied().reduce(Vec2::max).unwrap_or(Vec2::ONE);
    let span = (max - min).max(Vec2::splat(f32::EPSILON));

    let positions: Vec<[f32; 3]> = points.iter().map(|p| [p.x, p.y, 0.0]).collect();
    let normals: Vec<[f32; 3]> = points.iter().map(|_| [0.0, 0.0, 1.0]).collect();
    let uvs: Vec<[f32; 2]> = points
        .iter()
        .map(|p| [(p.x - min.x) / span.x, (p.y - min.y) / span.y])
        .collect();
    let mut indices = Vec::with_capacity((points.len().saturating_sub(2)) * 3);
    for i in 1..points.len().saturating_sub(1) {
        indices.extend_from_slice(&[0u32, i as u32, i as u32 + 1]);
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}
