//! Icosahedron sample meshes.
//!
//! The same 12-vertex, 20-triangle icosahedron in several vertex-layout
//! variants, so the inspector has meshes that differ in attribute formats,
//! stream assignment, submesh structure, and topology. UVs, colors,
//! normals, and tangents are derived from the geometry, not authored.

use glam::{Vec2, Vec3, Vec4};
use larkspur_core::{
    Bounds, IndexFormat, MeshData, PrimitiveTopology, SubMesh, VertexAttributeDescriptor,
    VertexFormat, VertexSemantic,
};

/// A generated mesh: CPU attribute arrays plus the descriptor view.
#[derive(Debug, Clone)]
pub struct SampleMesh {
    /// Mesh name.
    pub name: String,
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Recomputed vertex normals (unit length).
    pub normals: Vec<Vec3>,
    /// Recomputed tangents, w = handedness.
    pub tangents: Vec<Vec4>,
    /// Vertex colors derived from the normals, RGBA in [0, 1].
    pub colors: Vec<[f32; 4]>,
    /// First texture-coordinate channel.
    pub uv0: Vec<Vec2>,
    /// Second texture-coordinate channel.
    pub uv1: Vec<Vec2>,
    /// Index buffer.
    pub indices: Vec<u32>,
    /// Submesh table over `indices`.
    pub submeshes: Vec<SubMesh>,
    /// The vertex layout this variant declares.
    pub attributes: Vec<VertexAttributeDescriptor>,
}

impl SampleMesh {
    /// The descriptor view the inspector consumes.
    pub fn descriptor(&self) -> MeshData {
        let mut mesh = MeshData::new(self.positions.len() as u32)
            .with_bounds(Bounds::from_points(&self.positions))
            .with_index_format(IndexFormat::U16)
            .with_label(self.name.clone());
        for attribute in &self.attributes {
            mesh = mesh.with_attribute(*attribute);
        }
        for submesh in &self.submeshes {
            mesh = mesh.with_submesh(*submesh);
        }
        mesh
    }

    /// Total index count across submeshes.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

// Golden-ratio icosahedron: three orthogonal rectangles.
fn icosahedron_positions() -> Vec<Vec3> {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    vec![
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

#[rustfmt::skip]
const ICO_INDICES: [u32; 60] = [
    0, 11, 5,
    0, 5, 1,
    0, 1, 7,
    0, 7, 10,
    0, 10, 11,
    1, 5, 9,
    5, 11, 4,
    11, 10, 2,
    10, 7, 6,
    7, 1, 8,
    3, 9, 4,
    3, 4, 2,
    3, 2, 6,
    3, 6, 8,
    3, 8, 9,
    4, 9, 5,
    2, 4, 11,
    6, 2, 10,
    8, 6, 7,
    9, 8, 1,
];

/// The standard variant: full-float geometry, UVs and color on stream 1.
pub fn standard() -> SampleMesh {
    build(
        "Ico",
        vec![
            VertexAttributeDescriptor::new(VertexSemantic::Position, VertexFormat::Float32, 3),
            VertexAttributeDescriptor::new(VertexSemantic::Normal, VertexFormat::Float32, 3),
            VertexAttributeDescriptor::new(VertexSemantic::Tangent, VertexFormat::Float32, 4),
            VertexAttributeDescriptor::new(VertexSemantic::TexCoord(0), VertexFormat::Float32, 2)
                .at_stream(1),
            VertexAttributeDescriptor::new(VertexSemantic::TexCoord(1), VertexFormat::Float32, 2)
                .at_stream(1),
            VertexAttributeDescriptor::new(VertexSemantic::Color, VertexFormat::UNorm8, 4)
                .at_stream(1),
        ],
        false,
        false,
    )
}

/// Half-float geometry with full-float UVs and color, single stream.
pub fn half_float() -> SampleMesh {
    build(
        "Ico-F16PosNorTan-F32Color",
        vec![
            VertexAttributeDescriptor::new(VertexSemantic::Position, VertexFormat::Float16, 4),
            VertexAttributeDescriptor::new(VertexSemantic::Normal, VertexFormat::Float16, 4),
            VertexAttributeDescriptor::new(VertexSemantic::Tangent, VertexFormat::Float16, 4),
            VertexAttributeDescriptor::new(VertexSemantic::TexCoord(0), VertexFormat::Float32, 2),
            VertexAttributeDescriptor::new(VertexSemantic::TexCoord(1), VertexFormat::Float32, 2),
            VertexAttributeDescriptor::new(VertexSemantic::Color, VertexFormat::Float32, 4),
        ],
        false,
        false,
    )
}

/// Four equal triangle submeshes of 15 indices each.
pub fn multi_submesh() -> SampleMesh {
    build(
        "Ico-MultiSubMeshes",
        vec![
            VertexAttributeDescriptor::new(VertexSemantic::Position, VertexFormat::Float32, 3),
            VertexAttributeDescriptor::new(VertexSemantic::Color, VertexFormat::UNorm8, 4)
                .at_stream(1),
        ],
        true,
        false,
    )
}

/// Every triangle expanded into its three edges, lines topology.
pub fn lines() -> SampleMesh {
    build(
        "Ico-Lines",
        vec![
            VertexAttributeDescriptor::new(VertexSemantic::Position, VertexFormat::Float32, 3),
            VertexAttributeDescriptor::new(VertexSemantic::Color, VertexFormat::UNorm8, 4)
                .at_stream(1),
        ],
        false,
        true,
    )
}

fn build(
    name: &str,
    attributes: Vec<VertexAttributeDescriptor>,
    multi_submeshes: bool,
    lines_topology: bool,
) -> SampleMesh {
    let positions = icosahedron_positions();
    let mut indices: Vec<u32> = ICO_INDICES.to_vec();

    let uv0: Vec<Vec2> = positions.iter().map(|p| Vec2::new(p.x, p.y) * 0.5).collect();
    let uv1: Vec<Vec2> = positions.iter().map(|p| Vec2::new(p.x, p.z) * 0.3).collect();

    let normals = recalculate_normals(&positions, &indices);
    let tangents = recalculate_tangents(&positions, &normals, &uv0, &indices);
    let colors: Vec<[f32; 4]> = normals
        .iter()
        .map(|n| {
            [
                -n.x * 0.5 + 0.5,
                (n.y * 7.0).cos() * 0.5 + 0.5,
                (n.z * 5.0).sin() * 0.5 + 0.5,
                0.5,
            ]
        })
        .collect();

    let mut topology = PrimitiveTopology::Triangles;
    if lines_topology {
        let mut edges = Vec::with_capacity(indices.len() * 2);
        for triangle in indices.chunks_exact(3) {
            let [a, b, c] = [triangle[0], triangle[1], triangle[2]];
            edges.extend_from_slice(&[a, b, b, c, c, a]);
        }
        indices = edges;
        topology = PrimitiveTopology::Lines;
    }

    let submeshes = if multi_submeshes {
        let quarter = indices.len() as u32 / 4;
        (0..4)
            .map(|part| {
                let start = part * quarter;
                SubMesh::triangles(start, quarter)
                    .with_bounds(range_bounds(&positions, &indices, start, quarter))
            })
            .collect()
    } else {
        vec![
            SubMesh::triangles(0, indices.len() as u32)
                .with_topology(topology)
                .with_bounds(Bounds::from_points(&positions)),
        ]
    };

    SampleMesh {
        name: name.to_string(),
        positions,
        normals,
        tangents,
        colors,
        uv0,
        uv1,
        indices,
        submeshes,
        attributes,
    }
}

fn range_bounds(positions: &[Vec3], indices: &[u32], start: u32, count: u32) -> Bounds {
    let referenced: Vec<Vec3> = indices[start as usize..(start + count) as usize]
        .iter()
        .map(|&index| positions[index as usize])
        .collect();
    Bounds::from_points(&referenced)
}

/// Area-weighted vertex normals from triangle faces.
fn recalculate_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for triangle in indices.chunks_exact(3) {
        let [a, b, c] = [
            triangle[0] as usize,
            triangle[1] as usize,
            triangle[2] as usize,
        ];
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    normals
        .into_iter()
        .map(|normal| normal.normalize_or_zero())
        .collect()
}

/// Per-triangle tangent accumulation over UV0, Gram-Schmidt
/// orthonormalized against the normal; w carries handedness.
fn recalculate_tangents(
    positions: &[Vec3],
    normals: &[Vec3],
    uv0: &[Vec2],
    indices: &[u32],
) -> Vec<Vec4> {
    let mut tan_u = vec![Vec3::ZERO; positions.len()];
    let mut tan_v = vec![Vec3::ZERO; positions.len()];

    for triangle in indices.chunks_exact(3) {
        let [a, b, c] = [
            triangle[0] as usize,
            triangle[1] as usize,
            triangle[2] as usize,
        ];
        let edge1 = positions[b] - positions[a];
        let edge2 = positions[c] - positions[a];
        let delta1 = uv0[b] - uv0[a];
        let delta2 = uv0[c] - uv0[a];

        let det = delta1.x * delta2.y - delta2.x * delta1.y;
        if det.abs() < f32::EPSILON {
            continue;
        }
        let r = 1.0 / det;
        let u_dir = (edge1 * delta2.y - edge2 * delta1.y) * r;
        let v_dir = (edge2 * delta1.x - edge1 * delta2.x) * r;

        for vertex in [a, b, c] {
            tan_u[vertex] += u_dir;
            tan_v[vertex] += v_dir;
        }
    }

    (0..positions.len())
        .map(|vertex| {
            let normal = normals[vertex];
            let tangent = (tan_u[vertex] - normal * normal.dot(tan_u[vertex])).normalize_or_zero();
            if tangent == Vec3::ZERO {
                return Vec4::new(1.0, 0.0, 0.0, 1.0);
            }
            let handedness = if normal.cross(tangent).dot(tan_v[vertex]) < 0.0 {
                -1.0
            } else {
                1.0
            };
            tangent.extend(handedness)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_icosahedron_shape() {
        let mesh = standard();
        assert_eq!(mesh.positions.len(), 12);
        assert_eq!(mesh.indices.len(), 60);
        assert_eq!(mesh.submeshes.len(), 1);

        let descriptor = mesh.descriptor();
        assert_eq!(descriptor.vertex_count(), 12);
        assert_eq!(descriptor.submesh(0).unwrap().index_count, 60);
        assert!(descriptor.has_uv_channel(0));
        assert!(descriptor.has_uv_channel(1));
        assert!(!descriptor.has_uv_channel(2));
        assert!(descriptor.has_attribute(VertexSemantic::Color));
    }

    #[test]
    fn bounds_cover_the_golden_rectangles() {
        let mesh = standard();
        let bounds = mesh.descriptor().bounds();
        let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
        assert!(bounds.center.length() < 1e-6);
        assert!((bounds.extents - Vec3::splat(t)).length() < 1e-5);
    }

    #[test]
    fn normals_are_unit_length_and_outward() {
        let mesh = standard();
        for (position, normal) in mesh.positions.iter().zip(&mesh.normals) {
            assert!((normal.length() - 1.0).abs() < 1e-5);
            // An icosahedron centered at the origin has outward normals.
            assert!(normal.dot(position.normalize()) > 0.5);
        }
    }

    #[test]
    fn tangents_are_unit_with_handedness() {
        let mesh = standard();
        assert_eq!(mesh.tangents.len(), 12);
        for (tangent, normal) in mesh.tangents.iter().zip(&mesh.normals) {
            assert!((tangent.truncate().length() - 1.0).abs() < 1e-4);
            assert!(tangent.truncate().dot(*normal).abs() < 1e-4);
            assert!(tangent.w == 1.0 || tangent.w == -1.0);
        }
    }

    #[test]
    fn colors_derive_from_normals() {
        let mesh = standard();
        for color in &mesh.colors {
            for channel in &color[..3] {
                assert!((0.0..=1.0).contains(channel));
            }
            assert_eq!(color[3], 0.5);
        }
    }

    #[test]
    fn multi_submesh_variant_splits_evenly() {
        let mesh = multi_submesh();
        let descriptor = mesh.descriptor();
        assert_eq!(descriptor.submesh_count(), 4);
        for (index, submesh) in descriptor.submeshes().iter().enumerate() {
            assert_eq!(submesh.index_count, 15);
            assert_eq!(submesh.index_start, 15 * index as u32);
            assert_eq!(submesh.topology, PrimitiveTopology::Triangles);
            assert!(submesh.bounds.sphere_radius() <= descriptor.bounds().sphere_radius() + 1e-5);
        }
    }

    #[test]
    fn lines_variant_expands_edges() {
        let mesh = lines();
        assert_eq!(mesh.indices.len(), 120);
        let descriptor = mesh.descriptor();
        assert_eq!(descriptor.submesh_count(), 1);
        assert_eq!(descriptor.submesh(0).unwrap().topology, PrimitiveTopology::Lines);
        assert_eq!(descriptor.submesh(0).unwrap().index_count, 120);
    }

    #[test]
    fn half_float_variant_declares_f16_geometry() {
        let mesh = half_float();
        let descriptor = mesh.descriptor();
        let position = descriptor.attribute(VertexSemantic::Position).unwrap();
        assert_eq!(position.format, VertexFormat::Float16);
        assert_eq!(position.dimension, 4);
        let color = descriptor.attribute(VertexSemantic::Color).unwrap();
        assert_eq!(color.format, VertexFormat::Float32);
        assert_eq!(color.stream, 0);
    }
}
