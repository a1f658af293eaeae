//! Derived mesh statistics.
//!
//! Pure reads over [`MeshData`]: byte footprints from the attribute layout,
//! index totals across submeshes, per-submesh primitive counts, and the
//! aggregate line for multi-selections. The information panel queries these
//! independently of the render loop.

use std::fmt::Write;
use std::ops::Range;

use glam::Vec3;
use larkspur_core::{Bounds, MeshData, PrimitiveTopology};

/// Bytes one vertex occupies across all attribute descriptors, times the
/// vertex count.
pub fn vertex_footprint_bytes(mesh: &MeshData) -> u64 {
    let per_vertex: u64 = mesh
        .attributes()
        .iter()
        .map(|attr| attr.byte_size() as u64)
        .sum();
    per_vertex * mesh.vertex_count() as u64
}

/// Sum of index counts across all submeshes.
pub fn total_index_count(mesh: &MeshData) -> u64 {
    mesh.submeshes()
        .iter()
        .map(|submesh| submesh.index_count as u64)
        .sum()
}

/// Total index bytes given the mesh's index width.
pub fn index_footprint_bytes(mesh: &MeshData) -> u64 {
    total_index_count(mesh) * mesh.index_format().byte_size() as u64
}

/// Derived description of one submesh.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmeshSummary {
    /// Primitive assembly rule.
    pub topology: PrimitiveTopology,
    /// `index_count / vertices_per_primitive(topology)`.
    pub primitive_count: u32,
    /// The submesh's index range.
    pub index_range: Range<u32>,
    /// Bounds of the addressed geometry.
    pub bounds: Bounds,
    /// Base vertex offset.
    pub base_vertex: u32,
}

/// Summarize a submesh. `None` for out-of-range indices.
pub fn submesh_summary(mesh: &MeshData, index: usize) -> Option<SubmeshSummary> {
    let submesh = mesh.submesh(index)?;
    Some(SubmeshSummary {
        topology: submesh.topology,
        primitive_count: submesh.index_count / submesh.topology.vertices_per_primitive(),
        index_range: submesh.index_start..submesh.index_start + submesh.index_count,
        bounds: submesh.bounds,
        base_vertex: submesh.base_vertex,
    })
}

/// Totals across a multi-selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTotals {
    /// Number of meshes in the selection.
    pub mesh_count: usize,
    /// Sum of vertex counts.
    pub total_vertices: u64,
    /// Sum of index counts across every submesh of every mesh.
    pub total_indices: u64,
}

/// Aggregate a selection of meshes.
///
/// The two totals are separate passes on purpose: vertices come from the
/// vertex table, indices from every submesh.
pub fn aggregate_selection(meshes: &[MeshData]) -> SelectionTotals {
    let total_vertices = meshes.iter().map(|mesh| mesh.vertex_count() as u64).sum();
    let total_indices = meshes.iter().map(total_index_count).sum();
    SelectionTotals {
        mesh_count: meshes.len(),
        total_vertices,
        total_indices,
    }
}

/// Render a byte count for display.
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

fn format_vec3(v: Vec3) -> String {
    format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z)
}

/// The information-panel report for a single mesh.
pub fn report(mesh: &MeshData) -> String {
    let mut text = String::new();

    let _ = writeln!(
        text,
        "Vertices: {} ({})",
        mesh.vertex_count(),
        format_bytes(vertex_footprint_bytes(mesh))
    );

    let _ = writeln!(text, "Format:");
    for attr in mesh.attributes() {
        let stream = if attr.stream != 0 {
            format!(", stream {}", attr.stream)
        } else {
            String::new()
        };
        let _ = writeln!(
            text,
            "    {}: {} x {} ({}){}",
            attr.semantic.label(),
            attr.format.label(),
            attr.dimension,
            format_bytes(attr.byte_size() as u64),
            stream
        );
    }

    let bounds = mesh.bounds();
    let _ = writeln!(text, "Bounds:");
    let _ = writeln!(text, "    Center {}", format_vec3(bounds.center));
    let _ = writeln!(text, "    Size {}", format_vec3(bounds.size()));

    let _ = writeln!(
        text,
        "Indices: {} ({})",
        total_index_count(mesh),
        format_bytes(index_footprint_bytes(mesh))
    );

    let submesh_word = if mesh.submesh_count() == 1 {
        "submesh"
    } else {
        "submeshes"
    };
    let _ = writeln!(text, "{} {}:", mesh.submesh_count(), submesh_word);
    for index in 0..mesh.submesh_count() {
        // Unwrap is fine: the index comes straight from submesh_count.
        let summary = submesh_summary(mesh, index).unwrap();
        let base = if summary.base_vertex != 0 {
            format!(", base vertex {}", summary.base_vertex)
        } else {
            String::new()
        };
        let _ = writeln!(
            text,
            "    {}: {} indices ({} primitives) starting from {}{}",
            summary.topology.label(),
            summary.index_range.len(),
            summary.primitive_count,
            summary.index_range.start,
            base
        );
        let _ = writeln!(
            text,
            "    Bounds: center {}, size {}",
            format_vec3(summary.bounds.center),
            format_vec3(summary.bounds.size())
        );
    }

    if mesh.is_skinned() {
        let _ = writeln!(text, "Skin:");
        let _ = writeln!(text, "    {} bone weights", mesh.skin_weight_count());
    }
    if mesh.blend_shape_count() > 0 {
        let _ = writeln!(text, "Blend Shapes:");
        let _ = writeln!(text, "    {} blend shapes", mesh.blend_shape_count());
    }

    text
}

/// The information-panel report for a multi-selection.
pub fn selection_report(meshes: &[MeshData]) -> String {
    let totals = aggregate_selection(meshes);
    format!(
        "{} meshes selected, {} total vertices, {} total indices",
        totals.mesh_count, totals.total_vertices, totals.total_indices
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use larkspur_core::{IndexFormat, SubMesh, VertexAttributeDescriptor};

    fn icosahedron_like(vertex_count: u32) -> MeshData {
        MeshData::new(vertex_count)
            .with_attribute(VertexAttributeDescriptor::position())
            .with_attribute(VertexAttributeDescriptor::normal())
            .with_attribute(VertexAttributeDescriptor::tangent())
            .with_attribute(VertexAttributeDescriptor::tex_coord(0))
            .with_attribute(VertexAttributeDescriptor::tex_coord(1))
            .with_attribute(VertexAttributeDescriptor::color().at_stream(1))
            .with_submesh(SubMesh::triangles(0, 15))
            .with_submesh(SubMesh::triangles(15, 15))
            .with_submesh(SubMesh::triangles(30, 15))
            .with_submesh(SubMesh::triangles(45, 15))
    }

    #[test]
    fn vertex_footprint_is_linear_in_vertex_count() {
        let mesh = icosahedron_like(12);
        // 12 + 12 + 16 + 8 + 8 + 4 bytes per vertex.
        assert_eq!(vertex_footprint_bytes(&mesh), 60 * 12);
        assert_eq!(
            vertex_footprint_bytes(&icosahedron_like(24)),
            2 * vertex_footprint_bytes(&mesh)
        );
    }

    #[test]
    fn total_index_count_sums_submeshes() {
        assert_eq!(total_index_count(&icosahedron_like(12)), 60);
    }

    #[test]
    fn index_footprint_follows_index_width() {
        let mesh = icosahedron_like(12);
        assert_eq!(index_footprint_bytes(&mesh), 120);
        let wide = icosahedron_like(12).with_index_format(IndexFormat::U32);
        assert_eq!(index_footprint_bytes(&wide), 240);
    }

    #[test]
    fn icosahedron_submeshes_report_five_triangles() {
        let mesh = icosahedron_like(12);
        for index in 0..4 {
            let summary = submesh_summary(&mesh, index).unwrap();
            assert_eq!(summary.primitive_count, 5);
            assert_eq!(summary.index_range.len(), 15);
        }
        assert!(submesh_summary(&mesh, 4).is_none());
    }

    #[test]
    fn primitive_counts_per_topology() {
        let mesh = MeshData::new(8)
            .with_submesh(SubMesh::triangles(0, 12).with_topology(PrimitiveTopology::Points))
            .with_submesh(SubMesh::triangles(12, 12).with_topology(PrimitiveTopology::Lines))
            .with_submesh(SubMesh::triangles(24, 12).with_topology(PrimitiveTopology::LineStrip))
            .with_submesh(SubMesh::triangles(36, 12))
            .with_submesh(SubMesh::triangles(48, 12).with_topology(PrimitiveTopology::Quads));

        let counts: Vec<u32> = (0..5)
            .map(|index| submesh_summary(&mesh, index).unwrap().primitive_count)
            .collect();
        // LineStrip deliberately divides by 2 like Lines.
        assert_eq!(counts, vec![12, 6, 6, 4, 3]);
    }

    #[test]
    fn aggregate_selection_sums_independently() {
        let meshes = vec![
            icosahedron_like(12),
            MeshData::new(100).with_submesh(SubMesh::triangles(0, 30)),
            MeshData::new(7)
                .with_submesh(SubMesh::triangles(0, 9))
                .with_submesh(SubMesh::triangles(9, 21)),
        ];
        let totals = aggregate_selection(&meshes);
        assert_eq!(totals.mesh_count, 3);
        assert_eq!(totals.total_vertices, 12 + 100 + 7);
        assert_eq!(totals.total_indices, 60 + 30 + 30);
    }

    #[test]
    fn aggregate_of_empty_selection_is_zero() {
        let totals = aggregate_selection(&[]);
        assert_eq!(totals.mesh_count, 0);
        assert_eq!(totals.total_vertices, 0);
        assert_eq!(totals.total_indices, 0);
    }

    #[test]
    fn byte_formatting() {
        assert_eq!(format_bytes(720), "720 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn report_lists_attributes_and_submeshes() {
        let mesh = icosahedron_like(12)
            .with_skin_weights(12)
            .with_blend_shapes(2);
        let text = report(&mesh);

        assert!(text.contains("Vertices: 12 (720 B)"));
        assert!(text.contains("Position: Float32 x 3 (12 B)"));
        assert!(text.contains("Color: UNorm8 x 4 (4 B), stream 1"));
        assert!(text.contains("Indices: 60 (120 B)"));
        assert!(text.contains("4 submeshes:"));
        assert!(text.contains("Triangles: 15 indices (5 primitives) starting from 45"));
        assert!(text.contains("12 bone weights"));
        assert!(text.contains("2 blend shapes"));
    }

    #[test]
    fn selection_report_text() {
        let meshes = vec![icosahedron_like(12), icosahedron_like(12)];
        assert_eq!(
            selection_report(&meshes),
            "2 meshes selected, 24 total vertices, 120 total indices"
        );
    }
}
