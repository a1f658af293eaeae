//! Read-only mesh description.
//!
//! [`MeshData`] is what the inspector sees of a mesh asset: the attribute
//! layout, the submesh table, bounds, index width, and skinning/blend-shape
//! presence. It deliberately carries no vertex or index payload; buffers
//! stay with whatever owns the asset.

use crate::bounds::Bounds;

use super::layout::{VertexAttributeDescriptor, VertexSemantic};
use super::topology::{IndexFormat, PrimitiveTopology};

/// A contiguous index range rendered with one topology.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubMesh {
    /// Primitive assembly rule for this range.
    pub topology: PrimitiveTopology,
    /// First index of the range.
    pub index_start: u32,
    /// Number of indices in the range.
    pub index_count: u32,
    /// Value added to each index before vertex fetch.
    pub base_vertex: u32,
    /// Bounds of the geometry addressed by this range.
    pub bounds: Bounds,
}

impl SubMesh {
    /// Create a triangle submesh with zero base vertex and default bounds.
    pub fn triangles(index_start: u32, index_count: u32) -> Self {
        Self {
            topology: PrimitiveTopology::Triangles,
            index_start,
            index_count,
            base_vertex: 0,
            bounds: Bounds::default(),
        }
    }

    /// Set the topology.
    pub fn with_topology(mut self, topology: PrimitiveTopology) -> Self {
        self.topology = topology;
        self
    }

    /// Set the base vertex offset.
    pub fn with_base_vertex(mut self, base_vertex: u32) -> Self {
        self.base_vertex = base_vertex;
        self
    }

    /// Set the bounds.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }
}

/// Read-only description of a mesh asset.
///
/// Construction is builder-style:
///
/// ```
/// use larkspur_core::mesh::{MeshData, SubMesh, VertexAttributeDescriptor};
///
/// let mesh = MeshData::new(12)
///     .with_attribute(VertexAttributeDescriptor::position())
///     .with_attribute(VertexAttributeDescriptor::normal())
///     .with_submesh(SubMesh::triangles(0, 60))
///     .with_label("ico");
/// assert_eq!(mesh.vertex_count(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshData {
    label: Option<String>,
    vertex_count: u32,
    attributes: Vec<VertexAttributeDescriptor>,
    submeshes: Vec<SubMesh>,
    bounds: Bounds,
    index_format: IndexFormat,
    skin_weight_count: u32,
    blend_shape_count: u32,
}

impl MeshData {
    /// Create a mesh description with the given vertex count.
    pub fn new(vertex_count: u32) -> Self {
        Self {
            vertex_count,
            ..Self::default()
        }
    }

    /// Add a vertex attribute descriptor.
    pub fn with_attribute(mut self, attribute: VertexAttributeDescriptor) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add a submesh.
    pub fn with_submesh(mut self, submesh: SubMesh) -> Self {
        self.submeshes.push(submesh);
        self
    }

    /// Set the overall bounds.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the index width.
    pub fn with_index_format(mut self, format: IndexFormat) -> Self {
        self.index_format = format;
        self
    }

    /// Set the number of bone-weight entries (nonzero marks the mesh as
    /// skinned).
    pub fn with_skin_weights(mut self, count: u32) -> Self {
        self.skin_weight_count = count;
        self
    }

    /// Set the number of blend shapes.
    pub fn with_blend_shapes(mut self, count: u32) -> Self {
        self.blend_shape_count = count;
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The mesh label, if set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// The vertex attribute descriptors.
    pub fn attributes(&self) -> &[VertexAttributeDescriptor] {
        &self.attributes
    }

    /// The submesh table.
    pub fn submeshes(&self) -> &[SubMesh] {
        &self.submeshes
    }

    /// Number of submeshes.
    pub fn submesh_count(&self) -> usize {
        self.submeshes.len()
    }

    /// A submesh by index.
    pub fn submesh(&self, index: usize) -> Option<&SubMesh> {
        self.submeshes.get(index)
    }

    /// Overall bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Index width.
    pub fn index_format(&self) -> IndexFormat {
        self.index_format
    }

    /// Number of bone-weight entries.
    pub fn skin_weight_count(&self) -> u32 {
        self.skin_weight_count
    }

    /// Whether the mesh carries skinning data.
    pub fn is_skinned(&self) -> bool {
        self.skin_weight_count > 0
    }

    /// Number of blend shapes.
    pub fn blend_shape_count(&self) -> u32 {
        self.blend_shape_count
    }

    /// Whether the mesh carries a given attribute.
    pub fn has_attribute(&self, semantic: VertexSemantic) -> bool {
        self.attributes.iter().any(|attr| attr.semantic == semantic)
    }

    /// An attribute descriptor by semantic.
    pub fn attribute(&self, semantic: VertexSemantic) -> Option<&VertexAttributeDescriptor> {
        self.attributes.iter().find(|attr| attr.semantic == semantic)
    }

    /// Whether a texture-coordinate channel is present.
    pub fn has_uv_channel(&self, channel: usize) -> bool {
        VertexSemantic::tex_coord(channel).is_some_and(|semantic| self.has_attribute(semantic))
    }
}

static_assertions::assert_impl_all!(MeshData: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::layout::VertexFormat;
    use glam::Vec3;

    fn sample_mesh() -> MeshData {
        MeshData::new(12)
            .with_attribute(VertexAttributeDescriptor::position())
            .with_attribute(VertexAttributeDescriptor::normal())
            .with_attribute(VertexAttributeDescriptor::tex_coord(0))
            .with_attribute(VertexAttributeDescriptor::color().at_stream(1))
            .with_submesh(SubMesh::triangles(0, 60))
            .with_bounds(Bounds::new(Vec3::ZERO, Vec3::ONE))
            .with_label("ico")
    }

    #[test]
    fn attribute_queries() {
        let mesh = sample_mesh();
        assert!(mesh.has_attribute(VertexSemantic::Position));
        assert!(mesh.has_attribute(VertexSemantic::Color));
        assert!(!mesh.has_attribute(VertexSemantic::Tangent));
        assert!(mesh.has_uv_channel(0));
        assert!(!mesh.has_uv_channel(1));
        assert!(!mesh.has_uv_channel(8));

        let color = mesh.attribute(VertexSemantic::Color).unwrap();
        assert_eq!(color.stream, 1);
        assert_eq!(color.format, VertexFormat::UNorm8);
    }

    #[test]
    fn submesh_table() {
        let mesh = sample_mesh();
        assert_eq!(mesh.submesh_count(), 1);
        assert_eq!(mesh.submesh(0).unwrap().index_count, 60);
        assert!(mesh.submesh(1).is_none());
    }

    #[test]
    fn skinning_and_blend_shapes_default_absent() {
        let mesh = sample_mesh();
        assert!(!mesh.is_skinned());
        assert_eq!(mesh.blend_shape_count(), 0);

        let skinned = sample_mesh().with_skin_weights(12).with_blend_shapes(3);
        assert!(skinned.is_skinned());
        assert_eq!(skinned.blend_shape_count(), 3);
    }
}
