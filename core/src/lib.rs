//! # Larkspur Core
//!
//! CPU-side mesh description shared by the Larkspur editor tooling.
//!
//! This crate provides:
//! - [`mesh::MeshData`] - Read-only description of a mesh asset (attribute
//!   layout, submesh table, bounds, index format)
//! - [`mesh::VertexFormat`] / [`mesh::VertexSemantic`] - Vertex attribute
//!   vocabulary with per-format byte sizes
//! - [`Bounds`] - Axis-aligned bounding volume used for camera framing
//!
//! No GPU resources live here; renderers and editors consume these
//! descriptions and own the corresponding device objects themselves.

pub mod bounds;
pub mod mesh;

pub use bounds::Bounds;
pub use mesh::{
    IndexFormat, MeshData, PrimitiveTopology, SubMesh, VertexAttributeDescriptor, VertexFormat,
    VertexSemantic,
};

/// Core library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
