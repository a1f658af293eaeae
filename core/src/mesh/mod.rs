//! Mesh description types.
//!
//! [`MeshData`] is the read-only view of a mesh asset that editor tooling
//! inspects: vertex attribute layout, submesh table, bounds, index format,
//! and skinning/blend-shape presence. The actual vertex and index buffers
//! are owned elsewhere (by a renderer or an asset pipeline).

pub mod data;
pub mod layout;
pub mod topology;

pub use data::{MeshData, SubMesh};
pub use layout::{VertexAttributeDescriptor, VertexFormat, VertexSemantic};
pub use topology::{IndexFormat, PrimitiveTopology};
