//! # Larkspur Mesh Generator
//!
//! Procedural sample meshes for exercising the mesh inspector: one
//! icosahedron in four vertex-layout variants (full float, half-float,
//! multi-submesh, lines topology). Each [`SampleMesh`] carries CPU-side
//! attribute arrays plus the [`MeshData`](larkspur_core::MeshData)
//! descriptor the inspector consumes, and can pack its attributes into
//! upload-ready byte buffers per stream.

pub mod icosahedron;
pub mod pack;

pub use icosahedron::{SampleMesh, half_float, lines, multi_submesh, standard};
