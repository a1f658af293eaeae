//! Attribute packing.
//!
//! Flattens a [`SampleMesh`]'s attribute arrays into upload-ready byte
//! buffers, one per vertex stream, following the mesh's declared attribute
//! order and formats. Half floats go through the `half` crate; normalized
//! integer formats quantize with rounding.

use glam::Vec2;
use half::f16;
use larkspur_core::{IndexFormat, VertexFormat, VertexSemantic};

use crate::icosahedron::SampleMesh;

impl SampleMesh {
    /// Interleave all attributes assigned to `stream` into a byte buffer,
    /// vertex-major, in declaration order.
    pub fn vertex_stream_bytes(&self, stream: u32) -> Vec<u8> {
        let attributes: Vec<_> = self
            .attributes
            .iter()
            .filter(|attr| attr.stream == stream)
            .collect();
        let stride: usize = attributes.iter().map(|attr| attr.byte_size() as usize).sum();

        let mut bytes = Vec::with_capacity(stride * self.positions.len());
        for vertex in 0..self.positions.len() {
            for attr in &attributes {
                let value = self.component_vec(attr.semantic, vertex);
                for component in 0..attr.dimension as usize {
                    pack_component(&mut bytes, attr.format, value[component]);
                }
            }
        }
        bytes
    }

    /// The index buffer packed to the descriptor's index width.
    pub fn index_bytes(&self, format: IndexFormat) -> Vec<u8> {
        match format {
            IndexFormat::U16 => self
                .indices
                .iter()
                .flat_map(|&index| (index as u16).to_le_bytes())
                .collect(),
            IndexFormat::U32 => bytemuck::cast_slice(&self.indices).to_vec(),
        }
    }

    /// Raw position data as bytes (tightly packed `Vec3`s).
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// A vertex's attribute value widened to four components.
    ///
    /// Positions pad w with 1, directions with 0; two-component channels
    /// pad with 0.
    fn component_vec(&self, semantic: VertexSemantic, vertex: usize) -> [f32; 4] {
        match semantic {
            VertexSemantic::Position => {
                let p = self.positions[vertex];
                [p.x, p.y, p.z, 1.0]
            }
            VertexSemantic::Normal => {
                let n = self.normals[vertex];
                [n.x, n.y, n.z, 0.0]
            }
            VertexSemantic::Tangent => self.tangents[vertex].to_array(),
            VertexSemantic::Color => self.colors[vertex],
            VertexSemantic::TexCoord(0) => pad2(self.uv0[vertex]),
            VertexSemantic::TexCoord(1) => pad2(self.uv1[vertex]),
            // Channels 2-7 and skinning data are never generated.
            VertexSemantic::TexCoord(_) | VertexSemantic::Joints | VertexSemantic::Weights => {
                [0.0; 4]
            }
        }
    }
}

fn pad2(value: Vec2) -> [f32; 4] {
    [value.x, value.y, 0.0, 0.0]
}

fn pack_component(bytes: &mut Vec<u8>, format: VertexFormat, value: f32) {
    match format {
        VertexFormat::Float32 => bytes.extend_from_slice(&value.to_le_bytes()),
        VertexFormat::Float16 => bytes.extend_from_slice(&f16::from_f32(value).to_le_bytes()),
        VertexFormat::UNorm8 => bytes.push((value.clamp(0.0, 1.0) * 255.0).round() as u8),
        VertexFormat::SNorm8 => {
            bytes.extend_from_slice(&(((value.clamp(-1.0, 1.0) * 127.0).round()) as i8).to_le_bytes())
        }
        VertexFormat::UNorm16 => bytes
            .extend_from_slice(&((value.clamp(0.0, 1.0) * 65535.0).round() as u16).to_le_bytes()),
        VertexFormat::SNorm16 => bytes.extend_from_slice(
            &(((value.clamp(-1.0, 1.0) * 32767.0).round()) as i16).to_le_bytes(),
        ),
        VertexFormat::UInt8 => bytes.push(value.round().clamp(0.0, u8::MAX as f32) as u8),
        VertexFormat::SInt8 => bytes.extend_from_slice(
            &(value.round().clamp(i8::MIN as f32, i8::MAX as f32) as i8).to_le_bytes(),
        ),
        VertexFormat::UInt16 => bytes.extend_from_slice(
            &(value.round().clamp(0.0, u16::MAX as f32) as u16).to_le_bytes(),
        ),
        VertexFormat::SInt16 => bytes.extend_from_slice(
            &(value.round().clamp(i16::MIN as f32, i16::MAX as f32) as i16).to_le_bytes(),
        ),
        VertexFormat::UInt32 => bytes.extend_from_slice(&(value.round().max(0.0) as u32).to_le_bytes()),
        VertexFormat::SInt32 => bytes.extend_from_slice(&(value.round() as i32).to_le_bytes()),
    }
}
