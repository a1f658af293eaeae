//! Vertex attribute vocabulary.
//!
//! An attribute is described by a semantic (what the channel means), a
//! scalar numeric format, a dimension (1-4 components), and the stream it
//! lives in. Format and dimension are kept separate so byte footprints can
//! be derived per component: `byte_size(format) * dimension`.

/// Semantic meaning of a vertex attribute.
///
/// Semantics are used to match mesh attributes with shader inputs and to
/// gate display modes that visualize a specific channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexSemantic {
    /// Vertex position (typically Float32 x 3).
    Position,
    /// Vertex normal (typically Float32 x 3).
    Normal,
    /// Vertex tangent (typically Float32 x 4, w = handedness).
    Tangent,
    /// Vertex color (typically UNorm8 x 4 or Float32 x 4).
    Color,
    /// One of up to eight texture coordinate channels.
    TexCoord(u8),
    /// Bone indices for skinning (typically UInt8 x 4).
    Joints,
    /// Bone weights for skinning (typically Float32 x 4).
    Weights,
}

/// Number of texture-coordinate channels a mesh may carry.
pub const MAX_UV_CHANNELS: usize = 8;

impl VertexSemantic {
    /// The texture-coordinate semantic for a channel, if the channel index
    /// is valid.
    pub fn tex_coord(channel: usize) -> Option<Self> {
        (channel < MAX_UV_CHANNELS).then(|| Self::TexCoord(channel as u8))
    }

    /// The UV channel index this semantic addresses, if any.
    pub fn uv_channel(&self) -> Option<usize> {
        match self {
            Self::TexCoord(channel) => Some(*channel as usize),
            _ => None,
        }
    }

    /// Display name used in statistics listings.
    pub fn label(&self) -> String {
        match self {
            Self::Position => "Position".to_string(),
            Self::Normal => "Normal".to_string(),
            Self::Tangent => "Tangent".to_string(),
            Self::Color => "Color".to_string(),
            Self::TexCoord(channel) => format!("UV{channel}"),
            Self::Joints => "Joints".to_string(),
            Self::Weights => "Weights".to_string(),
        }
    }
}

/// Scalar numeric format of a vertex attribute component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexFormat {
    /// 32-bit IEEE float.
    Float32,
    /// 16-bit half float.
    Float16,
    /// 8-bit unsigned, normalized to 0.0..1.0.
    UNorm8,
    /// 8-bit signed, normalized to -1.0..1.0.
    SNorm8,
    /// 8-bit unsigned integer.
    UInt8,
    /// 8-bit signed integer.
    SInt8,
    /// 16-bit unsigned, normalized to 0.0..1.0.
    UNorm16,
    /// 16-bit signed, normalized to -1.0..1.0.
    SNorm16,
    /// 16-bit unsigned integer.
    UInt16,
    /// 16-bit signed integer.
    SInt16,
    /// 32-bit unsigned integer.
    UInt32,
    /// 32-bit signed integer.
    SInt32,
}

impl VertexFormat {
    /// Size in bytes of one component of this format.
    pub fn byte_size(&self) -> u32 {
        match self {
            Self::Float32 | Self::UInt32 | Self::SInt32 => 4,
            Self::Float16 | Self::UNorm16 | Self::SNorm16 | Self::UInt16 | Self::SInt16 => 2,
            Self::UNorm8 | Self::SNorm8 | Self::UInt8 | Self::SInt8 => 1,
        }
    }

    /// Display name used in statistics listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Float32 => "Float32",
            Self::Float16 => "Float16",
            Self::UNorm8 => "UNorm8",
            Self::SNorm8 => "SNorm8",
            Self::UInt8 => "UInt8",
            Self::SInt8 => "SInt8",
            Self::UNorm16 => "UNorm16",
            Self::SNorm16 => "SNorm16",
            Self::UInt16 => "UInt16",
            Self::SInt16 => "SInt16",
            Self::UInt32 => "UInt32",
            Self::SInt32 => "SInt32",
        }
    }
}

/// A single vertex attribute description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttributeDescriptor {
    /// Semantic meaning of this attribute.
    pub semantic: VertexSemantic,
    /// Scalar format of each component.
    pub format: VertexFormat,
    /// Number of components (1-4).
    pub dimension: u32,
    /// Vertex stream this attribute reads from.
    pub stream: u32,
}

impl VertexAttributeDescriptor {
    /// Create a new attribute descriptor on stream 0.
    pub fn new(semantic: VertexSemantic, format: VertexFormat, dimension: u32) -> Self {
        debug_assert!((1..=4).contains(&dimension), "dimension must be 1-4");
        Self {
            semantic,
            format,
            dimension,
            stream: 0,
        }
    }

    /// Move this attribute to a different stream.
    pub fn at_stream(mut self, stream: u32) -> Self {
        self.stream = stream;
        self
    }

    /// Byte footprint of this attribute for a single vertex.
    pub fn byte_size(&self) -> u32 {
        self.format.byte_size() * self.dimension
    }

    /// Float32 x 3 position on stream 0.
    pub fn position() -> Self {
        Self::new(VertexSemantic::Position, VertexFormat::Float32, 3)
    }

    /// Float32 x 3 normal on stream 0.
    pub fn normal() -> Self {
        Self::new(VertexSemantic::Normal, VertexFormat::Float32, 3)
    }

    /// Float32 x 4 tangent on stream 0.
    pub fn tangent() -> Self {
        Self::new(VertexSemantic::Tangent, VertexFormat::Float32, 4)
    }

    /// UNorm8 x 4 color on stream 0.
    pub fn color() -> Self {
        Self::new(VertexSemantic::Color, VertexFormat::UNorm8, 4)
    }

    /// Float32 x 2 texture coordinates on stream 0.
    ///
    /// Channel indices outside 0-7 fall back to channel 0.
    pub fn tex_coord(channel: usize) -> Self {
        let semantic =
            VertexSemantic::tex_coord(channel).unwrap_or(VertexSemantic::TexCoord(0));
        Self::new(semantic, VertexFormat::Float32, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_byte_sizes() {
        assert_eq!(VertexFormat::Float32.byte_size(), 4);
        assert_eq!(VertexFormat::Float16.byte_size(), 2);
        assert_eq!(VertexFormat::UNorm8.byte_size(), 1);
        assert_eq!(VertexFormat::SNorm8.byte_size(), 1);
        assert_eq!(VertexFormat::UInt8.byte_size(), 1);
        assert_eq!(VertexFormat::SInt8.byte_size(), 1);
        assert_eq!(VertexFormat::UNorm16.byte_size(), 2);
        assert_eq!(VertexFormat::SNorm16.byte_size(), 2);
        assert_eq!(VertexFormat::UInt16.byte_size(), 2);
        assert_eq!(VertexFormat::SInt16.byte_size(), 2);
        assert_eq!(VertexFormat::UInt32.byte_size(), 4);
        assert_eq!(VertexFormat::SInt32.byte_size(), 4);
    }

    #[test]
    fn byte_size_is_one_of_expected_values() {
        let formats = [
            VertexFormat::Float32,
            VertexFormat::Float16,
            VertexFormat::UNorm8,
            VertexFormat::SNorm8,
            VertexFormat::UInt8,
            VertexFormat::SInt8,
            VertexFormat::UNorm16,
            VertexFormat::SNorm16,
            VertexFormat::UInt16,
            VertexFormat::SInt16,
            VertexFormat::UInt32,
            VertexFormat::SInt32,
        ];
        for format in formats {
            assert!([1, 2, 4].contains(&format.byte_size()));
        }
    }

    #[test]
    fn descriptor_byte_size_scales_with_dimension() {
        let attr = VertexAttributeDescriptor::new(VertexSemantic::Position, VertexFormat::Float32, 3);
        assert_eq!(attr.byte_size(), 12);

        let color = VertexAttributeDescriptor::color();
        assert_eq!(color.byte_size(), 4);
    }

    #[test]
    fn tex_coord_channel_bounds() {
        assert_eq!(
            VertexSemantic::tex_coord(7),
            Some(VertexSemantic::TexCoord(7))
        );
        assert_eq!(VertexSemantic::tex_coord(8), None);
        assert_eq!(VertexSemantic::TexCoord(3).uv_channel(), Some(3));
        assert_eq!(VertexSemantic::Normal.uv_channel(), None);
    }

    #[test]
    fn semantic_labels() {
        assert_eq!(VertexSemantic::Position.label(), "Position");
        assert_eq!(VertexSemantic::TexCoord(2).label(), "UV2");
    }
}
