//! Errors raised while moving metadata on and off the wire.

use crate::schema::Shape;
use thiserror::Error;

/// A failed (de)serialization of one metadata structure.
///
/// Decoding is all-or-nothing: a payload either yields a complete value or
/// one of these, never a partially filled structure.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("decoding {shape}: {source}")]
    Decoding {
        shape: Shape,
        #[source]
        source: serde_json::Error,
    },
    #[error("encoding {shape}: {source}")]
    Encoding {
        shape: Shape,
        #[source]
        source: serde_json::Error,
    },
}

impl MetadataError {
    pub fn decoding(shape: Shape, source: serde_json::Error) -> Self {
        Self::Decoding { shape, source }
    }

    pub fn encoding(shape: Shape, source: serde_json::Error) -> Self {
        Self::Encoding { shape, source }
    }

    /// The structure that was being decoded or encoded.
    pub fn shape(&self) -> Shape {
        match self {
            Self::Decoding { shape, .. } | Self::Encoding { shape, .. } => *shape,
        }
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self, Self::Decoding { .. })
    }
}

pub type MetadataResult<T> = Result<T, MetadataError>;
