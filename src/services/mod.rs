//! Operations over the metadata models.

pub mod codec;

pub use codec::{MetadataCodec, normalize, split_server_metadata};
