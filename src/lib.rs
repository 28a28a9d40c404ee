//! Metadata shapes attached to kind instances and their JSON wire contract.
//!
//! [`Metadata`] is the full envelope of a kind instance, audit fields and an
//! open bag for unmodeled server fields included. [`KubeObjectMetadata`] is
//! the reduced subset found in an API server object's `metadata` field.
//! Both are (de)serialized through [`MetadataCodec`].

pub mod errors;
pub mod models;
pub mod schema;
pub mod services;

pub use errors::{MetadataError, MetadataResult};
pub use models::{Audit, KubeObjectMetadata, Metadata};
pub use schema::Shape;
pub use services::codec::MetadataCodec;
