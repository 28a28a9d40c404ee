//! Metadata structures attached to kind instances.
//!
//! Both types serialize as camelCase JSON via `serde`; timestamps are
//! `chrono` UTC date-times encoded as RFC 3339 strings.

pub mod kube_object;
pub mod metadata;

pub use kube_object::KubeObjectMetadata;
pub use metadata::{Audit, Metadata};
