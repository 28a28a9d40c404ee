//! Full metadata carried by a kind instance.

use super::kube_object::KubeObjectMetadata;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Metadata for one instance of a kind, including audit fields.
///
/// Every field except `deletion_timestamp` is required on the wire, even when
/// it holds an empty value (`"labels": {}`, `"finalizers": []`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Identity of whoever created the instance.
    pub created_by: String,

    pub creation_timestamp: DateTime<Utc>,

    /// Set only once the instance is marked for deletion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_timestamp: Option<DateTime<Utc>>,

    /// Fields pulled from the API server's metadata that have no concrete
    /// field here. Values are passed through untouched.
    pub extra_fields: BTreeMap<String, Value>,

    /// Pending cleanup hooks, processed in order.
    pub finalizers: Vec<String>,

    pub labels: BTreeMap<String, String>,

    /// Opaque optimistic-concurrency token.
    pub resource_version: String,

    pub uid: String,

    pub update_timestamp: DateTime<Utc>,

    /// Identity of whoever last modified the instance.
    pub updated_by: String,
}

/// The audit portion of [`Metadata`] that an API server does not track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Audit {
    pub created_by: String,
    pub updated_by: String,
    pub update_timestamp: DateTime<Utc>,
}

impl Metadata {
    /// Assemble full metadata from what the API server reported plus the
    /// audit fields tracked elsewhere.
    pub fn from_kube(
        kube: KubeObjectMetadata,
        audit: Audit,
        extra_fields: BTreeMap<String, Value>,
    ) -> Self {
        let KubeObjectMetadata {
            creation_timestamp,
            deletion_timestamp,
            finalizers,
            labels,
            resource_version,
            uid,
        } = kube;

        Self {
            created_by: audit.created_by,
            creation_timestamp,
            deletion_timestamp,
            extra_fields,
            finalizers,
            labels,
            resource_version,
            uid,
            update_timestamp: audit.update_timestamp,
            updated_by: audit.updated_by,
        }
    }

    pub fn audit(&self) -> Audit {
        Audit {
            created_by: self.created_by.clone(),
            updated_by: self.updated_by.clone(),
            update_timestamp: self.update_timestamp,
        }
    }

    pub fn is_marked_for_deletion(&self) -> bool {
        self.deletion_timestamp.is_some()
    }
}
