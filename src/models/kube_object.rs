//! Metadata found in a Kubernetes-style object's `metadata` field.

use super::metadata::Metadata;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The subset of an API server object's metadata relevant to a kind's
/// implementation.
///
/// Not exhaustive: only fields a kind may care about are modeled, which keeps
/// it usable against any compliant API server.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KubeObjectMetadata {
    pub creation_timestamp: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_timestamp: Option<DateTime<Utc>>,

    pub finalizers: Vec<String>,

    pub labels: BTreeMap<String, String>,

    pub resource_version: String,

    pub uid: String,
}

impl KubeObjectMetadata {
    pub fn is_marked_for_deletion(&self) -> bool {
        self.deletion_timestamp.is_some()
    }
}

impl From<&Metadata> for KubeObjectMetadata {
    fn from(meta: &Metadata) -> Self {
        Self {
            creation_timestamp: meta.creation_timestamp,
            deletion_timestamp: meta.deletion_timestamp,
            finalizers: meta.finalizers.clone(),
            labels: meta.labels.clone(),
            resource_version: meta.resource_version.clone(),
            uid: meta.uid.clone(),
        }
    }
}

impl From<Metadata> for KubeObjectMetadata {
    fn from(meta: Metadata) -> Self {
        Self {
            creation_timestamp: meta.creation_timestamp,
            deletion_timestamp: meta.deletion_timestamp,
            finalizers: meta.finalizers,
            labels: meta.labels,
            resource_version: meta.resource_version,
            uid: meta.uid,
        }
    }
}
