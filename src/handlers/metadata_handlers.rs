//! Handlers for the `kindmeta` subcommands.
//! Each takes the raw input bytes and returns the bytes to print; reading
//! files and writing stdout stays in `main`.

use crate::config::AppConfig;
use anyhow::{Context, Result};
use kind_metadata::{
    KubeObjectMetadata, Metadata, MetadataCodec, Shape,
    services::{normalize, split_server_metadata},
};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// `kindmeta decode` — decode as `shape` and print the normalized encoding.
pub fn decode(cfg: &AppConfig, shape: Shape, input: &[u8]) -> Result<Vec<u8>> {
    let out = normalize(shape, input, cfg.pretty)?;
    tracing::info!("decoded {} ({} bytes)", shape, input.len());
    Ok(out)
}

/// `kindmeta project` — print the API-server subset of full metadata.
pub fn project(cfg: &AppConfig, input: &[u8]) -> Result<Vec<u8>> {
    let meta = Metadata::decode(input)?;
    let kube = KubeObjectMetadata::from(meta);
    let out = if cfg.pretty {
        kube.encode_pretty()?
    } else {
        kube.encode()?
    };
    Ok(out)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SplitOutput {
    metadata: KubeObjectMetadata,
    extra_fields: BTreeMap<String, Value>,
}

/// `kindmeta split` — separate modeled server metadata from extra fields.
pub fn split(cfg: &AppConfig, input: &[u8]) -> Result<Vec<u8>> {
    let raw: Value = serde_json::from_slice(input).context("input is not valid JSON")?;
    let (metadata, extra_fields) = split_server_metadata(raw)?;
    tracing::info!(
        "split metadata for uid {} ({} extra fields)",
        metadata.uid,
        extra_fields.len()
    );

    let body = SplitOutput {
        metadata,
        extra_fields,
    };
    render(cfg, &body)
}

/// `kindmeta schema` — print the JSON Schema for `shape`.
pub fn schema(cfg: &AppConfig, shape: Shape) -> Result<Vec<u8>> {
    render(cfg, &shape.to_json_schema())
}

fn render<T: Serialize>(cfg: &AppConfig, body: &T) -> Result<Vec<u8>> {
    let out = if cfg.pretty {
        serde_json::to_vec_pretty(body)?
    } else {
        serde_json::to_vec(body)?
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cfg() -> AppConfig {
        AppConfig {
            pretty: false,
            default_shape: Shape::Metadata,
        }
    }

    #[test]
    fn project_drops_audit_and_extra_fields() {
        let input = json!({
            "createdBy": "a",
            "creationTimestamp": "2024-01-01T00:00:00Z",
            "deletionTimestamp": "2024-02-01T00:00:00Z",
            "extraFields": { "custom": { "x": 1 } },
            "finalizers": ["cleanup"],
            "labels": {},
            "resourceVersion": "1",
            "uid": "u1",
            "updateTimestamp": "2024-01-01T00:00:00Z",
            "updatedBy": "a"
        });

        let out = project(&cfg(), input.to_string().as_bytes()).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            json!({
                "creationTimestamp": "2024-01-01T00:00:00Z",
                "deletionTimestamp": "2024-02-01T00:00:00Z",
                "finalizers": ["cleanup"],
                "labels": {},
                "resourceVersion": "1",
                "uid": "u1"
            })
        );
    }

    #[test]
    fn split_wraps_both_halves() {
        let input = br#"{"uid":"u1","resourceVersion":"3","creationTimestamp":"2024-01-01T00:00:00Z","name":"home"}"#;
        let out = split(&cfg(), input).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["metadata"]["uid"], "u1");
        assert_eq!(value["metadata"]["labels"], json!({}));
        assert_eq!(value["extraFields"], json!({ "name": "home" }));
    }

    #[test]
    fn decode_surfaces_decoding_errors() {
        let err = decode(&cfg(), Shape::KubeObjectMetadata, b"{}").unwrap_err();
        let inner = err.downcast_ref::<kind_metadata::MetadataError>().unwrap();
        assert!(inner.is_decoding());
    }
}
