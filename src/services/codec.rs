//! JSON codec for the metadata structures.
//!
//! Decoding is all-or-nothing: a missing required field, a type mismatch or
//! an unparsable timestamp fails the whole structure with
//! [`MetadataError::Decoding`].

use crate::{
    errors::{MetadataError, MetadataResult},
    models::{KubeObjectMetadata, Metadata},
    schema::{FieldType, KUBE_OBJECT_METADATA_FIELDS, Shape},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Decode/encode operations shared by both metadata structures.
pub trait MetadataCodec: Serialize + DeserializeOwned {
    const SHAPE: Shape;

    fn decode(bytes: &[u8]) -> MetadataResult<Self> {
        debug!(shape = %Self::SHAPE, len = bytes.len(), "decoding metadata");
        serde_json::from_slice(bytes).map_err(|err| MetadataError::decoding(Self::SHAPE, err))
    }

    fn decode_str(input: &str) -> MetadataResult<Self> {
        Self::decode(input.as_bytes())
    }

    fn from_value(value: Value) -> MetadataResult<Self> {
        serde_json::from_value(value).map_err(|err| MetadataError::decoding(Self::SHAPE, err))
    }

    fn encode(&self) -> MetadataResult<Vec<u8>> {
        debug!(shape = %Self::SHAPE, "encoding metadata");
        serde_json::to_vec(self).map_err(|err| MetadataError::encoding(Self::SHAPE, err))
    }

    fn encode_pretty(&self) -> MetadataResult<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|err| MetadataError::encoding(Self::SHAPE, err))
    }

    fn to_value(&self) -> MetadataResult<Value> {
        serde_json::to_value(self).map_err(|err| MetadataError::encoding(Self::SHAPE, err))
    }
}

impl MetadataCodec for Metadata {
    const SHAPE: Shape = Shape::Metadata;
}

impl MetadataCodec for KubeObjectMetadata {
    const SHAPE: Shape = Shape::KubeObjectMetadata;
}

/// Decode `bytes` as `shape` and re-encode the result.
///
/// The output is the canonical encoding: map keys sorted, timestamps in UTC
/// and an absent `deletionTimestamp` dropped.
pub fn normalize(shape: Shape, bytes: &[u8], pretty: bool) -> MetadataResult<Vec<u8>> {
    match shape {
        Shape::Metadata => reencode(&Metadata::decode(bytes)?, pretty),
        Shape::KubeObjectMetadata => reencode(&KubeObjectMetadata::decode(bytes)?, pretty),
    }
}

fn reencode<T: MetadataCodec>(value: &T, pretty: bool) -> MetadataResult<Vec<u8>> {
    if pretty {
        value.encode_pretty()
    } else {
        value.encode()
    }
}

/// Split a raw API server `metadata` object into the modeled subset and the
/// remaining fields.
///
/// Every top-level key not modeled by [`KubeObjectMetadata`] is returned
/// verbatim, ready to become [`Metadata::extra_fields`]. API servers omit
/// empty `labels` and `finalizers`, so those default to empty here; any other
/// missing required field is a decoding error.
pub fn split_server_metadata(
    value: Value,
) -> MetadataResult<(KubeObjectMetadata, BTreeMap<String, Value>)> {
    let shape = KubeObjectMetadata::SHAPE;
    let Value::Object(mut rest) = value else {
        return Err(MetadataError::decoding(
            shape,
            serde::de::Error::custom("server metadata must be a JSON object"),
        ));
    };

    let mut known = Map::new();
    for field in KUBE_OBJECT_METADATA_FIELDS {
        match rest.remove(field.name) {
            Some(v) => {
                known.insert(field.name.to_string(), v);
            }
            None => match field.ty {
                FieldType::StringList => {
                    known.insert(field.name.to_string(), Value::Array(Vec::new()));
                }
                FieldType::StringMap => {
                    known.insert(field.name.to_string(), Value::Object(Map::new()));
                }
                _ => {}
            },
        }
    }

    let kube = KubeObjectMetadata::from_value(Value::Object(known))?;
    let extra: BTreeMap<String, Value> = rest.into_iter().collect();
    debug!(uid = %kube.uid, extra = extra.len(), "split server metadata");

    Ok((kube, extra))
}
