//! Field tables for the metadata structures.
//!
//! Each table lists the wire name, type and optionality of every field, in
//! wire order. The serde derivations in [`crate::models`] are tested against
//! these tables, and the CLI renders them as a JSON Schema document, so a
//! field added to one side but not the other fails the build's tests.

use serde_json::{Map, Value, json};
use std::{fmt, str::FromStr};

/// Wire type of a single metadata field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    String,
    /// RFC 3339 date-time string.
    Timestamp,
    /// Ordered list of strings.
    StringList,
    /// Object with string values.
    StringMap,
    /// Object with arbitrary JSON values.
    AnyMap,
}

impl FieldType {
    fn json_schema(self) -> Value {
        match self {
            FieldType::String => json!({ "type": "string" }),
            FieldType::Timestamp => json!({ "type": "string", "format": "date-time" }),
            FieldType::StringList => json!({ "type": "array", "items": { "type": "string" } }),
            FieldType::StringMap => {
                json!({ "type": "object", "additionalProperties": { "type": "string" } })
            }
            FieldType::AnyMap => json!({ "type": "object", "additionalProperties": true }),
        }
    }
}

/// One row of a field table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// camelCase name used on the wire.
    pub name: &'static str,
    pub ty: FieldType,
    /// Optional fields are omitted from the payload when absent.
    pub required: bool,
}

const fn field(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        ty,
        required: true,
    }
}

const fn optional(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        ty,
        required: false,
    }
}

pub const METADATA_FIELDS: &[FieldSpec] = &[
    field("createdBy", FieldType::String),
    field("creationTimestamp", FieldType::Timestamp),
    optional("deletionTimestamp", FieldType::Timestamp),
    field("extraFields", FieldType::AnyMap),
    field("finalizers", FieldType::StringList),
    field("labels", FieldType::StringMap),
    field("resourceVersion", FieldType::String),
    field("uid", FieldType::String),
    field("updateTimestamp", FieldType::Timestamp),
    field("updatedBy", FieldType::String),
];

pub const KUBE_OBJECT_METADATA_FIELDS: &[FieldSpec] = &[
    field("creationTimestamp", FieldType::Timestamp),
    optional("deletionTimestamp", FieldType::Timestamp),
    field("finalizers", FieldType::StringList),
    field("labels", FieldType::StringMap),
    field("resourceVersion", FieldType::String),
    field("uid", FieldType::String),
];

/// Identifies which metadata structure a payload is expected to hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Metadata,
    KubeObjectMetadata,
}

impl Shape {
    pub const ALL: [Shape; 2] = [Shape::Metadata, Shape::KubeObjectMetadata];

    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Shape::Metadata => METADATA_FIELDS,
            Shape::KubeObjectMetadata => KUBE_OBJECT_METADATA_FIELDS,
        }
    }

    /// Look up a field by its wire name.
    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }

    pub fn required_fields(self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields().iter().filter(|f| f.required)
    }

    /// Name accepted on the command line and in `KINDMETA_SHAPE`.
    pub fn cli_name(self) -> &'static str {
        match self {
            Shape::Metadata => "metadata",
            Shape::KubeObjectMetadata => "kube-object",
        }
    }

    /// Describe the shape as a JSON Schema object.
    pub fn to_json_schema(self) -> Value {
        let properties: Map<String, Value> = self
            .fields()
            .iter()
            .map(|f| (f.name.to_string(), f.ty.json_schema()))
            .collect();
        let required: Vec<&str> = self.required_fields().map(|f| f.name).collect();

        json!({
            "title": self.to_string(),
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Metadata => f.write_str("Metadata"),
            Shape::KubeObjectMetadata => f.write_str("KubeObjectMetadata"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown shape `{0}` (expected `metadata` or `kube-object`)")]
pub struct UnknownShape(String);

impl FromStr for Shape {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metadata" => Ok(Shape::Metadata),
            "kube-object" | "kubeobject" | "kubeobjectmetadata" => Ok(Shape::KubeObjectMetadata),
            _ => Err(UnknownShape(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kube_object_fields_are_a_subset_of_metadata() {
        for f in KUBE_OBJECT_METADATA_FIELDS {
            assert_eq!(Shape::Metadata.field(f.name), Some(f), "{}", f.name);
        }
    }

    #[test]
    fn deletion_timestamp_is_the_only_optional_field() {
        for shape in Shape::ALL {
            let optional: Vec<_> = shape
                .fields()
                .iter()
                .filter(|f| !f.required)
                .map(|f| f.name)
                .collect();
            assert_eq!(optional, ["deletionTimestamp"]);
        }
    }

    #[test]
    fn json_schema_lists_required_fields() {
        let schema = Shape::KubeObjectMetadata.to_json_schema();
        assert_eq!(schema["title"], "KubeObjectMetadata");
        assert_eq!(
            schema["required"],
            json!(["creationTimestamp", "finalizers", "labels", "resourceVersion", "uid"])
        );
        assert_eq!(
            schema["properties"]["deletionTimestamp"]["format"],
            "date-time"
        );
    }

    #[test]
    fn parses_cli_names() {
        for shape in Shape::ALL {
            assert_eq!(shape.cli_name().parse::<Shape>().unwrap(), shape);
        }
        assert_eq!(" Metadata ".parse::<Shape>().unwrap(), Shape::Metadata);
        assert!("pod".parse::<Shape>().is_err());
    }
}
