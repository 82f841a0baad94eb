//! Typed model of a raw ADIOS oil record.
//!
//! The archive ships records in a nested `{"data": {"_id": ..., "attributes":
//! {"metadata": ...}}}` shape. Only the fields the catalog itself interprets are
//! named here; every level keeps a flattened map so the rest of the record
//! passes through untouched to the oil model built downstream.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One raw oil record as stored in the packaged archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OilRecord {
    pub data: OilData,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `data` envelope of a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OilData {
    /// Globally unique identifier, stable across releases. The merge and
    /// lookup key.
    #[serde(rename = "_id")]
    pub id: String,

    pub attributes: OilAttributes,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Record attributes: the interpreted metadata block plus everything else
/// verbatim (sub-samples, physical properties, distillation data, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OilAttributes {
    pub metadata: OilMetadata,

    /// Duplicates the record id in ADIOS exports; supplementary files carry it
    /// as their only id field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oil_id: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The metadata block the catalog reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OilMetadata {
    /// Human-readable display name. Not unique before normalization.
    pub name: String,

    /// Categorical origin tag, e.g. a country name. Compared
    /// case-insensitively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Provenance reference; only the year is interpreted, for display-name
/// normalization of Norwegian records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
