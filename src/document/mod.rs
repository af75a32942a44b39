//! The persisted flow document: the JSON shape the host editor imports,
//! exports and autosaves.
//!
//! Types here mirror the wire format one-to-one (camelCase keys, optional
//! style fields left optional). The canonical in-memory model with defaults
//! resolved lives in [`crate::flow`]; conversion between the two is lossless
//! in both directions.

use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::ConfigError;
use crate::flow::{
    EdgeAnimation, FlowMeta, FlowSettings, HandlePosition, LineStyle, MarkerKind, Position,
};

/// Variant payload of a document node, tagged by `type` with the fields
/// nested under `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum NodePayload {
    #[serde(rename = "processStep")]
    ProcessStep {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    #[serde(rename = "hint")]
    Hint {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none", rename = "isCode")]
        is_code: Option<bool>,
    },
    #[serde(rename = "image")]
    Image {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f64>,
    },
}

/// A node as persisted: reveal step at the top level, variant fields in the
/// `data` bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNodeConfig {
    pub id: String,
    pub position: Position,
    pub reveal_at_step: u32,
    #[serde(flatten)]
    pub payload: NodePayload,
}

/// An edge as persisted. Handles and style fields are optional; absent
/// fields take the editor defaults (bottom to top, dashed, closed-arrow end
/// marker, flow animation) on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdgeConfig {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<HandlePosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<HandlePosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveal_at_step: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_start: Option<MarkerKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_end: Option<MarkerKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<EdgeAnimation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<u32>,
}

/// The top-level flow document: the unit of import, export and persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowConfig {
    pub meta: FlowMeta,
    pub nodes: Vec<FlowNodeConfig>,
    pub edges: Vec<FlowEdgeConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<FlowSettings>,
}

impl FlowConfig {
    /// Parses a document from JSON and validates its structure.
    ///
    /// Loading is all-or-nothing: on error nothing has been produced, so a
    /// previously loaded graph is left untouched by the caller.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FlowConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::JsonParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a document from a file path.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Structural validation: the title must be non-empty after trimming.
    ///
    /// Deeper semantic validation is the import collaborator's job; typed
    /// deserialization already guarantees the nodes and edges arrays.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.meta.title.trim().is_empty() {
            return Err(ConfigError::MissingTitle);
        }
        Ok(())
    }

    /// Serializes the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}
