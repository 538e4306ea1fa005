//! Top-level responses handed to the transport layer.

use super::Node;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// A whole converted file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResponse {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    pub schema_version: u32,

    /// DOCUMENT root node
    pub document: Node,
}

/// A set of individually requested nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodesResponse {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Requested id to converted subtree; `null` when the id was not found
    pub nodes: BTreeMap<String, Option<NodeEntry>>,
}

impl NodesResponse {
    /// Get the converted node for an id, if it was found.
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes
            .get(id)
            .and_then(|entry| entry.as_ref())
            .map(|entry| &entry.document)
    }
}

/// One entry of a [`NodesResponse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeEntry {
    pub document: Node,
}
