//! Folder models for the Data Management `contents` endpoint.

use serde::{Deserialize, Serialize};

/// Envelope of `GET .../folders/{id}/contents`.
///
/// The endpoint follows the JSON:API convention: the children live in a
/// top-level `data` array. Only the first page is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentsEnvelope {
    #[serde(default)]
    pub data: Vec<RawItem>,
}

/// One child entry (folder or file) as returned by the remote API.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RawItem {
    /// Opaque URN identifying the resource
    pub id: String,
    /// JSON:API resource type: "folders" or "items"
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: ItemAttributes,
}

/// Attributes block of a child entry.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ItemAttributes {
    #[serde(default)]
    pub name: String,
    /// Files carry their label here rather than in `name`.
    #[serde(default, rename = "displayName")]
    pub display_name: Option<String>,
}

impl RawItem {
    /// Whether this entry is a subfolder.
    pub fn is_folder(&self) -> bool {
        self.kind == "folders"
    }

    /// Best-effort display label for the entry.
    pub fn label(&self) -> &str {
        if self.attributes.name.is_empty() {
            self.attributes.display_name.as_deref().unwrap_or("")
        } else {
            &self.attributes.name
        }
    }
}

/// A discovered folder with its hierarchical path.
///
/// Read-only snapshot of remote state at fetch time; the path is the
/// slash-joined chain of ancestor names starting at the `"Root"` sentinel.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FolderEntry {
    pub urn: String,
    pub name: String,
    pub path: String,
}

impl FolderEntry {
    /// Build the entry for a child of `parent_path`.
    pub fn child_of(parent_path: &str, name: impl Into<String>, urn: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: format!("{}/{}", parent_path, name),
            name,
            urn: urn.into(),
        }
    }
}
