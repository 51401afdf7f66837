// SPDX-License-Identifier: AGPL-3.0-or-later
//! Rich text document tree
//!
//! The wire shape discriminates nodes with a `nodeType` string field:
//! `"document"` for the root, `"text"` for leaves, and a block or inline
//! type name for every other node. Opaque payloads travel in `data` maps.

use serde::{Deserialize, Serialize};

/// Opaque key-value payload attached to nodes and marks
pub type DataMap = serde_json::Map<String, serde_json::Value>;

/// The root document node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType", rename = "document")]
pub struct Document {
    #[serde(default)]
    pub data: DataMap,
    #[serde(default)]
    pub content: Vec<Node>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Document with the given top-level content and no data
    pub fn with_content(content: Vec<Node>) -> Self {
        Self {
            data: DataMap::new(),
            content,
        }
    }
}

/// A content node: either a text leaf or a block/inline container.
///
/// Untagged on purpose: container type names form an open string set, so the
/// two shapes are told apart by their fields (`value` vs `content`). `Text`
/// must stay the first variant so text nodes are not swallowed by the
/// container shape, which tolerates missing `content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(Text),
    Container(Container),
}

impl Node {
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// The node's `nodeType` value
    pub fn node_type(&self) -> &str {
        match self {
            Node::Text(_) => "text",
            Node::Container(c) => &c.node_type,
        }
    }
}

/// A text leaf: literal value plus formatting marks. Never has children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType", rename = "text")]
pub struct Text {
    pub value: String,
    #[serde(default)]
    pub marks: Vec<Mark>,
    #[serde(default)]
    pub data: DataMap,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            marks: Vec::new(),
            data: DataMap::new(),
        }
    }
}

/// A block or inline container node. Which of the two categories it belongs
/// to is decided by [`crate::kinds::TypeSets`], not stored on the node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    #[serde(rename = "nodeType")]
    pub node_type: String,
    #[serde(default)]
    pub data: DataMap,
    #[serde(default)]
    pub content: Vec<Node>,
}

impl Container {
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            data: DataMap::new(),
            content: Vec::new(),
        }
    }

    /// Container with children and no data
    pub fn with_content(node_type: impl Into<String>, content: Vec<Node>) -> Self {
        Self {
            node_type: node_type.into(),
            data: DataMap::new(),
            content,
        }
    }
}

/// A formatting annotation on a text node (bold, italic, ...), optionally
/// carrying its own metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub mark_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<DataMap>,
}

impl Mark {
    pub fn new(mark_type: impl Into<String>) -> Self {
        Self {
            mark_type: mark_type.into(),
            data: None,
        }
    }
}
