// SPDX-License-Identifier: AGPL-3.0-or-later
//! Slate document tree (v0.33 wire shape)
//!
//! Every layer carries an `object` discriminator: `document`, `block`,
//! `inline`, `text`, `leaf`, `mark`. Text nodes hold a list of leaves
//! instead of a raw value, and container nodes carry an `isVoid` flag.

use richtext_types::DataMap;
use serde::{Deserialize, Serialize};

/// The root Slate document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "object", rename = "document")]
pub struct Document {
    #[serde(default)]
    pub data: DataMap,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// A Slate node, discriminated by its `object` tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "object", rename_all = "lowercase")]
pub enum Node {
    Block {
        #[serde(rename = "type")]
        node_type: String,
        #[serde(rename = "isVoid")]
        is_void: bool,
        #[serde(default)]
        data: DataMap,
        #[serde(default)]
        nodes: Vec<Node>,
    },
    Inline {
        #[serde(rename = "type")]
        node_type: String,
        #[serde(rename = "isVoid")]
        is_void: bool,
        #[serde(default)]
        data: DataMap,
        #[serde(default)]
        nodes: Vec<Node>,
    },
    Text {
        #[serde(default)]
        leaves: Vec<Leaf>,
        #[serde(default)]
        data: DataMap,
    },
}

impl Node {
    /// The node's `type` name; text nodes have none
    pub fn node_type(&self) -> Option<&str> {
        match self {
            Node::Block { node_type, .. } | Node::Inline { node_type, .. } => Some(node_type),
            Node::Text { .. } => None,
        }
    }

    pub fn is_void(&self) -> bool {
        match self {
            Node::Block { is_void, .. } | Node::Inline { is_void, .. } => *is_void,
            Node::Text { .. } => false,
        }
    }

    /// Child nodes; empty for text nodes
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Block { nodes, .. } | Node::Inline { nodes, .. } => nodes,
            Node::Text { .. } => &[],
        }
    }
}

/// The minimal text-carrying unit: literal text plus resolved marks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "object", rename = "leaf")]
pub struct Leaf {
    pub text: String,
    #[serde(default)]
    pub marks: Vec<Mark>,
}

/// A resolved mark; `data` is always an empty map on converted documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "object", rename = "mark")]
pub struct Mark {
    #[serde(rename = "type")]
    pub mark_type: String,
    #[serde(default)]
    pub data: DataMap,
}

impl Mark {
    pub fn new(mark_type: impl Into<String>) -> Self {
        Self {
            mark_type: mark_type.into(),
            data: DataMap::new(),
        }
    }
}
