// SPDX-License-Identifier: AGPL-3.0-or-later
//! Slate -> rich text conversion
//!
//! The reverse walk. Infallible: the `object` tag on every Slate node
//! already carries the category, so no classification is needed. `isVoid`
//! is schema information and is dropped, not stored on the rich text tree.

use richtext_types::{self as rich};
use tracing::debug;

use crate::slate;

/// Convert a Slate document back into a rich text document.
///
/// A text node fans out to one rich text text node per leaf, in leaf
/// order, each carrying the Slate text node's `data`. Mark metadata does
/// not exist on converted documents, so marks come back bare.
pub fn from_slate_document(document: &slate::Document) -> rich::Document {
    debug!(children = document.nodes.len(), "converting slate document to rich text");

    rich::Document {
        data: document.data.clone(),
        content: document
            .nodes
            .iter()
            .flat_map(convert_node)
            .collect(),
    }
}

/// Convert one Slate node into zero or more rich text nodes
fn convert_node(node: &slate::Node) -> Vec<rich::Node> {
    match node {
        slate::Node::Block {
            node_type,
            data,
            nodes,
            ..
        }
        | slate::Node::Inline {
            node_type,
            data,
            nodes,
            ..
        } => vec![rich::Node::Container(rich::Container {
            node_type: node_type.clone(),
            data: data.clone(),
            content: nodes.iter().flat_map(convert_node).collect(),
        })],
        slate::Node::Text { leaves, data } => leaves
            .iter()
            .map(|leaf| {
                rich::Node::Text(rich::Text {
                    value: leaf.text.clone(),
                    marks: leaf
                        .marks
                        .iter()
                        .map(|mark| rich::Mark::new(mark.mark_type.clone()))
                        .collect(),
                    data: data.clone(),
                })
            })
            .collect(),
    }
}
