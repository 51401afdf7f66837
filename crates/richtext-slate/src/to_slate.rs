// SPDX-License-Identifier: AGPL-3.0-or-later
//! Rich text -> Slate conversion
//!
//! A depth-first, side-effect-free walk over the source tree. Every node
//! converts to a *list* of Slate nodes which the parent flattens in order;
//! today each rule yields exactly one node, but the list contract leaves
//! room for splitting rules without reshaping the recursion.

use richtext_types::{self as rich, NodeKind};
use tracing::debug;

use crate::schema::{Schema, SchemaJson};
use crate::slate;
use crate::{AdapterError, Result};

/// Convert a rich text document into a Slate document.
///
/// The schema is resolved once and consulted read-only throughout the
/// traversal. The input is never mutated; on error no partial output is
/// returned.
pub fn to_slate_document(
    document: &rich::Document,
    schema: Option<SchemaJson>,
) -> Result<slate::Document> {
    let schema = Schema::from_json(schema);
    debug!(children = document.content.len(), "converting rich text document to slate");

    let mut nodes = Vec::new();
    for node in &document.content {
        nodes.extend(convert_node(node, &schema)?);
    }

    Ok(slate::Document {
        data: document.data.clone(),
        nodes,
    })
}

/// Convert one source node into zero or more Slate nodes
fn convert_node(node: &rich::Node, schema: &Schema) -> Result<Vec<slate::Node>> {
    match node {
        rich::Node::Text(text) => Ok(vec![convert_text(text)]),
        rich::Node::Container(container) => {
            let mut child_nodes = Vec::new();
            for child in &container.content {
                child_nodes.extend(convert_node(child, schema)?);
            }

            let kind = schema
                .sets()
                .classify(&container.node_type)
                .ok_or_else(|| AdapterError::UnknownNodeType(container.node_type.clone()))?;

            let slate_node = match kind {
                NodeKind::Block => slate::Node::Block {
                    node_type: container.node_type.clone(),
                    is_void: schema.is_void(container),
                    data: container.data.clone(),
                    nodes: child_nodes,
                },
                NodeKind::Inline => slate::Node::Inline {
                    node_type: container.node_type.clone(),
                    is_void: schema.is_void(container),
                    data: container.data.clone(),
                    nodes: child_nodes,
                },
            };

            Ok(vec![slate_node])
        }
    }
}

/// Terminal case: a text leaf becomes a Slate text node holding one leaf.
/// Mark metadata is discarded; only the mark type survives.
fn convert_text(text: &rich::Text) -> slate::Node {
    slate::Node::Text {
        leaves: vec![slate::Leaf {
            text: text.value.clone(),
            marks: text
                .marks
                .iter()
                .map(|mark| slate::Mark::new(mark.mark_type.clone()))
                .collect(),
        }],
        data: text.data.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use richtext_types::{blocks, inlines, Container, DataMap, Mark, Node, Text};
    use serde_json::json;

    fn data(value: serde_json::Value) -> DataMap {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("data fixture must be an object"),
        }
    }

    fn hello_world_document() -> rich::Document {
        rich::Document::with_content(vec![Node::Container(Container::with_content(
            blocks::PARAGRAPH,
            vec![Node::Text(Text {
                value: "hello world".into(),
                marks: vec![Mark::new("bold"), Mark::new("italic")],
                data: DataMap::new(),
            })],
        ))])
    }

    #[test]
    fn test_hello_world_end_to_end() {
        let slate = to_slate_document(&hello_world_document(), None).unwrap();

        assert_eq!(
            serde_json::to_value(&slate).unwrap(),
            json!({
                "object": "document",
                "data": {},
                "nodes": [{
                    "object": "block",
                    "type": "paragraph",
                    "isVoid": false,
                    "data": {},
                    "nodes": [{
                        "object": "text",
                        "leaves": [{
                            "object": "leaf",
                            "text": "hello world",
                            "marks": [
                                { "object": "mark", "type": "bold", "data": {} },
                                { "object": "mark", "type": "italic", "data": {} },
                            ],
                        }],
                        "data": {},
                    }],
                }],
            })
        );
    }

    #[test]
    fn test_embedded_entry_with_void_schema() {
        let entry = json!({ "sys": { "id": "entry-1", "type": "Entry" } });
        let mut block = Container::new(blocks::EMBEDDED_ENTRY);
        block.data = data(json!({ "target": entry.clone() }));
        let document = rich::Document::with_content(vec![Node::Container(block)]);

        let schema: SchemaJson = serde_json::from_value(json!({
            "blocks": { "embedded-entry": { "isVoid": true } },
        }))
        .unwrap();

        let slate = to_slate_document(&document, Some(schema)).unwrap();
        match &slate.nodes[0] {
            slate::Node::Block {
                node_type,
                is_void,
                data,
                nodes,
            } => {
                assert_eq!(node_type.as_str(), blocks::EMBEDDED_ENTRY);
                assert!(*is_void);
                assert!(nodes.is_empty());
                assert_eq!(data.get("target"), Some(&entry));
            }
            other => panic!("expected a block, got {other:?}"),
        }
    }

    #[test]
    fn test_void_defaults_to_false_for_unconfigured_types() {
        let schema: SchemaJson = serde_json::from_value(json!({
            "blocks": { "embedded-entry": { "isVoid": true } },
        }))
        .unwrap();
        let slate = to_slate_document(&hello_world_document(), Some(schema)).unwrap();

        assert!(!slate.nodes[0].is_void());
    }

    #[test]
    fn test_mark_data_is_stripped() {
        let document = rich::Document::with_content(vec![Node::Container(
            Container::with_content(
                blocks::PARAGRAPH,
                vec![Node::Text(Text {
                    value: "x".into(),
                    marks: vec![
                        Mark {
                            mark_type: "bold".into(),
                            data: Some(data(json!({ "x": 1 }))),
                        },
                        Mark::new("italic"),
                    ],
                    data: DataMap::new(),
                })],
            ),
        )]);

        let slate = to_slate_document(&document, None).unwrap();
        match &slate.nodes[0].children()[0] {
            slate::Node::Text { leaves, .. } => {
                assert_eq!(
                    leaves[0].marks,
                    vec![slate::Mark::new("bold"), slate::Mark::new("italic")]
                );
                assert!(leaves[0].marks.iter().all(|m| m.data.is_empty()));
            }
            other => panic!("expected a text node, got {other:?}"),
        }
    }

    #[test]
    fn test_inline_nodes_keep_their_category() {
        let document = rich::Document::with_content(vec![Node::Container(
            Container::with_content(
                blocks::PARAGRAPH,
                vec![Node::Container(Container::with_content(
                    inlines::HYPERLINK,
                    vec![Node::Text(Text::new("link text"))],
                ))],
            ),
        )]);

        let slate = to_slate_document(&document, None).unwrap();
        match &slate.nodes[0].children()[0] {
            slate::Node::Inline { node_type, .. } => {
                assert_eq!(node_type.as_str(), inlines::HYPERLINK)
            }
            other => panic!("expected an inline, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_node_type_is_rejected() {
        let document = rich::Document::with_content(vec![
            Node::Container(Container::new(blocks::PARAGRAPH)),
            Node::Container(Container::new("not-a-real-type")),
        ]);

        let err = to_slate_document(&document, None).unwrap_err();
        assert_eq!(err, AdapterError::UnknownNodeType("not-a-real-type".into()));
        assert_eq!(
            err.to_string(),
            "unexpected rich text nodeType 'not-a-real-type'"
        );
    }

    #[test]
    fn test_unknown_type_deep_in_the_tree_is_rejected() {
        let document = rich::Document::with_content(vec![Node::Container(
            Container::with_content(
                blocks::QUOTE,
                vec![Node::Container(Container::with_content(
                    blocks::PARAGRAPH,
                    vec![Node::Container(Container::new("mystery"))],
                ))],
            ),
        )]);

        let err = to_slate_document(&document, None).unwrap_err();
        assert_eq!(err, AdapterError::UnknownNodeType("mystery".into()));
    }

    #[test]
    fn test_document_data_is_copied() {
        let mut document = hello_world_document();
        document.data = data(json!({ "revision": 3 }));

        let slate = to_slate_document(&document, None).unwrap();
        assert_eq!(slate.data, data(json!({ "revision": 3 })));
    }

    #[test]
    fn test_top_level_order_is_preserved() {
        let document = rich::Document::with_content(vec![
            Node::Container(Container::new(blocks::HEADING_1)),
            Node::Container(Container::new(blocks::PARAGRAPH)),
            Node::Container(Container::new(blocks::HR)),
        ]);

        let slate = to_slate_document(&document, None).unwrap();
        let types: Vec<_> = slate.nodes.iter().filter_map(|n| n.node_type()).collect();
        assert_eq!(types, vec![blocks::HEADING_1, blocks::PARAGRAPH, blocks::HR]);
    }
}
