// SPDX-License-Identifier: AGPL-3.0-or-later
//! Richtext Types - The rich text document model
//!
//! This crate provides:
//! - Node structs for the rich text document tree (document, containers, text)
//! - The canonical BLOCKS/INLINES type-name enumerations
//! - Block/inline kind classification over injectable type sets
//! - serde (de)serialization matching the JSON wire shape

pub mod ast;
pub mod kinds;

pub use ast::{Container, DataMap, Document, Mark, Node, Text};
pub use kinds::{blocks, inlines, NodeKind, TypeSets};
