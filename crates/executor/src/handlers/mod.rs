//! Command handlers.
//!
//! One function per command, grouped by what they touch:
//! - document: the document store
//! - node: the graph selection and the node edit session

pub mod document;
pub mod node;
