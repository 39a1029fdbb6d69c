//! Structured output nodes.
//!
//! Components serialize themselves through the [`OutputNode`] trait so that
//! the accounting code does not depend on any particular document library.
//! [`XmlElement`] and [`JsonNode`] are the two snapshot formats; both are
//! filled through the same `save` calls.

mod json;
mod node;
mod xml;

pub use json::JsonNode;
pub use node::{AttributeValue, OutputNode};
pub use xml::XmlElement;
