//! JSON element tree.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use super::node::{AttributeValue, OutputNode};
use crate::config::NEVER_UPDATED;

/// A JSON rendition of an element: `{"element": .., "attributes": {..}, "children": [..]}`.
///
/// Attribute values keep their types: integers as numbers, booleans as
/// booleans, timestamps as Unix epoch seconds and an absent timestamp as `-1`.
/// `children` is omitted for leaf elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonNode {
    element: String,
    attributes: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<JsonNode>,
}

impl JsonNode {
    pub fn new(element: &str) -> Self {
        Self {
            element: element.to_string(),
            attributes: Map::new(),
            children: Vec::new(),
        }
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn children(&self) -> &[JsonNode] {
        &self.children
    }

    /// Renders the tree as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl OutputNode for JsonNode {
    fn set_attribute(&mut self, name: &str, value: impl Into<AttributeValue>) {
        let value = match value.into() {
            AttributeValue::Integer(v) => Value::from(v),
            AttributeValue::Unsigned(v) => Value::from(v),
            AttributeValue::Text(v) => Value::String(v),
        };
        self.attributes.insert(name.to_string(), value);
    }

    fn set_bool_attribute(&mut self, name: &str, value: bool) {
        self.attributes.insert(name.to_string(), Value::Bool(value));
    }

    fn set_time_attribute(&mut self, name: &str, value: Option<DateTime<Utc>>) {
        let encoded = value.map_or(NEVER_UPDATED, |t| t.timestamp());
        self.attributes.insert(name.to_string(), Value::from(encoded));
    }

    fn append_child(&mut self, name: &str) -> &mut Self {
        self.children.push(JsonNode::new(name));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }
}
