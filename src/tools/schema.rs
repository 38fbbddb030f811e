//! JSON schema helpers for tool parameters
//!
//! Declarations are sent to the model as OpenAPI-style schema objects.

use serde_json::{json, Value};

/// Start a schema for a params object
pub fn object_schema() -> SchemaBuilder {
    SchemaBuilder::new("object")
}

/// Integer property with an inclusive lower bound
pub fn integer_at_least(description: &str, minimum: i64) -> Value {
    json!({
        "type": "integer",
        "description": description,
        "minimum": minimum
    })
}

/// Collects properties for an object schema
pub struct SchemaBuilder {
    schema_type: &'static str,
    properties: serde_json::Map<String, Value>,
    required: Vec<String>,
}

impl SchemaBuilder {
    pub fn new(schema_type: &'static str) -> Self {
        Self {
            schema_type,
            properties: serde_json::Map::new(),
            required: Vec::new(),
        }
    }

    /// Add a property, marking it required when `required` is set
    pub fn property(mut self, name: &str, schema: Value, required: bool) -> Self {
        self.properties.insert(name.to_string(), schema);
        if required {
            self.required.push(name.to_string());
        }
        self
    }

    /// Finish the schema
    pub fn build(self) -> Value {
        json!({
            "type": self.schema_type,
            "properties": self.properties,
            "required": self.required
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_object_schema() {
        let schema = object_schema()
            .property("sides", integer_at_least("Number of sides", 1), true)
            .property("count", integer_at_least("How many dice", 1), false)
            .build();

        assert_eq!(
            schema,
            json!({
                "type": "object",
                "properties": {
                    "sides": { "type": "integer", "description": "Number of sides", "minimum": 1 },
                    "count": { "type": "integer", "description": "How many dice", "minimum": 1 }
                },
                "required": ["sides"]
            })
        );
    }
}
