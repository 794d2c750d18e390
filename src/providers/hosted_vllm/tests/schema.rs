// Unit Tests for Tool Schema Cleaning
//
// UNIT UNDER TEST: clean_tool_schema, clean_tools
//
// BUSINESS RESPONSIBILITY:
//   - Strips additionalProperties and strict from every schema position
//   - Keeps user-defined properties that happen to share a keyword's name
//   - Tolerates schemas that are not objects
//
// TEST COVERAGE:
//   - Nested properties, items, combinators, definitions
//   - Property names colliding with stripped keywords
//   - Removal counts and idempotence
//   - Recursion limit on pathological nesting

use crate::providers::hosted_vllm::schema::{clean_tool_schema, clean_tools, SchemaCleaner};
use crate::tests::helpers::{flat_tool, nested_tool};
use serde_json::{json, Value};

#[cfg(test)]
mod clean_tool_schema_tests {
    use super::*;

    #[test]
    fn test_removes_keywords_from_all_schema_positions() {
        // Arrange
        let mut schema = json!({
            "type": "object",
            "additionalProperties": false,
            "strict": true,
            "properties": {
                "list": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {"id": {"type": "integer"}},
                        "additionalProperties": false
                    }
                },
                "choice": {
                    "anyOf": [
                        {"type": "object", "additionalProperties": true},
                        {"type": "null"}
                    ]
                }
            },
            "$defs": {
                "Address": {"type": "object", "strict": true, "additionalProperties": false}
            }
        });

        // Act
        let removed = clean_tool_schema(&mut schema);

        // Assert
        assert_eq!(removed, 6);
        assert_eq!(
            schema,
            json!({
                "type": "object",
                "properties": {
                    "list": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {"id": {"type": "integer"}}
                        }
                    },
                    "choice": {
                        "anyOf": [
                            {"type": "object"},
                            {"type": "null"}
                        ]
                    }
                },
                "$defs": {
                    "Address": {"type": "object"}
                }
            })
        );
    }

    #[test]
    fn test_property_named_like_keyword_is_kept() {
        // Arrange
        let mut schema = json!({
            "type": "object",
            "properties": {
                "strict": {"type": "boolean", "strict": true},
                "additionalProperties": {"type": "string"}
            },
            "required": ["strict"]
        });

        // Act
        clean_tool_schema(&mut schema);

        // Assert
        assert_eq!(schema["properties"]["strict"], json!({"type": "boolean"}));
        assert_eq!(
            schema["properties"]["additionalProperties"],
            json!({"type": "string"})
        );
        assert_eq!(schema["required"], json!(["strict"]));
    }

    #[test]
    fn test_schema_valued_additional_properties_is_removed() {
        let mut schema = json!({
            "type": "object",
            "additionalProperties": {"type": "string", "strict": true}
        });

        let removed = clean_tool_schema(&mut schema);

        assert_eq!(removed, 1);
        assert_eq!(schema, json!({"type": "object"}));
    }

    #[test]
    fn test_non_object_schemas_are_untouched() {
        for mut value in [json!(true), json!(null), json!("object"), json!([1, 2])] {
            let original = value.clone();

            assert_eq!(clean_tool_schema(&mut value), 0);
            assert_eq!(value, original);
        }
    }

    #[test]
    fn test_second_pass_is_a_no_op() {
        // Arrange
        let mut schema = nested_tool()["function"]["parameters"].clone();

        // Act
        let first = clean_tool_schema(&mut schema);
        let after_first = schema.clone();
        let second = clean_tool_schema(&mut schema);

        // Assert
        assert_eq!(first, 3);
        assert_eq!(second, 0);
        assert_eq!(schema, after_first);
    }

    #[test]
    fn test_depth_limit_leaves_deepest_levels() {
        // Arrange
        let mut schema = json!({"type": "string", "additionalProperties": false});
        for _ in 0..100 {
            schema = json!({
                "type": "object",
                "additionalProperties": false,
                "properties": {"child": schema}
            });
        }

        // Act
        let removed = clean_tool_schema(&mut schema);

        // Assert
        assert_eq!(removed, 65, "Levels 0 through 64 are cleaned");
        assert!(schema.get("additionalProperties").is_none());
    }

    fn deep_branch(levels: usize) -> Value {
        let mut schema = json!({"type": "string", "additionalProperties": false});
        for _ in 0..levels {
            schema = json!({
                "type": "object",
                "additionalProperties": false,
                "properties": {"child": schema}
            });
        }
        schema
    }

    #[test]
    fn test_depth_limit_is_flagged_once_per_walk() {
        // Arrange
        let mut schema = json!({
            "type": "object",
            "properties": {
                "left": deep_branch(100),
                "right": deep_branch(100)
            }
        });
        let mut cleaner = SchemaCleaner::default();

        // Act
        cleaner.visit(&mut schema, 0);

        // Assert
        assert!(cleaner.depth_limited);
        assert_eq!(cleaner.removed, 128, "Levels 1 through 64 of both branches");
    }

    #[test]
    fn test_shallow_schema_is_not_depth_limited() {
        let mut schema = nested_tool()["function"]["parameters"].clone();
        let mut cleaner = SchemaCleaner::default();

        cleaner.visit(&mut schema, 0);

        assert!(!cleaner.depth_limited);
        assert_eq!(cleaner.removed, 3);
    }
}

#[cfg(test)]
mod clean_tools_tests {
    use super::*;

    #[test]
    fn test_counts_removals_across_tools() {
        // Arrange
        let mut with_tool_strict = flat_tool();
        with_tool_strict["function"]["strict"] = json!(true);
        let mut tools = Value::Array(vec![with_tool_strict, nested_tool()]);

        // Act
        let removed = clean_tools(&mut tools);

        // Assert
        assert_eq!(removed, 5, "Only parameter schema keywords are counted");
        assert_eq!(tools[0]["function"]["strict"], json!(true));
    }

    #[test]
    fn test_non_array_tools_are_untouched() {
        let mut tools = json!({"type": "function"});

        assert_eq!(clean_tools(&mut tools), 0);
        assert_eq!(tools, json!({"type": "function"}));
    }
}
