//! Tool schema cleaning for vLLM
//!
//! vLLM's guided decoding rejects tool parameter schemas carrying
//! `additionalProperties` or `strict`. These helpers strip both keywords from
//! every schema position in a tool definition while leaving property *names*
//! alone, so a user field called `strict` survives.

use crate::logging::log_warn;
use serde_json::{Map, Value};

/// JSON Schema keywords removed when cleaning is enabled
pub const STRIPPED_KEYWORDS: [&str; 2] = ["additionalProperties", "strict"];

const MAX_RECURSION_DEPTH: usize = 64;

/// Keywords whose value maps names to sub-schemas
const SCHEMA_MAP_KEYWORDS: [&str; 4] = ["properties", "patternProperties", "$defs", "definitions"];

/// Keywords whose value is a list of sub-schemas
const SCHEMA_LIST_KEYWORDS: [&str; 4] = ["prefixItems", "anyOf", "oneOf", "allOf"];

/// Clean every tool in an OpenAI `tools` array.
///
/// Only `function.parameters` is rewritten; the rest of each tool is kept
/// as sent. Entries that are not objects, or lack a `function` object, are
/// left untouched. Returns the number of keywords removed.
pub fn clean_tools(tools: &mut Value) -> usize {
    let Value::Array(tools) = tools else {
        log_warn!(
            provider = "hosted_vllm",
            "Expected `tools` to be an array, leaving it unchanged"
        );
        return 0;
    };

    tools.iter_mut().map(clean_tool).sum()
}

fn clean_tool(tool: &mut Value) -> usize {
    match tool.pointer_mut("/function/parameters") {
        Some(parameters) => clean_tool_schema(parameters),
        None => 0,
    }
}

/// Recursively strip [`STRIPPED_KEYWORDS`] from a JSON schema.
///
/// Returns the number of keywords removed; a second pass over the same
/// schema always returns 0.
pub fn clean_tool_schema(schema: &mut Value) -> usize {
    let mut cleaner = SchemaCleaner::default();
    cleaner.visit(schema, 0);

    if cleaner.depth_limited {
        log_warn!(
            limit = MAX_RECURSION_DEPTH,
            removed_keywords = cleaner.removed,
            "Tool schema nesting exceeds limit, leaving deeper levels unchanged"
        );
    }

    cleaner.removed
}

/// Walk state for a single [`clean_tool_schema`] call
#[derive(Debug, Default)]
pub(super) struct SchemaCleaner {
    pub(super) removed: usize,
    /// Set when some branch went past `MAX_RECURSION_DEPTH`
    pub(super) depth_limited: bool,
}

impl SchemaCleaner {
    pub(super) fn visit(&mut self, value: &mut Value, depth: usize) {
        if depth > MAX_RECURSION_DEPTH {
            self.depth_limited = true;
            return;
        }

        let Value::Object(map) = value else {
            return;
        };

        self.removed += strip_keywords(map);

        for keyword in SCHEMA_MAP_KEYWORDS {
            if let Some(Value::Object(children)) = map.get_mut(keyword) {
                for child in children.values_mut() {
                    self.visit(child, depth + 1);
                }
            }
        }

        for keyword in SCHEMA_LIST_KEYWORDS {
            if let Some(Value::Array(branches)) = map.get_mut(keyword) {
                for branch in branches.iter_mut() {
                    self.visit(branch, depth + 1);
                }
            }
        }

        // `items` is a single schema, or a tuple of schemas in older drafts
        match map.get_mut("items") {
            Some(Value::Array(items)) => {
                for item in items.iter_mut() {
                    self.visit(item, depth + 1);
                }
            }
            Some(items) => self.visit(items, depth + 1),
            None => {}
        }

        if let Some(negated) = map.get_mut("not") {
            self.visit(negated, depth + 1);
        }
    }
}

fn strip_keywords(map: &mut Map<String, Value>) -> usize {
    let mut removed = 0;
    for keyword in STRIPPED_KEYWORDS {
        if map.remove(keyword).is_some() {
            removed += 1;
        }
    }
    removed
}
