//! Test helper utilities shared across unit test modules
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use crate::config::{
    HostedVLLMConfig, API_BASE_ENV, API_KEY_ENV, CLEAN_TOOL_SCHEMAS_ENV, PROVIDER_ENV,
};
use crate::providers::{HostedVLLMProvider, ParamMap};
use serde_json::{json, Value};

/// Create a hosted vLLM config without touching the environment
pub fn create_test_config(clean_tool_schemas: bool) -> HostedVLLMConfig {
    HostedVLLMConfig {
        api_key: Some("test-vllm-key".to_string()),
        base_url: "http://vllm.test:8000".to_string(),
        default_model: "test-model".to_string(),
        max_context_tokens: 8_192,
        clean_tool_schemas,
    }
}

/// Create a provider from [`create_test_config`]
///
/// # Panics
///
/// Panics if the test config fails validation (test failure is appropriate).
pub fn create_test_provider(clean_tool_schemas: bool) -> HostedVLLMProvider {
    HostedVLLMProvider::new(create_test_config(clean_tool_schemas))
        .expect("Test config should be valid")
}

/// Remove every environment variable this crate reads
pub fn clear_vllm_env() {
    std::env::remove_var(CLEAN_TOOL_SCHEMAS_ENV);
    std::env::remove_var(API_BASE_ENV);
    std::env::remove_var(API_KEY_ENV);
    std::env::remove_var(PROVIDER_ENV);
}

/// A single function tool whose parameters carry both stripped keywords
pub fn flat_tool() -> Value {
    json!({
        "type": "function",
        "function": {
            "name": "test_func",
            "parameters": {
                "type": "object",
                "properties": {"arg": {"type": "string"}},
                "additionalProperties": false,
                "strict": true
            }
        }
    })
}

/// A function tool with an object property that has its own `additionalProperties`
pub fn nested_tool() -> Value {
    json!({
        "type": "function",
        "function": {
            "name": "test_func",
            "parameters": {
                "type": "object",
                "properties": {
                    "nested": {
                        "type": "object",
                        "properties": {"inner": {"type": "string"}},
                        "additionalProperties": false
                    }
                },
                "additionalProperties": false,
                "strict": true
            }
        }
    })
}

/// Wrap a list of tools in a parameter bag
pub fn params_with_tools(tools: Vec<Value>) -> ParamMap {
    let mut params = ParamMap::new();
    params.insert("tools".to_string(), Value::Array(tools));
    params
}
