//! Shows how tool schemas are rewritten before they are sent to a vLLM server.
//!
//! # Running
//!
//! ```bash
//! cargo run --example clean_tool_schemas
//!
//! # Keep schemas as-is
//! HOSTED_VLLM_CLEAN_TOOL_SCHEMAS=false cargo run --example clean_tool_schemas
//! ```

use hosted_vllm::{HostedVLLMProvider, LLMConfig, ParamMap};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let config = LLMConfig::from_env()?;
    let provider = HostedVLLMProvider::from_llm_config(&config)?;

    let mut params = ParamMap::new();
    params.insert("temperature".to_string(), json!(0.2));
    params.insert(
        "tools".to_string(),
        json!([{
            "type": "function",
            "function": {
                "name": "get_weather",
                "description": "Get the current weather for a city",
                "strict": true,
                "parameters": {
                    "type": "object",
                    "properties": {
                        "city": {"type": "string"},
                        "options": {
                            "type": "object",
                            "properties": {"units": {"type": "string", "enum": ["celsius", "fahrenheit"]}},
                            "additionalProperties": false
                        }
                    },
                    "required": ["city"],
                    "additionalProperties": false,
                    "strict": true
                }
            }
        }]),
    );

    println!("endpoint: {}", provider.chat_completions_url());
    println!("clean_tool_schemas: {}", provider.clean_tool_schemas());

    let model = config.provider.default_model().to_string();
    let mapped = provider.map_openai_params(params, &ParamMap::new(), &model, false);
    println!("{}", serde_json::to_string_pretty(&mapped)?);

    Ok(())
}
