//! # hosted-vllm
//!
//! OpenAI-compatible parameter mapping for hosted vLLM servers.
//!
//! ## Key Features
//!
//! - **Tool Schema Cleaning**: strips `additionalProperties` and `strict` from
//!   tool parameter schemas, which vLLM rejects
//! - **Pass-through Mapping**: every other OpenAI parameter reaches the server unchanged
//! - **Environment Configuration**: `HOSTED_VLLM_CLEAN_TOOL_SCHEMAS`,
//!   `HOSTED_VLLM_API_BASE` and `HOSTED_VLLM_API_KEY`
//!
//! ## Example
//!
//! ```rust
//! use hosted_vllm::{HostedVLLMConfig, HostedVLLMProvider, ParamMap};
//! use serde_json::json;
//!
//! # fn example() -> anyhow::Result<()> {
//! let provider = HostedVLLMProvider::new(HostedVLLMConfig::new(Some(true)))?;
//!
//! let mut params = ParamMap::new();
//! params.insert(
//!     "tools".to_string(),
//!     json!([{
//!         "type": "function",
//!         "function": {
//!             "name": "lookup",
//!             "parameters": {"type": "object", "properties": {}, "additionalProperties": false}
//!         }
//!     }]),
//! );
//!
//! let mapped = provider.map_openai_params(params, &ParamMap::new(), "my-model", false);
//! assert!(mapped["tools"][0]["function"]["parameters"]
//!     .get("additionalProperties")
//!     .is_none());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod config;
pub mod error;
pub mod providers;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{parse_bool_flag, HostedVLLMConfig, LLMConfig, ProviderConfig};
pub use error::{LlmError, LlmResult};
pub use providers::{HostedVLLMProvider, ParamMap};
