//! Hosted vLLM provider implementation
//!
//! vLLM serves an OpenAI-compatible API, so request parameters pass through
//! untouched apart from tool schemas, which are cleaned of keywords the
//! server rejects unless [`HostedVLLMConfig::clean_tool_schemas`] is off.

pub mod schema;

#[cfg(test)]
mod tests;

use crate::config::{HostedVLLMConfig, LLMConfig, ProviderConfig};
use crate::error::{LlmError, LlmResult};
use crate::logging::log_debug;
use serde_json::{Map, Value};

pub use schema::{clean_tool_schema, clean_tools, STRIPPED_KEYWORDS};

/// OpenAI-style parameter bag keyed by parameter name
pub type ParamMap = Map<String, Value>;

/// Placeholder bearer token; vLLM servers run without auth unless `--api-key` is set
pub const PLACEHOLDER_API_KEY: &str = "fake-api-key";

const SUPPORTED_OPENAI_PARAMS: &[&str] = &[
    "frequency_penalty",
    "logit_bias",
    "logprobs",
    "top_logprobs",
    "max_tokens",
    "max_completion_tokens",
    "n",
    "presence_penalty",
    "seed",
    "stop",
    "stream",
    "stream_options",
    "temperature",
    "top_p",
    "tools",
    "tool_choice",
    "function_call",
    "functions",
    "parallel_tool_calls",
    "response_format",
    "user",
    "reasoning_effort",
    "thinking",
];

/// Hosted vLLM provider
///
/// Maps OpenAI chat-completion parameters onto a vLLM server.
#[derive(Debug, Clone)]
pub struct HostedVLLMProvider {
    config: HostedVLLMConfig,
}

impl HostedVLLMProvider {
    /// Create a new hosted vLLM provider instance
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if the base URL is missing
    /// or malformed.
    pub fn new(config: HostedVLLMConfig) -> LlmResult<Self> {
        config.validate()?;

        log_debug!(
            provider = "hosted_vllm",
            base_url = %config.base_url,
            default_model = %config.default_model,
            clean_tool_schemas = config.clean_tool_schemas,
            "Hosted vLLM provider initialized"
        );

        Ok(Self { config })
    }

    /// Create a provider from a system-wide [`LLMConfig`]
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if the config does not hold a
    /// [`HostedVLLMConfig`] or fails validation.
    pub fn from_llm_config(config: &LLMConfig) -> LlmResult<Self> {
        let vllm_config = config
            .provider
            .as_any()
            .downcast_ref::<HostedVLLMConfig>()
            .ok_or_else(|| {
                LlmError::configuration_error(format!(
                    "Expected hosted_vllm configuration, got: {}",
                    config.provider.provider_name()
                ))
            })?;

        Self::new(vllm_config.clone())
    }

    /// Configuration this provider was built from
    pub fn config(&self) -> &HostedVLLMConfig {
        &self.config
    }

    /// Whether tool schemas are cleaned during parameter mapping
    pub fn clean_tool_schemas(&self) -> bool {
        self.config.clean_tool_schemas
    }

    /// OpenAI parameter names this backend accepts
    pub fn supported_openai_params(&self, _model: &str) -> Vec<&'static str> {
        SUPPORTED_OPENAI_PARAMS.to_vec()
    }

    /// Bearer token to send, falling back to [`PLACEHOLDER_API_KEY`]
    pub fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or(PLACEHOLDER_API_KEY)
    }

    /// Full chat completions endpoint for the configured server
    pub fn chat_completions_url(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        if base.ends_with("/v1") {
            format!("{base}/chat/completions")
        } else {
            format!("{base}/v1/chat/completions")
        }
    }

    /// Map OpenAI chat-completion parameters for a vLLM request.
    ///
    /// Every key passes through unchanged except `tools`, whose function
    /// parameter schemas lose `additionalProperties` and `strict` at every
    /// nesting level when cleaning is enabled. `optional_params`, `model` and
    /// `stream` do not influence the result.
    pub fn map_openai_params(
        &self,
        mut non_default_params: ParamMap,
        _optional_params: &ParamMap,
        model: &str,
        stream: bool,
    ) -> ParamMap {
        if !self.config.clean_tool_schemas {
            return non_default_params;
        }

        if let Some(tools) = non_default_params.get_mut("tools") {
            let removed = clean_tools(tools);
            log_debug!(
                provider = "hosted_vllm",
                model = %model,
                stream = stream,
                removed_keywords = removed,
                "Cleaned tool schemas"
            );
        }

        non_default_params
    }
}
