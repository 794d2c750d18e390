use crate::error::{LlmError, LlmResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt::Debug;

/// Environment variable controlling tool schema cleaning
pub const CLEAN_TOOL_SCHEMAS_ENV: &str = "HOSTED_VLLM_CLEAN_TOOL_SCHEMAS";
/// Environment variable overriding the server base URL
pub const API_BASE_ENV: &str = "HOSTED_VLLM_API_BASE";
/// Environment variable holding the server API key
pub const API_KEY_ENV: &str = "HOSTED_VLLM_API_KEY";
/// Environment variable selecting the provider in [`LLMConfig::from_env`]
pub const PROVIDER_ENV: &str = "AI_PROVIDER";

/// Trait for provider-specific configuration
pub trait ProviderConfig: Send + Sync + Debug + Any {
    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Get maximum context tokens for this provider
    fn max_context_tokens(&self) -> usize;

    /// Validate provider configuration
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if configuration values are
    /// invalid (e.g., malformed URLs).
    fn validate(&self) -> LlmResult<()>;

    /// Get the base URL for API calls
    fn base_url(&self) -> &str;

    /// Get the API key if configured
    fn api_key(&self) -> Option<&str>;

    /// Get the default model name
    fn default_model(&self) -> &str;

    /// Helper for downcasting to concrete config types
    fn as_any(&self) -> &dyn Any;

    /// Clone into a new boxed provider config
    fn clone_box(&self) -> Box<dyn ProviderConfig>;
}

/// Hosted vLLM (OpenAI-compatible server) configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostedVLLMConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub default_model: String,
    pub max_context_tokens: usize,
    /// Strip `additionalProperties` and `strict` from tool parameter schemas
    pub clean_tool_schemas: bool,
}

impl Default for HostedVLLMConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "http://localhost:8000".to_string(),
            default_model: "default-model".to_string(),
            max_context_tokens: 32_768,
            clean_tool_schemas: true,
        }
    }
}

impl HostedVLLMConfig {
    /// Build a configuration, filling unset values from the environment.
    ///
    /// `clean_tool_schemas` wins when given. Otherwise
    /// `HOSTED_VLLM_CLEAN_TOOL_SCHEMAS` is consulted, and the flag defaults to
    /// `true` when that is unset or empty. `HOSTED_VLLM_API_BASE` and
    /// `HOSTED_VLLM_API_KEY` override the base URL and API key.
    pub fn new(clean_tool_schemas: Option<bool>) -> Self {
        let defaults = Self::default();
        let config = Self {
            api_key: env_non_empty(API_KEY_ENV).or(defaults.api_key),
            base_url: env_non_empty(API_BASE_ENV).unwrap_or(defaults.base_url),
            clean_tool_schemas: clean_tool_schemas
                .or_else(|| env_bool(CLEAN_TOOL_SCHEMAS_ENV))
                .unwrap_or(defaults.clean_tool_schemas),
            ..defaults
        };

        log_debug!(
            provider = "hosted_vllm",
            clean_tool_schemas = config.clean_tool_schemas,
            explicit_flag = clean_tool_schemas.is_some(),
            base_url = %config.base_url,
            has_api_key = config.api_key.is_some(),
            "Hosted vLLM configuration resolved"
        );

        config
    }
}

impl ProviderConfig for HostedVLLMConfig {
    fn provider_name(&self) -> &'static str {
        "hosted_vllm"
    }

    fn max_context_tokens(&self) -> usize {
        self.max_context_tokens
    }

    fn validate(&self) -> LlmResult<()> {
        if self.base_url.is_empty() {
            return Err(LlmError::configuration_error(
                "Hosted vLLM base URL is required",
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(LlmError::configuration_error(format!(
                "Hosted vLLM base URL must start with http:// or https://, got: {}",
                self.base_url
            )));
        }
        Ok(())
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn ProviderConfig> {
        Box::new(self.clone())
    }
}

/// Parse a boolean flag the way environment variables are usually written.
///
/// Case-insensitive and whitespace-trimmed. `false`, `0`, `no`, `n`, `f` and
/// `off` are false, any other non-empty value is true. Empty input yields
/// `None` so callers can fall back to their default.
pub fn parse_bool_flag(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    match value.to_ascii_lowercase().as_str() {
        "false" | "0" | "no" | "n" | "f" | "off" => Some(false),
        _ => Some(true),
    }
}

fn env_bool(name: &str) -> Option<bool> {
    std::env::var(name).ok().and_then(|v| parse_bool_flag(&v))
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// System-wide LLM configuration
#[derive(Debug)]
pub struct LLMConfig {
    /// The selected provider configuration
    pub provider: Box<dyn ProviderConfig>,
}

impl LLMConfig {
    /// Create configuration for a named provider
    ///
    /// Explicit `api_key`, `base_url` and `model` override whatever
    /// [`HostedVLLMConfig::new`] picked up from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::UnsupportedProvider`] if the provider name is not
    /// `hosted_vllm` or `vllm`.
    ///
    /// Returns [`LlmError::ConfigurationError`] if the resulting
    /// configuration fails validation.
    pub fn create_provider(
        provider_name: &str,
        api_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
    ) -> LlmResult<Self> {
        log_debug!(
            provider = %provider_name,
            has_api_key = api_key.is_some(),
            has_base_url = base_url.is_some(),
            has_model = model.is_some(),
            "Creating provider configuration"
        );

        let provider: Box<dyn ProviderConfig> = match provider_name.to_lowercase().as_str() {
            "hosted_vllm" | "vllm" => Self::create_hosted_vllm_provider(api_key, base_url, model),
            _ => return Err(LlmError::unsupported_provider(provider_name)),
        };

        provider.validate()?;

        Ok(Self { provider })
    }

    fn create_hosted_vllm_provider(
        api_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
    ) -> Box<dyn ProviderConfig> {
        let mut config = HostedVLLMConfig::new(None);
        if let Some(key) = api_key {
            config.api_key = Some(key);
        }
        if let Some(url) = base_url {
            config.base_url = url;
        }
        if let Some(m) = model {
            config.default_model = m;
        }
        Box::new(config)
    }

    /// Load configuration from environment variables
    ///
    /// `AI_PROVIDER` selects the provider and defaults to `hosted_vllm`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::UnsupportedProvider`] for an unrecognized
    /// `AI_PROVIDER`, or [`LlmError::ConfigurationError`] if validation fails.
    pub fn from_env() -> LlmResult<Self> {
        let provider_name =
            std::env::var(PROVIDER_ENV).unwrap_or_else(|_| "hosted_vllm".to_string());

        log_debug!(
            target_provider = %provider_name,
            "Loading LLM configuration from environment"
        );

        let config = Self::create_provider(&provider_name, None, None, None)?;

        log_debug!(
            provider = config.provider.provider_name(),
            max_context_tokens = config.provider.max_context_tokens(),
            base_url = config.provider.base_url(),
            has_api_key = config.provider.api_key().is_some(),
            "LLM configuration loaded and validated"
        );

        Ok(config)
    }
}

impl Clone for LLMConfig {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone_box(),
        }
    }
}
