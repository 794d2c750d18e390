//! Error types for hosted vLLM configuration.
//!
//! Parameter mapping itself never fails; errors only come from building and
//! validating provider configuration.
//!
//! # Error Handling Example
//!
//! ```rust
//! use hosted_vllm::{LLMConfig, LlmError};
//! use hosted_vllm::error::ErrorCategory;
//!
//! let err = LLMConfig::create_provider("not-a-provider", None, None, None).unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::Client);
//! assert!(matches!(err, LlmError::UnsupportedProvider { .. }));
//! ```

use crate::logging::log_error;
use thiserror::Error;

/// High-level categorization of errors for routing and handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Client errors (invalid input, configuration).
    ///
    /// The caller made a mistake that they can fix (unknown provider name,
    /// malformed base URL, etc.).
    Client,
}

/// Convenient result type for configuration operations.
pub type LlmResult<T> = std::result::Result<T, LlmError>;

/// Errors raised while building a hosted vLLM provider.
///
/// Both variants are [`ErrorCategory::Client`] and are logged at ERROR level
/// when built through the constructor helpers.
#[derive(Error, Debug)]
pub enum LlmError {
    /// The specified provider is not supported.
    ///
    /// Supported providers: "hosted_vllm" (alias "vllm")
    #[error("Provider not supported: {provider}")]
    UnsupportedProvider {
        /// The provider name that was requested.
        provider: String,
    },

    /// Provider configuration is invalid or incomplete.
    #[error("Provider configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },
}

impl LlmError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedProvider { .. } => ErrorCategory::Client,
            Self::ConfigurationError { .. } => ErrorCategory::Client,
        }
    }

    /// Convert to a message safe to show to end users.
    pub fn user_message(&self) -> String {
        match self {
            Self::UnsupportedProvider { .. } => {
                "The requested AI provider is not supported".to_string()
            }
            Self::ConfigurationError { .. } => {
                "AI service configuration issue. Please check your settings".to_string()
            }
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    /// Create an unsupported provider error (logs at ERROR level).
    pub fn unsupported_provider(provider: impl Into<String>) -> Self {
        let provider = provider.into();
        log_error!(
            provider = %provider,
            error_type = "unsupported_provider",
            "Unsupported LLM provider requested"
        );
        Self::UnsupportedProvider { provider }
    }

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "LLM configuration validation failed"
        );
        Self::ConfigurationError { message }
    }
}
