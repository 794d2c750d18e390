//! LLM Provider implementations
//!
//! - **hosted_vllm**: self-hosted vLLM server speaking the OpenAI-compatible API

pub mod hosted_vllm;

pub use hosted_vllm::{HostedVLLMProvider, ParamMap};
