// Test modules for hosted-vllm crate
//
// Each source file has a corresponding test file that focuses on business
// logic verification. Provider mapping tests live next to the provider in
// providers/hosted_vllm/tests.

// Test helper utilities
pub mod helpers;
