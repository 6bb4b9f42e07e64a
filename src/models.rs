//! Cerebras model identifiers
//!
//! Model ids accepted by the Cerebras chat-completion endpoint.

/// Llama 3.3 70B
pub const LLAMA_3_3_70B: &str = "llama-3.3-70b";
/// Llama 3.1 8B
pub const LLAMA_3_1_8B: &str = "llama3.1-8b";
/// Llama 3.1 70B
pub const LLAMA_3_1_70B: &str = "llama3.1-70b";

/// Model used when the caller doesn't pick one.
pub const DEFAULT_MODEL: &str = LLAMA_3_3_70B;

