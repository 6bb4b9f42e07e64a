//! Token and cost estimation
//!
//! The endpoint's own usage block isn't consulted. Tokens are estimated as
//! one per four characters so numbers stay identical across providers that
//! share this heuristic. Length is counted in UTF-16 code units, matching the
//! host's string length.

use crate::types::{ApiStreamEvent, ChatMessage, ModelInfo};

const CHARS_PER_TOKEN: u64 = 4;

/// `ceil(len / 4)`.
pub fn estimate_tokens(text: &str) -> u64 {
    let len = text.encode_utf16().count() as u64;
    len.div_ceil(CHARS_PER_TOKEN)
}

/// Estimate for the full prompt: every message's content joined by a single space.
pub fn estimate_input_tokens(messages: &[ChatMessage]) -> u64 {
    let joined = messages
        .iter()
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    estimate_tokens(&joined)
}

/// `input * input_price + output * output_price`; a missing price counts as zero.
pub fn calculate_cost(info: Option<&ModelInfo>, input_tokens: u64, output_tokens: u64) -> f64 {
    let input_price = info.and_then(|i| i.input_price).unwrap_or(0.0);
    let output_price = info.and_then(|i| i.output_price).unwrap_or(0.0);
    input_tokens as f64 * input_price + output_tokens as f64 * output_price
}

/// Usage event for a finished call.
pub fn usage_event(
    info: Option<&ModelInfo>,
    outbound: &[ChatMessage],
    content: &str,
) -> ApiStreamEvent {
    let input_tokens = estimate_input_tokens(outbound);
    let output_tokens = estimate_tokens(content);
    ApiStreamEvent::Usage {
        input_tokens,
        output_tokens,
        total_cost: calculate_cost(info, input_tokens, output_tokens),
    }
}
