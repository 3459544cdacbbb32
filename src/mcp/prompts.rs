//! MCP Prompts Implementation
//!
//! Guided analysis workflows served through the prompts capability. Each
//! prompt is a message sequence steering the agent toward the right tools.

use crate::normalize;
use rmcp::model::{
    ErrorData, GetPromptRequestParam, GetPromptResult, Prompt, PromptArgument, PromptMessage,
    PromptMessageRole,
};

/// Prompt name for position analysis
pub const ANALYZE_POSITIONS: &str = "analyze_positions";

/// Lists all available prompts
pub fn list_prompts() -> Vec<Prompt> {
    vec![Prompt::new(
        ANALYZE_POSITIONS,
        Some("Analyze the trading positions and trading activity of a Hyperliquid account"),
        Some(vec![PromptArgument {
            name: "account_address".to_string(),
            title: None,
            description: Some(
                "Hyperliquid account address (e.g., 0xcd5051944f780a621ee62e39e493c489668acf4d)"
                    .to_string(),
            ),
            required: Some(true),
        }]),
    )]
}

/// Renders a prompt by name
///
/// # Errors
///
/// Returns `invalid_params` when the prompt name is unknown or a required
/// argument is missing or malformed.
pub fn get_prompt(params: &GetPromptRequestParam) -> Result<GetPromptResult, ErrorData> {
    match params.name.as_ref() {
        ANALYZE_POSITIONS => {
            let account_address = params
                .arguments
                .as_ref()
                .and_then(|args| args.get("account_address"))
                .and_then(|v| v.as_str())
                .ok_or_else(|| {
                    ErrorData::invalid_params(
                        "Missing required argument: account_address".to_string(),
                        None,
                    )
                })?;

            normalize::validate_address(account_address)
                .map_err(|e| ErrorData::invalid_params(e.to_string(), None))?;

            Ok(analyze_positions(account_address))
        }
        other => Err(ErrorData::invalid_params(
            format!("Unknown prompt: {}", other),
            None,
        )),
    }
}

/// Builds the position-analysis message sequence
pub fn analyze_positions(account_address: &str) -> GetPromptResult {
    GetPromptResult {
        description: Some(format!(
            "Position and activity analysis for {}",
            account_address
        )),
        messages: vec![
            PromptMessage::new_text(
                PromptMessageRole::User,
                format!(
                    "Please analyze the trading positions for account {}:",
                    account_address
                ),
            ),
            PromptMessage::new_text(
                PromptMessageRole::User,
                "Use the get_user_state, get_user_open_orders, get_user_trade_history, \
                 get_user_funding_history, and get_user_fees tools to fetch data.",
            ),
            PromptMessage::new_text(
                PromptMessageRole::Assistant,
                "I'll analyze the user's trading positions, open orders, trade history, \
                 funding payments, and fees to provide insights on risk and performance.",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    const ADDR: &str = "0xcd5051944f780a621ee62e39e493c489668acf4d";

    fn request(name: &str, args: Option<Map<String, serde_json::Value>>) -> GetPromptRequestParam {
        GetPromptRequestParam {
            name: name.to_string(),
            arguments: args,
        }
    }

    #[test]
    fn test_analyze_positions_listed() {
        let prompts = list_prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, ANALYZE_POSITIONS);
    }

    #[test]
    fn test_analyze_positions_messages_reference_tools() {
        let mut args = Map::new();
        args.insert("account_address".to_string(), json!(ADDR));

        let result = get_prompt(&request(ANALYZE_POSITIONS, Some(args))).unwrap();
        assert_eq!(result.messages.len(), 3);

        let rendered = serde_json::to_string(&result.messages).unwrap();
        assert!(rendered.contains(ADDR));
        assert!(rendered.contains("get_user_state"));
        assert!(rendered.contains("get_user_fees"));
    }

    #[test]
    fn test_missing_address_rejected() {
        assert!(get_prompt(&request(ANALYZE_POSITIONS, None)).is_err());
    }

    #[test]
    fn test_malformed_address_rejected() {
        let mut args = Map::new();
        args.insert("account_address".to_string(), json!("not-an-address"));
        assert!(get_prompt(&request(ANALYZE_POSITIONS, Some(args))).is_err());
    }

    #[test]
    fn test_unknown_prompt_rejected() {
        assert!(get_prompt(&request("no_such_prompt", None)).is_err());
    }
}
