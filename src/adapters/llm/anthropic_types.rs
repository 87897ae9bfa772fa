/// Request and response types for the Anthropic Messages API
use serde::{Deserialize, Serialize};

/// Message request to send to the Messages API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRequest {
    /// Model identifier (e.g., "claude-3-5-sonnet-20241022")
    pub model: String,

    /// Array of messages in the conversation
    pub messages: Vec<Message>,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// System prompt (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Temperature for sampling (0.0-1.0, optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Tool definitions (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,

    /// How the model must use the tools (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
}

/// A single message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender
    pub role: String,

    /// Plain text content
    pub content: String,
}

/// Tool definition for function calling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    /// Tool name
    pub name: String,

    /// Tool description
    pub description: String,

    /// JSON schema for tool input
    pub input_schema: serde_json::Value,
}

/// Tool selection policy; requests always force a single named tool
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolChoice {
    /// Model must call this tool
    Tool { name: String },
}

/// Content block in a response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "tool_use")]
    ToolUse {
        id: String,
        name: String,
        input: serde_json::Value,
    },
    #[serde(other)]
    Unsupported,
}

/// Response from the Messages API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Unique message ID
    pub id: String,

    /// Array of content blocks in the response
    pub content: Vec<ContentBlock>,

    /// Model that generated the response
    pub model: String,

    /// Reason for stopping generation
    #[serde(default)]
    pub stop_reason: Option<StopReason>,

    /// Token usage statistics
    pub usage: Usage,
}

/// Reason why message generation stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of turn
    EndTurn,
    /// Maximum tokens reached
    MaxTokens,
    /// Stop sequence encountered
    StopSequence,
    /// Tool use initiated
    ToolUse,
    #[serde(other)]
    Other,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    /// Number of input tokens
    pub input_tokens: u32,

    /// Number of output tokens
    pub output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_choice_serialization() {
        let choice = ToolChoice::Tool {
            name: "IssueList".to_string(),
        };
        let json = serde_json::to_string(&choice).unwrap();
        assert_eq!(json, r#"{"type":"tool","name":"IssueList"}"#);
    }

    #[test]
    fn test_response_with_unknown_block_and_stop_reason() {
        let json = r#"{
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [
                { "type": "thinking", "thinking": "hmm" },
                { "type": "tool_use", "id": "toolu_1", "name": "IssueList", "input": { "issues": [] } }
            ],
            "model": "claude-3-5-sonnet-20241022",
            "stop_reason": "pause_turn",
            "usage": { "input_tokens": 12, "output_tokens": 3 }
        }"#;
        let resp: MessageResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(resp.content[0], ContentBlock::Unsupported));
        assert!(matches!(resp.content[1], ContentBlock::ToolUse { .. }));
        assert_eq!(resp.stop_reason, Some(StopReason::Other));
    }
}
