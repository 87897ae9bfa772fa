//! Common test utilities for integration tests
//!
//! Canned model responses and configuration pointing the adapters at a
//! local mock server.

#![allow(dead_code)]

use issueforge::domain::models::{GitHubConfig, LlmConfig, LlmProvider};
use issueforge::Destination;
use serde_json::{json, Value};

pub const TEST_REPO: &str = "acme/widgets";
pub const TEST_TOKEN: &str = "ghp_testtoken0123456789";

pub fn destination() -> Destination {
    Destination::new(Some(TEST_REPO), Some(TEST_TOKEN)).expect("valid destination")
}

pub fn github_config(base_url: &str) -> GitHubConfig {
    GitHubConfig {
        api_base_url: base_url.to_string(),
        timeout_secs: 5,
        ..Default::default()
    }
}

pub fn groq_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        provider: LlmProvider::Groq,
        api_key: Some("gsk_test".to_string()),
        base_url: Some(base_url.to_string()),
        timeout_secs: 5,
        ..Default::default()
    }
}

pub fn anthropic_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        provider: LlmProvider::Anthropic,
        api_key: Some("sk-ant-test".to_string()),
        base_url: Some(base_url.to_string()),
        timeout_secs: 5,
        ..Default::default()
    }
}

/// A sample payload in the batch schema.
pub fn sample_issues() -> Value {
    json!({
        "issues": [
            {
                "title": "Forgot Password link does nothing",
                "body": "Clicking **Forgot Password** on the login page has no effect.",
                "labels": ["bug", "student-login"]
            },
            {
                "title": "Sort dashboard courses by recent activity",
                "body": "Enrolled courses are sorted alphabetically.",
                "labels": ["enhancement", "ui/ux"]
            },
            {
                "title": "Fix typo in Advanced Python description",
                "body": "\"learing\" should read \"learning\".",
                "labels": ["documentation"]
            }
        ]
    })
}

/// Chat completions body whose forced tool call carries `arguments`.
pub fn chat_completion_body(arguments: &Value) -> String {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "model": "openai/gpt-oss-120b",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_1",
                    "type": "function",
                    "function": { "name": "IssueList", "arguments": arguments.to_string() }
                }]
            },
            "finish_reason": "tool_calls"
        }],
        "usage": { "prompt_tokens": 200, "completion_tokens": 80, "total_tokens": 280 }
    })
    .to_string()
}

/// Messages API body whose `tool_use` block carries `input`.
pub fn anthropic_message_body(input: &Value) -> String {
    json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "content": [{
            "type": "tool_use",
            "id": "toolu_01",
            "name": "IssueList",
            "input": input
        }],
        "model": "claude-3-5-sonnet-20241022",
        "stop_reason": "tool_use",
        "usage": { "input_tokens": 200, "output_tokens": 80 }
    })
    .to_string()
}

/// GitHub's 201 body for a created issue.
pub fn created_issue_body(number: u64, title: &str) -> String {
    json!({
        "id": 1000 + number,
        "number": number,
        "title": title,
        "state": "open",
        "html_url": format!("https://github.com/{TEST_REPO}/issues/{number}"),
        "labels": []
    })
    .to_string()
}
