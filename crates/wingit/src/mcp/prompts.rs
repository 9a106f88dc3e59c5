//! `field_checklist`: turn tool output into a printable checklist

use std::collections::HashMap;

use wingit_core::field_checklist_prompt;

use super::protocol::{
    McpError, PromptArgument, PromptDefinition, PromptMessage, PromptsGetResult, TextContent,
};

pub const FIELD_CHECKLIST: &str = "field_checklist";

pub fn definitions() -> Vec<PromptDefinition> {
    vec![PromptDefinition {
        name: FIELD_CHECKLIST.to_string(),
        description: "Summarize target_checklist output as a compact field checklist".to_string(),
        arguments: vec![
            PromptArgument {
                name: "location".to_string(),
                description: "Birding location or general area".to_string(),
                required: true,
            },
            PromptArgument {
                name: "dayRange".to_string(),
                description: "Time window label, e.g. \"last 7 days\"".to_string(),
                required: false,
            },
        ],
    }]
}

pub fn get(name: &str, arguments: &HashMap<String, String>) -> Result<PromptsGetResult, McpError> {
    if name != FIELD_CHECKLIST {
        return Err(McpError::InvalidParams(format!("Unknown prompt: {}", name)));
    }

    let arg = |key: &str| arguments.get(key).map(String::as_str).unwrap_or("");
    Ok(PromptsGetResult {
        description: "Field checklist from WingIt targets".to_string(),
        messages: vec![PromptMessage {
            role: "user".to_string(),
            content: TextContent::new(field_checklist_prompt(arg("location"), arg("dayRange"))),
        }],
    })
}
