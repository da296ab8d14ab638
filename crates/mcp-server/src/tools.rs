//! The three card tools: descriptors for `tools/list` and execution for
//! `tools/call`.

use crate::format::{self, ToolResult};
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use useless_catalog::{find_card, list_cards, search_cards, CardQuery, Catalog};
use useless_widget::WIDGET_URI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    GetLearningCard,
    ListAllCards,
    SearchCards,
}

impl ToolName {
    pub const ALL: [ToolName; 3] = [Self::GetLearningCard, Self::ListAllCards, Self::SearchCards];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetLearningCard => "get_learning_card",
            Self::ListAllCards => "list_all_cards",
            Self::SearchCards => "search_cards",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    fn definition(self) -> Value {
        match self {
            Self::GetLearningCard => json!({
                "name": self.as_str(),
                "title": "Get Learning Card",
                "description": "Get a cross-occupational learning card teaching how professionals perform specific tasks. Use when user asks about: how things work, professional techniques, job procedures, useless facts, learning something new, aircraft, chef, architect, electrician, paramedic, or asks to \"tell me something\". Returns detailed step-by-step instructions from different occupations.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "id": {
                            "type": "string",
                            "description": "Optional: The specific card ID to retrieve (e.g., \"aircraft-oil-change\")"
                        },
                        "occupation": {
                            "type": "string",
                            "description": "Optional: Filter by occupation (e.g., \"Aircraft Engineer\", \"Chef\", \"Architect\")"
                        },
                        "category": {
                            "type": "string",
                            "description": "Optional: Filter by category (e.g., \"Maintenance & Safety\", \"Culinary Arts\")"
                        }
                    }
                },
                "_meta": {
                    "openai/outputTemplate": WIDGET_URI,
                    "openai/toolInvocation/invoking": "Loading learning card...",
                    "openai/toolInvocation/invoked": "Learning card displayed"
                }
            }),
            Self::ListAllCards => json!({
                "name": self.as_str(),
                "description": "List all available learning cards with their titles, occupations, and categories.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            }),
            Self::SearchCards => json!({
                "name": self.as_str(),
                "description": "Search learning cards by keyword in title, description, or occupation.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Search query to match against card titles, descriptions, and occupations"
                        }
                    },
                    "required": ["query"]
                }
            }),
        }
    }
}

/// Descriptors in `tools/list` order.
pub fn tool_definitions() -> Vec<Value> {
    ToolName::ALL.into_iter().map(ToolName::definition).collect()
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
struct SearchArgs {
    #[serde(default)]
    query: Option<String>,
}

fn parse_args<T>(tool: ToolName, arguments: Option<Value>) -> Result<T, ToolError>
where
    T: for<'de> Deserialize<'de>,
{
    let arguments = match arguments {
        None | Some(Value::Null) => Value::Object(Default::default()),
        Some(value) => value,
    };
    serde_json::from_value(arguments).map_err(|source| ToolError::InvalidArguments {
        tool: tool.as_str(),
        source,
    })
}

/// Runs one tool against the catalog. Missing arguments act as `{}`.
pub fn call_tool(
    catalog: &Catalog,
    name: &str,
    arguments: Option<Value>,
) -> Result<ToolResult, ToolError> {
    let tool = ToolName::from_name(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

    let result = match tool {
        ToolName::GetLearningCard => {
            let query: CardQuery = parse_args(tool, arguments)?;
            match find_card(catalog, &query) {
                Some(card) => format::card_result(card),
                None => format::card_not_found(),
            }
        }
        ToolName::ListAllCards => format::card_list(&list_cards(catalog)),
        ToolName::SearchCards => {
            let args: SearchArgs = parse_args(tool, arguments)?;
            let query = args.query.unwrap_or_default();
            format::search_results(&query, &search_cards(catalog, &query))
        }
    };
    Ok(result)
}
