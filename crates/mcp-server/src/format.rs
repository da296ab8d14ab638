//! Text bodies returned by the card tools.

use serde::Serialize;
use std::fmt::Write;
use useless_catalog::{CardSummary, Record};

pub const CARD_NOT_FOUND: &str =
    "No learning card found matching your criteria. Try using list_all_cards to see available options.";

/// Payload of a successful `tools/call`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub content: Vec<Content>,
    /// Raw card for UI hosts; only set by `get_learning_card`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<CardPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardPayload {
    pub card: Record,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            structured_content: None,
        }
    }

    pub fn with_card(mut self, card: &Record) -> Self {
        self.structured_content = Some(CardPayload { card: card.clone() });
        self
    }

    /// Concatenated text of all content blocks.
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .map(|Content::Text { text }| text.as_str())
            .collect()
    }
}

pub fn card_result(card: &Record) -> ToolResult {
    ToolResult::text(card_text(card)).with_card(card)
}

pub fn card_text(card: &Record) -> String {
    let steps = card
        .steps
        .iter()
        .enumerate()
        .map(|(idx, step)| format!("**{}.** {step}", idx + 1))
        .collect::<Vec<_>>()
        .join("\n\n");

    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "# 🔥 {}", card.title);
    let _ = writeln!(out);
    let _ = writeln!(out, "> **{}** | {}", card.occupation, card.category);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", card.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "---");
    let _ = writeln!(out);
    let _ = writeln!(out, "## 📋 Steps");
    let _ = writeln!(out);
    let _ = writeln!(out, "{steps}");
    let _ = writeln!(out);
    let _ = writeln!(out, "---");
    let _ = writeln!(out);
    let _ = writeln!(out, "### 💡 **Fun Fact**");
    let _ = writeln!(out, "> {}", card.fun_fact);
    let _ = writeln!(out);
    let _ = writeln!(out, "### 🎯 **Key Takeaway**");
    let _ = writeln!(out, "> {}", card.key_takeaway);
    let _ = writeln!(out);
    let _ = writeln!(out, "---");
    let _ = writeln!(out, "*Learn something new, even if it's useless!* 🚀");
    out
}

pub fn card_not_found() -> ToolResult {
    ToolResult::text(CARD_NOT_FOUND)
}

/// An empty catalog still renders the header and footer.
pub fn card_list(cards: &[CardSummary<'_>]) -> ToolResult {
    let entries = cards
        .iter()
        .map(|card| {
            format!(
                "\n## {}\n- **ID:** {}\n- **Occupation:** {}\n- **Category:** {}\n",
                card.title, card.id, card.occupation, card.category
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    ToolResult::text(format!(
        "\n# Available Learning Cards\n\n{entries}\n\nUse `get_learning_card` with an ID, occupation, or category to get the full details.\n"
    ))
}

pub fn search_results(query: &str, cards: &[&Record]) -> ToolResult {
    if cards.is_empty() {
        return ToolResult::text(format!(
            "No cards found matching \"{query}\". Try using list_all_cards to see all available options."
        ));
    }

    let entries = cards
        .iter()
        .map(|card| {
            format!(
                "\n## {}\n- **ID:** {}\n- **Occupation:** {}\n- **Category:** {}\n- **Description:** {}\n",
                card.title, card.id, card.occupation, card.category, card.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    ToolResult::text(format!(
        "\n# Search Results for \"{query}\"\n\nFound {} matching card(s):\n\n{entries}\n",
        cards.len()
    ))
}
