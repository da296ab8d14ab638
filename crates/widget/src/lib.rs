//! Learning card widget
//!
//! The `ui://widget/learning-card.html` resource served to MCP hosts, and a
//! server-side renderer producing the same card markup.

mod bundle;
mod error;
mod render;

pub use bundle::{ResourceContents, ResourceDescriptor, WidgetBundle, WidgetMeta};
pub use error::{Result, WidgetError};
pub use render::{CardRenderer, Theme};

pub const WIDGET_URI: &str = "ui://widget/learning-card.html";
pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";
pub const WIDGET_NAME: &str = "Learning Card Widget";
pub const WIDGET_SUMMARY: &str = "Interactive learning card component with red/orange branding";
pub const WIDGET_DESCRIPTION: &str = "Displays an interactive learning card with red/orange branding showing cross-occupational skills and procedures.";
