use crate::error::{Result, WidgetError};
use crate::{WIDGET_DESCRIPTION, WIDGET_MIME_TYPE, WIDGET_NAME, WIDGET_SUMMARY, WIDGET_URI};
use serde::Serialize;
use std::path::Path;

/// Entry of `resources/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
}

/// Entry of `resources/read` contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContents {
    pub uri: &'static str,
    pub mime_type: &'static str,
    pub text: String,
    #[serde(rename = "_meta")]
    pub meta: WidgetMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetMeta {
    #[serde(rename = "openai/widgetPrefersBorder")]
    pub prefers_border: bool,
    #[serde(rename = "openai/widgetDescription")]
    pub description: &'static str,
}

/// The prebuilt UI bundle, loaded once at startup.
///
/// `source` is `None` when the bundle could not be read; the widget is then
/// served as a bare mount point and hosts fall back to the text content.
#[derive(Debug, Clone, Default)]
pub struct WidgetBundle {
    source: Option<String>,
}

impl WidgetBundle {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| WidgetError::BundleIo {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::new(source))
    }

    pub fn load_or_missing(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(bundle) => {
                log::info!(
                    "Loaded component bundle: {:.0} KB",
                    bundle.size_bytes() as f64 / 1024.0
                );
                bundle
            }
            Err(err) => {
                log::warn!("Error loading component bundle: {err}");
                log::warn!("Custom UI will not be available - falling back to text only");
                Self::missing()
            }
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.source.as_ref().map_or(0, String::len)
    }

    pub fn descriptor(&self) -> ResourceDescriptor {
        ResourceDescriptor {
            uri: WIDGET_URI,
            name: WIDGET_NAME,
            description: WIDGET_SUMMARY,
            mime_type: WIDGET_MIME_TYPE,
        }
    }

    /// Mount point plus the bundle inlined as a module script.
    pub fn contents(&self) -> ResourceContents {
        let mut text = String::from(r#"<div id="root"></div>"#);
        if let Some(source) = &self.source {
            text.push('\n');
            text.push_str(r#"<script type="module">"#);
            text.push_str(source);
            text.push_str("</script>");
        }

        ResourceContents {
            uri: WIDGET_URI,
            mime_type: WIDGET_MIME_TYPE,
            text,
            meta: WidgetMeta {
                prefers_border: true,
                description: WIDGET_DESCRIPTION,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn contents_inline_the_bundle_after_the_mount_point() {
        let bundle = WidgetBundle::new("console.log('card');");
        let contents = bundle.contents();
        assert_eq!(
            contents.text,
            "<div id=\"root\"></div>\n<script type=\"module\">console.log('card');</script>"
        );
    }

    #[test]
    fn missing_bundle_serves_mount_point_only() {
        let contents = WidgetBundle::missing().contents();
        assert_eq!(contents.text, r#"<div id="root"></div>"#);
        assert!(!contents.text.contains("null"));
    }

    #[test]
    fn contents_serialize_with_widget_meta() {
        let value = serde_json::to_value(WidgetBundle::new("x").contents()).unwrap();
        assert_eq!(value["uri"], WIDGET_URI);
        assert_eq!(value["mimeType"], "text/html+skybridge");
        assert_eq!(
            value["_meta"],
            json!({
                "openai/widgetPrefersBorder": true,
                "openai/widgetDescription": WIDGET_DESCRIPTION,
            })
        );
    }

    #[test]
    fn descriptor_serializes_camel_case() {
        let value = serde_json::to_value(WidgetBundle::missing().descriptor()).unwrap();
        assert_eq!(
            value,
            json!({
                "uri": "ui://widget/learning-card.html",
                "name": "Learning Card Widget",
                "description": WIDGET_SUMMARY,
                "mimeType": "text/html+skybridge",
            })
        );
    }

    #[test]
    fn load_reads_file_and_degrades_when_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("component.js");
        std::fs::write(&path, "export {};").unwrap();

        let bundle = WidgetBundle::load_or_missing(&path);
        assert_eq!(bundle.size_bytes(), "export {};".len());
        assert!(bundle.contents().text.contains("export {};"));

        let absent = WidgetBundle::load_or_missing(dir.path().join("nope.js"));
        assert_eq!(absent.size_bytes(), 0);
        assert_eq!(absent.contents().text, r#"<div id="root"></div>"#);
        assert!(matches!(
            WidgetBundle::load(dir.path().join("nope.js")),
            Err(WidgetError::BundleIo { .. })
        ));
    }
}
