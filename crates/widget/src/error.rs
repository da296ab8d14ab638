use thiserror::Error;

pub type Result<T> = std::result::Result<T, WidgetError>;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Failed to read UI bundle {path}: {source}")]
    BundleIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid card template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Card render failed: {0}")]
    Render(#[from] handlebars::RenderError),
}
