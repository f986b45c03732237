use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to decode entity references: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid catalog configuration: {context}")]
    Config { context: String },
}

impl CatalogError {
    pub fn config(context: impl Into<String>) -> Self {
        Self::Config {
            context: context.into(),
        }
    }
}
