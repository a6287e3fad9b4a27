use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to fetch {url} for source '{source_key}'")]
    Fetch {
        source_key: &'static str,
        url: String,
        #[source]
        error: anyhow::Error,
    },
    #[error("source '{source_key}' page has no {missing}")]
    Markup {
        source_key: &'static str,
        missing: &'static str,
    },
    #[error("no source registered under '{0}'")]
    UnknownSource(String),
}
