use crate::errors::SourceError;
use crate::fetcher::PageFetcher;
use crate::sources::{snuco::SnucoSource, snudorm::SnudormSource, snuvet::SnuvetSource};
use crate::Source;
use std::sync::Arc;

/// A registered provider: its key and how to build it around a fetcher.
#[derive(Clone, Copy)]
pub struct SourceDescriptor {
    pub key: &'static str,
    build: fn(Arc<dyn PageFetcher>) -> Box<dyn Source>,
}

impl SourceDescriptor {
    pub fn build(&self, fetcher: Arc<dyn PageFetcher>) -> Box<dyn Source> {
        (self.build)(fetcher)
    }
}

impl std::fmt::Debug for SourceDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceDescriptor")
            .field("key", &self.key)
            .finish()
    }
}

pub fn default_sources() -> Vec<SourceDescriptor> {
    vec![
        SourceDescriptor {
            key: "snuco",
            build: |fetcher| Box::new(SnucoSource::new(fetcher)),
        },
        SourceDescriptor {
            key: "snudorm",
            build: |fetcher| Box::new(SnudormSource::new(fetcher)),
        },
        SourceDescriptor {
            key: "snuvet",
            build: |fetcher| Box::new(SnuvetSource::new(fetcher)),
        },
    ]
}

pub fn find_source<'a>(
    sources: &'a [SourceDescriptor],
    key: &str,
) -> Result<&'a SourceDescriptor, SourceError> {
    sources
        .iter()
        .find(|descriptor| descriptor.key == key)
        .ok_or_else(|| SourceError::UnknownSource(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{default_sources, find_source};
    use crate::fetcher::PageFetcher;
    use crate::SourceError;
    use async_trait::async_trait;
    use std::sync::Arc;
    use url::Url;

    struct NoopFetcher;

    #[async_trait]
    impl PageFetcher for NoopFetcher {
        async fn fetch_text(&self, _url: Url) -> anyhow::Result<String> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_built_sources_match_their_keys() {
        let fetcher: Arc<dyn PageFetcher> = Arc::new(NoopFetcher);
        for descriptor in default_sources() {
            let source = descriptor.build(Arc::clone(&fetcher));
            assert_eq!(source.key(), descriptor.key);
        }
    }

    #[test]
    fn test_only_snuvet_lacks_date_selection() {
        let fetcher: Arc<dyn PageFetcher> = Arc::new(NoopFetcher);
        let undated = default_sources()
            .into_iter()
            .filter(|descriptor| !descriptor.build(Arc::clone(&fetcher)).supports_date())
            .map(|descriptor| descriptor.key)
            .collect::<Vec<_>>();
        assert_eq!(undated, vec!["snuvet"]);
    }

    #[test]
    fn test_unknown_key_is_a_typed_error() {
        let sources = default_sources();
        assert_eq!(find_source(&sources, "snudorm").unwrap().key, "snudorm");
        let error = find_source(&sources, "snuhosp").unwrap_err();
        assert!(matches!(error, SourceError::UnknownSource(key) if key == "snuhosp"));
    }
}
