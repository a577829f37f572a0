//! URL Segment and Profile Providers
//!
//! Derived fields on the adapter (URL segment, author display names) come
//! from pluggable providers. Registered segment providers are asked in
//! order; if none yields a value the default slugifier runs as a fallback.
//! Only when the default also produces nothing does the chain fail, which
//! cannot happen for records with a non-empty name.

use crate::models::ContentRecord;
use crate::services::error::PreviewError;
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

/// Produces a URL segment for a content record, or `None` to defer to the
/// next provider in the chain.
pub trait UrlSegmentProvider: Send + Sync {
    fn url_segment(&self, record: &ContentRecord) -> Option<String>;
}

static NON_SLUG_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Default provider: slugifies the record name (lowercase, runs of
/// non-alphanumerics collapsed to single dashes).
pub struct DefaultUrlSegmentProvider;

impl UrlSegmentProvider for DefaultUrlSegmentProvider {
    fn url_segment(&self, record: &ContentRecord) -> Option<String> {
        let lowered = record.name.to_lowercase();
        let slug = NON_SLUG_CHARS
            .replace_all(&lowered, "-")
            .trim_matches('-')
            .to_string();

        if slug.is_empty() {
            None
        } else {
            Some(slug)
        }
    }
}

/// Ordered segment providers with the default slugifier as fallback.
pub struct SegmentProviderChain {
    providers: Vec<Arc<dyn UrlSegmentProvider>>,
    fallback: DefaultUrlSegmentProvider,
}

impl SegmentProviderChain {
    /// Create a chain with no registered providers (fallback only)
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            fallback: DefaultUrlSegmentProvider,
        }
    }

    /// Create a chain from registered providers
    pub fn with_providers(providers: Vec<Arc<dyn UrlSegmentProvider>>) -> Self {
        Self {
            providers,
            fallback: DefaultUrlSegmentProvider,
        }
    }

    /// Resolve the URL segment for a record. The result is always
    /// lowercased, whichever provider produced it.
    ///
    /// # Errors
    ///
    /// `PreviewError::ProviderExhausted` when neither the registered
    /// providers nor the default yield a segment.
    pub fn segment_for(&self, record: &ContentRecord) -> Result<String, PreviewError> {
        self.providers
            .iter()
            .find_map(|p| p.url_segment(record))
            .or_else(|| self.fallback.url_segment(record))
            .map(|segment| segment.to_lowercase())
            .ok_or_else(|| {
                PreviewError::provider_exhausted(format!(
                    "no url segment for content {}",
                    record.id
                ))
            })
    }
}

impl Default for SegmentProviderChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves a user id to a display name.
pub trait ProfileResolver: Send + Sync {
    fn display_name(&self, user_id: i64) -> Option<String>;
}

/// Fixed user-id-to-name mapping, for the demo store and tests.
#[derive(Default)]
pub struct StaticProfileResolver {
    names: HashMap<i64, String>,
}

impl StaticProfileResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user's display name
    pub fn with_user(mut self, user_id: i64, name: impl Into<String>) -> Self {
        self.names.insert(user_id, name.into());
        self
    }
}

impl ProfileResolver for StaticProfileResolver {
    fn display_name(&self, user_id: i64) -> Option<String> {
        self.names.get(&user_id).cloned()
    }
}
