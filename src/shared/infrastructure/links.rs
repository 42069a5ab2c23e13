// Canonical references for created resources.
//
// Purpose
// - Build the path a client uses to fetch a resource it just created.
//
// Boundaries
// - Paths are version agnostic; a reference is valid under every API version.

use thiserror::Error;
use url::Url;

use crate::modules::camps::core::talk::TalkId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("segment {0:?} cannot address a resource")]
    UnaddressableSegment(String),

    #[error("base url {0} cannot hold a path")]
    InvalidBase(String),
}

#[derive(Debug, Clone)]
pub struct LinkGenerator {
    base: Url,
}

impl Default for LinkGenerator {
    fn default() -> Self {
        Self {
            base: Url::parse("http://localhost/").expect("static url is valid"),
        }
    }
}

impl LinkGenerator {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    pub fn camp(&self, moniker: &str) -> Result<String, LinkError> {
        self.path(&["api", "camps", moniker])
    }

    pub fn talk(&self, moniker: &str, talk_id: TalkId) -> Result<String, LinkError> {
        self.path(&["api", "camps", moniker, "talks", &talk_id.to_string()])
    }

    fn path(&self, segments: &[&str]) -> Result<String, LinkError> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.trim().is_empty() || **s == "." || **s == "..")
        {
            return Err(LinkError::UnaddressableSegment((*bad).to_string()));
        }
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| LinkError::InvalidBase(self.base.to_string()))?
            .clear()
            .extend(segments);
        Ok(url.path().to_string())
    }
}
