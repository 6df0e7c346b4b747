//! Error taxonomy for scraping.
//!
//! Functions return `anyhow::Result`; callers that need to tell a network
//! failure from a layout mismatch can `downcast_ref::<ScrapeError>()`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network failure or non-success HTTP status
    #[error("failed to fetch {url}: {reason}")]
    Transport { url: String, reason: String },

    /// An expected container or element is absent from the page
    #[error("page structure not found: {selector}")]
    StructureNotFound { selector: String },

    /// A log entry has fewer cells than the decoder needs
    #[error("log entry has {found} cells, cell {index} required")]
    MissingCell { index: usize, found: usize },

    /// An element exists but lacks the attribute the decoder reads
    #[error("<{element}> has no `{attribute}` attribute")]
    MissingAttribute { element: String, attribute: String },
}

impl ScrapeError {
    pub fn structure(selector: &str) -> Self {
        ScrapeError::StructureNotFound {
            selector: selector.to_string(),
        }
    }

    /// True for errors that indicate the page layout did not match
    pub fn is_structural(&self) -> bool {
        !matches!(self, ScrapeError::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_classification() {
        let transport = ScrapeError::Transport {
            url: "http://example.com".to_string(),
            reason: "connection refused".to_string(),
        };
        assert!(!transport.is_structural());
        assert!(ScrapeError::structure("div#x").is_structural());
        assert!(ScrapeError::MissingCell { index: 2, found: 1 }.is_structural());
    }

    #[test]
    fn test_display() {
        let err = ScrapeError::MissingCell { index: 3, found: 2 };
        assert_eq!(err.to_string(), "log entry has 2 cells, cell 3 required");
    }
}
