//! CTA link resolution.
//!
//! A CTA url is either an in-page anchor (`#how-it-works`), an absolute URL,
//! or a path relative to the site the page is published on.

use anyhow::{Context, Result};
use url::Url;

/// Anchor id of the "how it works" section.
pub const HOW_IT_WORKS_ANCHOR: &str = "how-it-works";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Jump within the page.
    Anchor(String),
    /// Open in the system browser.
    External(Url),
}

impl LinkTarget {
    /// Resolves a raw CTA url. Relative paths are joined onto `base_url`.
    pub fn resolve(raw: &str, base_url: &Url) -> Result<LinkTarget> {
        let raw = raw.trim();
        if raw.is_empty() {
            anyhow::bail!("Link has no target");
        }
        if let Some(anchor) = raw.strip_prefix('#') {
            return Ok(LinkTarget::Anchor(anchor.to_string()));
        }

        match Url::parse(raw) {
            Ok(url) => Ok(LinkTarget::External(url)),
            Err(url::ParseError::RelativeUrlWithoutBase) => base_url
                .join(raw)
                .map(LinkTarget::External)
                .with_context(|| format!("Failed to resolve '{raw}' against {base_url}")),
            Err(err) => Err(err).with_context(|| format!("Invalid link '{raw}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://expanso.io/").unwrap()
    }

    #[test]
    fn test_anchor() {
        assert_eq!(
            LinkTarget::resolve("#how-it-works", &base()).unwrap(),
            LinkTarget::Anchor(HOW_IT_WORKS_ANCHOR.to_string())
        );
    }

    #[test]
    fn test_absolute_url() {
        let target = LinkTarget::resolve("https://exso.cloud/get-started", &base()).unwrap();
        assert_eq!(
            target,
            LinkTarget::External(Url::parse("https://exso.cloud/get-started").unwrap())
        );
    }

    #[test]
    fn test_relative_path_joins_base() {
        let target = LinkTarget::resolve("/book-a-demo", &base()).unwrap();
        assert_eq!(
            target,
            LinkTarget::External(Url::parse("https://expanso.io/book-a-demo").unwrap())
        );
    }

    #[test]
    fn test_empty_link_is_error() {
        assert!(LinkTarget::resolve("  ", &base()).is_err());
    }
}
