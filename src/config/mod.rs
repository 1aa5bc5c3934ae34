//! Site configuration loaded from `seo.toml`.
//!
//! # Sections
//!
//! | Section          | Purpose                                         |
//! |------------------|-------------------------------------------------|
//! | `[site]`         | Address of the page being rendered              |
//! | `[page]`         | Page SEO config; absent → home page             |
//! | `[[faq]]`        | Questions for an `FAQPage` record               |
//! | `[[breadcrumb]]` | Trail for a `BreadcrumbList` record             |
//! | `[article]`      | Fields for an `Article` record                  |
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://voipcat.com/plans"
//!
//! [page]
//! title = "Plans | VOIP CAT"
//! description = "Cloud PBX plans"
//!
//! [[breadcrumb]]
//! name = "Home"
//! url = "/"
//! ```

mod error;

pub use error::ConfigError;

use crate::log;
use crate::page::Page;
use crate::seo::{SeoConfig, schema};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default page address when `[site] url` is not set.
pub const DEFAULT_URL: &str = "https://voipcat.com/";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing seo.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    pub site: SiteSection,

    /// Page SEO config. When absent the home page is rendered.
    pub page: Option<SeoConfig>,

    pub faq: Vec<schema::FaqEntry>,

    pub breadcrumb: Vec<schema::BreadcrumbEntry>,

    pub article: Option<schema::ArticleInput>,
}

/// `[site]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Current page address, used for `og:url` and alternate links.
    pub url: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.into(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from `path`.
    ///
    /// A missing file is not an error: defaults render the home page.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            Self::from_path(path)?
        } else {
            log!("config"; "'{}' not found, rendering home page", path.display());
            Self::default()
        };
        config.config_path = path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Check the page address is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = url::Url::parse(&self.site.url)
            .map_err(|e| ConfigError::Validation(format!("site.url: invalid URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "site.url: scheme '{}' not supported, must be http or https",
                url.scheme()
            )));
        }
        if url.host_str().is_none() {
            return Err(ConfigError::Validation(
                "site.url: URL must have a valid host".into(),
            ));
        }
        Ok(())
    }

    /// Parsed page address.
    pub fn location(&self) -> Result<url::Url, ConfigError> {
        url::Url::parse(&self.site.url)
            .map_err(|e| ConfigError::Validation(format!("site.url: invalid URL: {e}")))
    }

    /// JSON-LD records built from `[[faq]]`, `[[breadcrumb]]` and `[article]`.
    pub fn records(&self) -> Vec<serde_json::Value> {
        let mut records = Vec::new();
        if !self.faq.is_empty() {
            records.push(schema::faq(&self.faq));
        }
        if !self.breadcrumb.is_empty() {
            records.push(schema::breadcrumb(&self.breadcrumb));
        }
        if let Some(article) = &self.article {
            records.push(schema::article(article));
        }
        records
    }

    /// Page to render: the configured `[page]`, or the home page.
    ///
    /// Configured records are added after the page's own.
    pub fn page(&self) -> Page {
        let page = match &self.page {
            Some(config) => Page::new(config.clone()),
            None => Page::home(),
        };
        self.records().into_iter().fold(page, Page::with_record)
    }
}

#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(extra).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
