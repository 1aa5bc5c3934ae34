//! `render` command: synchronize a fresh head and print it.

use anyhow::{Context, Result};

use super::{RenderArgs, write_output};
use crate::config::SiteConfig;
use crate::head::MemoryHead;
use crate::{debug, log};

/// Render the configured page `renders` times into an empty head.
pub fn render_head(config: &SiteConfig, url: Option<&str>, renders: u32) -> Result<MemoryHead> {
    let location = match url {
        Some(url) => url::Url::parse(url).with_context(|| format!("invalid --url `{url}`"))?,
        None => config.location()?,
    };

    let mut page = config.page();
    let mut head = MemoryHead::new();
    for pass in 1..=renders {
        let outcome = page
            .render(&mut head, &location)
            .context("failed to serialize structured data")?;
        debug!("render"; "pass {}: synced={}, injected={}", pass, outcome.synced, outcome.injected);
    }

    Ok(head)
}

pub fn run_render(args: &RenderArgs, config: &SiteConfig) -> Result<()> {
    let head = render_head(config, args.url.as_deref(), args.renders)?;
    log!(
        "render";
        "\"{}\": {} head elements, {} json-ld records",
        head.title().unwrap_or_default(),
        head.elements().len(),
        head.scripts().count()
    );
    write_output("render", &head.to_html(), args.output.as_deref())
}
