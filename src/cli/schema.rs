//! `schema` command: print one JSON-LD record.

use anyhow::{Result, bail};
use serde_json::Value;

use super::{SchemaArgs, SchemaKind, write_output};
use crate::config::SiteConfig;
use crate::seo::schema;

/// Build the record for `kind`, reading inputs from `config` where needed.
pub fn build_record(kind: SchemaKind, config: &SiteConfig) -> Result<Value> {
    let record = match kind {
        SchemaKind::Organization => schema::organization().clone(),
        SchemaKind::Website => schema::website().clone(),
        SchemaKind::LocalBusiness => schema::local_business().clone(),
        SchemaKind::Rating => schema::aggregate_rating().clone(),
        SchemaKind::Services => Value::Array(schema::services().to_vec()),
        SchemaKind::Faq => schema::faq(&config.faq),
        SchemaKind::Breadcrumb => schema::breadcrumb(&config.breadcrumb),
        SchemaKind::Article => match &config.article {
            Some(article) => schema::article(article),
            None => bail!("no [article] section in {}", config.config_path.display()),
        },
    };
    Ok(record)
}

pub fn run_schema(args: &SchemaArgs, config: &SiteConfig) -> Result<()> {
    let record = build_record(args.kind, config)?;
    let mut formatted = if args.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    formatted.push('\n');
    write_output("schema", &formatted, args.output.as_deref())
}
