//! Command-line interface module.

mod args;
pub mod render;
pub mod schema;

pub use args::{Cli, Commands, RenderArgs, SchemaArgs, SchemaKind};

use anyhow::Result;
use std::{fs, io::Write, path::Path};

use crate::log;

/// Write command output to `path`, or stdout when not given.
fn write_output(module: &str, content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            write!(file, "{content}")?;
            log!(module; "wrote output to {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}
