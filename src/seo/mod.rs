//! Search-engine metadata for rendered pages.
//!
//! - [`sync`]: keeps `<head>` meta/link tags in line with a [`SeoConfig`]
//! - [`schema`]: Schema.org JSON-LD records and their injection

mod config;
mod og;
pub mod schema;
mod sync;

pub use config::SeoConfig;
pub use sync::SeoSync;
