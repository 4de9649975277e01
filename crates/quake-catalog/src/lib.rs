//! CEIC earthquake catalog access.
//!
//! Fetches the China Earthquake Networks Center quick-search page and turns
//! it into [`quake_core::EventRecord`]s ready for report generation, plus
//! [`CatalogEntry`] summaries for the event selection table.
//!
//! # Example
//!
//! ```rust,ignore
//! use quake_catalog::{CatalogClient, DEFAULT_CATALOG_URL};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), quake_catalog::CatalogError> {
//!     let client = CatalogClient::new(DEFAULT_CATALOG_URL)?;
//!     for entry in client.latest_entries().await? {
//!         println!("{} {}", entry.time, entry.title);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod entry;
mod error;
pub mod mock;
pub mod parse;

pub use client::{check_status, CatalogClient, DEFAULT_CATALOG_URL};
pub use entry::{CatalogEntry, SOURCE_NAME};
pub use error::CatalogError;
pub use parse::{extract_newdata, parse_catalog, parse_newdata, parse_table};
