//! menu-server: hierarchical menu ingestion and catalog API
//!
//! - `document`: typed access to the XML menu export
//! - `ingest`: depth-first ingestion with cycle-safe option group traversal
//! - `db`: SQLite pool, migrations, repositories, transactional store
//! - `api`: read-only catalog routes over the ingested data

pub mod api;
pub mod config;
pub mod db;
pub mod document;
pub mod error;
pub mod ingest;
pub mod logger;
pub mod state;

pub use config::Config;
pub use db::{DbService, load_menu};
pub use ingest::{DryRunStore, IngestError, IngestReport, MenuStore, ingest_menu};
pub use state::AppState;
