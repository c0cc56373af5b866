//! strata-db - Execution backends for Strata
//!
//! This crate provides the `Database` trait the deployment orchestrator hands
//! substituted SQL to, with a Snowflake CLI backend and a DuckDB backend.

pub mod duckdb;
pub mod error;
pub mod snowflake;
pub mod traits;

pub use duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use snowflake::SnowCliBackend;
pub use traits::{connect, Database};
