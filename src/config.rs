//! Runtime configuration.
//!
//! - `--db <PATH>` on the command line
//! - `IDCARDS_DB` environment variable
//! - otherwise the platform data directory (see [`crate::db::default_path`])

use std::path::PathBuf;

use anyhow::Result;

pub const DB_ENV_VAR: &str = "IDCARDS_DB";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    /// Resolve configuration, preferring an explicit path over the environment.
    pub fn resolve(db_override: Option<PathBuf>) -> Result<Self> {
        Self::resolve_with(db_override, std::env::var_os(DB_ENV_VAR).map(PathBuf::from))
    }

    fn resolve_with(db_override: Option<PathBuf>, from_env: Option<PathBuf>) -> Result<Self> {
        let db_path = match db_override.or(from_env) {
            Some(path) => path,
            None => crate::db::default_path()?,
        };
        Ok(Self { db_path })
    }
}
