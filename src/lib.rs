//! Student ID card wallet.
//!
//! A student logs in with an identifier and keeps dorm, library and gym card
//! images, persisted per student in a key-value store. See [`wallet::Wallet`]
//! for the entry point used by the command line front end.

pub mod cards;
pub mod config;
pub mod data_uri;
pub mod db;
pub mod error;
pub mod models;
pub mod session;
pub mod store;
pub mod wallet;

pub use error::{Error, Result};
