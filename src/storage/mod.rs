//! Storage module owning the database connection.
//!
//! This module provides the [`Storage`] handle used by the service and
//! repository layers: connection setup from configuration, schema bootstrap,
//! and a few maintenance helpers.

pub mod db;
pub mod employees;

pub use db::Storage;
