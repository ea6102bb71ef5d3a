//! Constants used throughout the application
//!
//! This module centralizes default values and fixed limits so that config
//! defaults and service behavior stay in one place.

/// Maximum number of rows returned by the unpaginated employee listing.
///
/// The listing never goes past the first page; callers who need more rows
/// must use the paginated variant.
pub const DEFAULT_LIST_LIMIT: u64 = 100;

// Database defaults
pub const DEFAULT_DATABASE_URL: &str = "sqlite:staffdir.db?mode=rwc";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;

// Logging defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FILE: &str = "staffdir.log";
