//! Centralized constants for the envload workspace.
//!
//! This module contains default values used across crates to avoid
//! magic string duplication.

// =============================================================================
// File Loading Defaults
// =============================================================================

/// Env file read when the caller does not name any file.
pub const DEFAULT_ENV_FILE: &str = ".env";

// =============================================================================
// Typed Accessor Defaults
// =============================================================================

/// Separator used by list accessors when the caller has no preference.
pub const DEFAULT_LIST_SEPARATOR: &str = ",";

/// Largest duration accepted by the duration parser, in nanoseconds.
///
/// Matches the range of a signed 64-bit nanosecond count so that values
/// written for other tooling keep the same limits here.
pub const MAX_DURATION_NANOS: u128 = i64::MAX as u128;
