//! Centralized constants for the appcfg workspace.
//!
//! This module contains the fixed fallback values written by default-fill
//! and the scheme prefixes that decide whether a source is local.

// =============================================================================
// Source Classification
// =============================================================================

/// Source prefixes that mark a configuration as remote (fetched over HTTP).
///
/// Matching is case-sensitive, so `HTTP://host/cfg.json` is treated as a path.
pub const REMOTE_PREFIXES: [&str; 2] = ["http://", "https://"];

// =============================================================================
// Document Defaults
// =============================================================================

/// ID written into empty default-ID fields and unnamed notification records.
pub const DEFAULT_ID: &str = "DEFAULT";

/// Cookie domain used when the document does not configure one.
pub const DEFAULT_COOKIE_DOMAIN: &str = "localhost";

/// Placeholder JWT secret used when `JWTSecret` is absent.
pub const DEFAULT_JWT_SECRET: &str = "defaultsecretkey";

// =============================================================================
// Database Defaults
// =============================================================================

/// Storage type for server-hosted databases.
pub const STORAGE_TYPE_SERVER: &str = "SERVER";

/// Default character enclosing string literals in generated queries.
pub const DEFAULT_STRING_ENCLOSING_CHAR: &str = "'";

/// Default character escaping reserved characters inside string literals.
pub const DEFAULT_STRING_ESCAPE_CHAR: &str = "\\";

/// Default character escaping reserved words (identifiers).
pub const DEFAULT_RESERVED_WORD_ESCAPE_CHAR: &str = "\"";

/// Default prepared-statement parameter placeholder.
pub const DEFAULT_PARAMETER_PLACEHOLDER: &str = "?";

/// Driver names (compared case-insensitively) that receive SQL Server defaults.
pub const SQL_SERVER_DRIVERS: [&str; 2] = ["sqlserver", "mssql"];

/// SQL Server query returning the identity generated by the last insert.
pub const SQL_SERVER_IDENTITY_QUERY: &str = "SELECT SCOPE_IDENTITY();";

/// SQL Server expression for the current local date/time.
pub const SQL_SERVER_DATE_FUNCTION: &str = "GETDATE()";

/// SQL Server expression for the current UTC date/time.
pub const SQL_SERVER_UTC_DATE_FUNCTION: &str = "GETUTCDATE()";

// =============================================================================
// Persistence
// =============================================================================

/// Final extension of the sibling file written before the atomic rename.
///
/// The sibling is named `<file>.<pid>.tmp`, so an existing `<stem>.tmp` is never touched.
pub const TEMP_FILE_EXTENSION: &str = "tmp";
