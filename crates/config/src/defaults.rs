//! Default-fill applied after a document is parsed.
//!
//! Responsibilities:
//! - Fill absent or empty default IDs, the cookie domain and the JWT secret.
//! - Fill dialect defaults on every database record.
//! - Synthesize IDs for unnamed notification records.
//!
//! Does NOT handle:
//! - Interpolation of `${VAR}` tokens (see `raw.rs`).
//! - Validation. Values that are present are never checked or replaced.
//!
//! Invariants:
//! - A field is only set when absent or empty; user values are never overwritten.
//! - `StorageType` is upper-cased, which is normalization rather than overwrite.
//! - Running `apply_defaults` on an already-filled document changes nothing.

use crate::constants::{
    DEFAULT_COOKIE_DOMAIN, DEFAULT_ID, DEFAULT_JWT_SECRET, DEFAULT_PARAMETER_PLACEHOLDER,
    DEFAULT_RESERVED_WORD_ESCAPE_CHAR, DEFAULT_STRING_ENCLOSING_CHAR, DEFAULT_STRING_ESCAPE_CHAR,
    SQL_SERVER_DATE_FUNCTION, SQL_SERVER_DRIVERS, SQL_SERVER_IDENTITY_QUERY,
    SQL_SERVER_UTC_DATE_FUNCTION, STORAGE_TYPE_SERVER,
};
use crate::lookup::eq_fold;
use crate::types::{Configuration, DatabaseInfo, NotificationInfo};

/// Fills every default the document is missing.
pub fn apply_defaults(config: &mut Configuration) {
    fill_if_empty(&mut config.default_database_id, DEFAULT_ID);
    fill_if_empty(&mut config.default_endpoint_id, DEFAULT_ID);
    fill_if_empty(&mut config.default_notification_id, DEFAULT_ID);

    // An explicitly empty cookie domain or secret is kept as configured.
    config
        .cookie_domain
        .get_or_insert_with(|| DEFAULT_COOKIE_DOMAIN.to_string());
    config
        .jwt_secret
        .get_or_insert_with(|| DEFAULT_JWT_SECRET.to_string());

    for database in config.databases.iter_mut().flatten() {
        apply_database_defaults(database);
    }

    if let Some(notifications) = config.notifications.as_mut() {
        assign_notification_ids(notifications);
    }
}

/// Fills dialect defaults on one database record.
pub fn apply_database_defaults(database: &mut DatabaseInfo) {
    database.interpolate_tables.get_or_insert(true);
    fill_if_empty(
        &mut database.string_enclosing_char,
        DEFAULT_STRING_ENCLOSING_CHAR,
    );
    fill_if_empty(&mut database.string_escape_char, DEFAULT_STRING_ESCAPE_CHAR);
    fill_if_empty(
        &mut database.reserved_word_escape_char,
        DEFAULT_RESERVED_WORD_ESCAPE_CHAR,
    );
    if database.parameter_placeholder.is_empty() {
        database.parameter_placeholder = DEFAULT_PARAMETER_PLACEHOLDER.to_string();
    }

    database.storage_type = if database.storage_type.is_empty() {
        STORAGE_TYPE_SERVER.to_string()
    } else {
        database.storage_type.to_uppercase()
    };

    let sql_server = SQL_SERVER_DRIVERS
        .iter()
        .any(|driver| eq_fold(&database.driver_name, driver));
    if database.storage_type == STORAGE_TYPE_SERVER && sql_server {
        fill_if_empty(&mut database.identity_query, SQL_SERVER_IDENTITY_QUERY);
        fill_if_empty(&mut database.date_function, SQL_SERVER_DATE_FUNCTION);
        fill_if_empty(&mut database.utc_date_function, SQL_SERVER_UTC_DATE_FUNCTION);
    }
}

/// Gives unnamed notifications the IDs `DEFAULT`, `DEFAULT1`, `DEFAULT2`, ...
/// by position. Named records keep their ID and still consume an index.
pub fn assign_notification_ids(notifications: &mut [NotificationInfo]) {
    for (index, notification) in notifications.iter_mut().enumerate() {
        if !notification.id.is_empty() {
            continue;
        }
        notification.id = if index == 0 {
            DEFAULT_ID.to_string()
        } else {
            format!("{DEFAULT_ID}{index}")
        };
    }
}

fn fill_if_empty(field: &mut Option<String>, default: &str) {
    if field.as_deref().is_none_or(str::is_empty) {
        *field = Some(default.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn database(driver: &str, storage: &str) -> DatabaseInfo {
        DatabaseInfo {
            id: "main".to_string(),
            driver_name: driver.to_string(),
            storage_type: storage.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_document_level_defaults() {
        let mut config = Configuration {
            default_endpoint_id: Some(String::new()),
            default_notification_id: Some("mailer".to_string()),
            ..Default::default()
        };
        apply_defaults(&mut config);

        assert_eq!(config.default_database_id.as_deref(), Some("DEFAULT"));
        assert_eq!(config.default_endpoint_id.as_deref(), Some("DEFAULT"));
        assert_eq!(config.default_notification_id.as_deref(), Some("mailer"));
        assert_eq!(config.cookie_domain.as_deref(), Some("localhost"));
        assert_eq!(config.jwt_secret.as_deref(), Some("defaultsecretkey"));
    }

    #[test]
    fn test_present_but_empty_cookie_domain_is_kept() {
        let mut config = Configuration {
            cookie_domain: Some(String::new()),
            ..Default::default()
        };
        apply_defaults(&mut config);
        assert_eq!(config.cookie_domain.as_deref(), Some(""));
    }

    #[test]
    fn test_database_dialect_defaults() {
        let mut db = database("postgres", "");
        apply_database_defaults(&mut db);

        assert_eq!(db.interpolate_tables, Some(true));
        assert_eq!(db.string_enclosing_char.as_deref(), Some("'"));
        assert_eq!(db.string_escape_char.as_deref(), Some("\\"));
        assert_eq!(db.reserved_word_escape_char.as_deref(), Some("\""));
        assert_eq!(db.parameter_placeholder, "?");
        assert_eq!(db.storage_type, "SERVER");
        assert_eq!(db.identity_query, None);
    }

    #[test]
    fn test_user_values_are_not_overwritten() {
        let mut db = DatabaseInfo {
            interpolate_tables: Some(false),
            string_enclosing_char: Some("\"".to_string()),
            reserved_word_escape_char: Some("[]".to_string()),
            parameter_placeholder: "$".to_string(),
            storage_type: "file".to_string(),
            ..database("sqlite3", "")
        };
        apply_database_defaults(&mut db);

        assert_eq!(db.interpolate_tables, Some(false));
        assert_eq!(db.string_enclosing_char.as_deref(), Some("\""));
        assert_eq!(db.reserved_word_escape_char.as_deref(), Some("[]"));
        assert_eq!(db.parameter_placeholder, "$");
        assert_eq!(db.storage_type, "FILE");
    }

    #[test]
    fn test_sql_server_defaults_by_driver_name() {
        for driver in ["sqlserver", "MSSQL", "SqlServer"] {
            let mut db = database(driver, "server");
            apply_database_defaults(&mut db);
            assert_eq!(
                db.identity_query.as_deref(),
                Some("SELECT SCOPE_IDENTITY();")
            );
            assert_eq!(db.date_function.as_deref(), Some("GETDATE()"));
            assert_eq!(db.utc_date_function.as_deref(), Some("GETUTCDATE()"));
        }

        let mut file_db = database("mssql", "FILE");
        apply_database_defaults(&mut file_db);
        assert_eq!(file_db.identity_query, None);
    }

    #[test]
    fn test_notification_id_synthesis() {
        let mut notifications = vec![
            NotificationInfo::default(),
            NotificationInfo::default(),
            NotificationInfo {
                id: "sms".to_string(),
                ..Default::default()
            },
            NotificationInfo::default(),
        ];
        assign_notification_ids(&mut notifications);

        let ids: Vec<_> = notifications.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["DEFAULT", "DEFAULT1", "sms", "DEFAULT3"]);
    }

    #[test]
    fn test_defaults_are_idempotent() {
        let mut config = Configuration {
            databases: Some(vec![database("mssql", "server"), database("", "")]),
            notifications: Some(vec![NotificationInfo::default()]),
            ..Default::default()
        };
        apply_defaults(&mut config);
        let once = serde_json::to_value(&config).unwrap();
        apply_defaults(&mut config);
        let twice = serde_json::to_value(&config).unwrap();
        assert_eq!(once, twice);
    }
}
