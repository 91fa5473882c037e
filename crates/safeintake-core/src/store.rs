// SPDX-License-Identifier: Apache-2.0

//! Persistence of fetched data with a parameterized `INSERT`.
//!
//! The statement text is built once from a validated table name; the fetched
//! data only ever travels as a bound parameter. Connections go through
//! `sqlx`'s `Any` driver so the same code serves MySQL in production and
//! SQLite for local runs and tests.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;
use tracing::{debug, info, instrument};
use url::Url;

use crate::Result;
use crate::auth::{CredentialKind, require_credential};
use crate::config::DatabaseConfig;
use crate::error::IntakeError;
use crate::validate::validate_identifier;

/// Constant stored alongside the fetched data.
pub const SECOND_COLUMN_VALUE: &str = "Another Value";

/// URL schemes whose servers authenticate with a password.
const PASSWORD_SCHEMES: &[&str] = &["mysql", "mariadb"];

/// URL schemes the store can connect to.
const SUPPORTED_SCHEMES: &[&str] = &["mysql", "mariadb", "sqlite"];

/// Parameterized insert target.
#[derive(Debug)]
pub struct RecordStore {
    pool: AnyPool,
    insert_sql: String,
}

/// Builds the insert statement for an already validated table name.
fn insert_statement(table: &str) -> String {
    format!("INSERT INTO {table} (column1, column2) VALUES (?, ?)")
}

/// Validates the configured database URL and injects the password.
///
/// Returns the URL to connect with. The configured URL itself must not carry
/// a password.
fn connection_url(config: &DatabaseConfig, password: Option<SecretString>) -> Result<SecretString> {
    let mut url = Url::parse(&config.url).map_err(|e| {
        IntakeError::validation("database.url", format!("not a valid URL ({e})"))
    })?;

    if url.password().is_some() {
        return Err(IntakeError::HardcodedCredential {
            location: "database.url".to_string(),
        });
    }

    let scheme = url.scheme().to_ascii_lowercase();
    if !SUPPORTED_SCHEMES.contains(&scheme.as_str()) {
        return Err(IntakeError::validation(
            "database.url",
            format!("unsupported scheme '{scheme}' (expected mysql, mariadb or sqlite)"),
        ));
    }

    if scheme == "mariadb" {
        // sqlx registers MariaDB under the mysql scheme.
        url.set_scheme("mysql").map_err(|()| {
            IntakeError::validation("database.url", "cannot rewrite mariadb scheme")
        })?;
    }

    if PASSWORD_SCHEMES.contains(&scheme.as_str()) {
        let password = require_credential(CredentialKind::DatabasePassword, password)?;
        url.set_password(Some(password.expose_secret()))
            .map_err(|()| IntakeError::validation("database.url", "URL cannot carry a password"))?;
    }

    Ok(SecretString::from(String::from(url)))
}

/// Returns true if the configured database needs a password.
#[must_use]
pub fn requires_password(config: &DatabaseConfig) -> bool {
    Url::parse(&config.url)
        .map(|u| PASSWORD_SCHEMES.contains(&u.scheme().to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Checks the database configuration without connecting.
pub fn check_config(config: &DatabaseConfig, password: Option<SecretString>) -> Result<()> {
    validate_identifier("database.table", &config.table)?;
    connection_url(config, password)?;
    Ok(())
}

impl RecordStore {
    /// Connects to the configured database.
    ///
    /// # Errors
    ///
    /// - `Validation` for a bad table name or URL
    /// - `HardcodedCredential` if the URL embeds a password
    /// - `MissingCredential`/`InsecureCredential` if a password is needed and
    ///   not acceptable
    /// - `Database` if the connection fails
    #[instrument(skip(config, password), fields(table = %config.table))]
    pub async fn connect(config: &DatabaseConfig, password: Option<SecretString>) -> Result<Self> {
        let table = validate_identifier("database.table", &config.table)?;
        let url = connection_url(config, password)?;

        sqlx::any::install_default_drivers();
        let pool = AnyPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .connect(url.expose_secret())
            .await?;
        debug!("Database connection established");

        Ok(Self {
            pool,
            insert_sql: insert_statement(&table),
        })
    }

    /// Inserts `data` and the constant second column in one committed transaction.
    ///
    /// Returns the number of rows inserted.
    #[instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn save(&self, data: &str) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(&self.insert_sql)
            .bind(data)
            .bind(SECOND_COLUMN_VALUE)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        let rows = result.rows_affected();
        info!(rows, "Saved fetched data");
        Ok(rows)
    }

    /// Closes the connection pool.
    pub async fn close(self) {
        self.pool.close().await;
    }
}
