//! Account credentials for request signing.

use crate::error::ConfigurationError;
use serde::Deserialize;
use std::path::Path;

/// Shared-secret credentials identifying the service account.
///
/// Constructed explicitly by the caller and passed by reference to client
/// constructors; read-only to every client component. There is no hidden
/// global credential state.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    access_key: String,
    secret_key: String,
    account_id: String,
}

impl Credentials {
    /// Construct credentials from their three parts
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            account_id: account_id.into(),
        }
    }

    /// Load credentials from a TOML file.
    ///
    /// The file must define `access_key`, `secret_key`, and `account_id`
    /// string keys. A missing or unreadable file is fatal to client
    /// construction.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Parsing`] when the file cannot be read
    /// or any key is missing or of the wrong type.
    pub fn from_file(path: &Path) -> Result<Self, ConfigurationError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .build()
            .map_err(|e| ConfigurationError::Parsing {
                message: e.to_string(),
            })?;

        settings
            .try_deserialize()
            .map_err(|e| ConfigurationError::Parsing {
                message: e.to_string(),
            })
    }

    /// Get the access key identifying the account
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Get the shared secret used to sign requests
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Get the numeric account identifier
    pub fn account_id(&self) -> &str {
        &self.account_id
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<REDACTED>")
            .field("account_id", &self.account_id)
            .finish()
    }
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;
