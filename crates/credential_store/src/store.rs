use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::CredentialStoreError;
use crate::paths::{credential_file_name, credential_root};
use crate::schema::CredentialRecord;

/// Durable single-slot storage for the assistant bearer credential.
///
/// Presence of the slot is the sole signal of "previously authenticated";
/// at most one credential exists at a time.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Opens the store rooted under the given home directory.
    ///
    /// No I/O happens until the slot is read or written.
    #[must_use]
    pub fn open_in(home: &Path) -> Self {
        Self {
            path: credential_root(home).join(credential_file_name()),
        }
    }

    /// Opens the store under the current user's home directory.
    pub fn open_default() -> Result<Self, CredentialStoreError> {
        let home = std::env::var_os("HOME").ok_or(CredentialStoreError::MissingHomeDir)?;
        Ok(Self::open_in(Path::new(&home)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored credential, treating every failure as absent.
    ///
    /// An unreadable, malformed, or mis-versioned slot reads as never having
    /// authenticated; callers fall back to the login flow.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.load()
            .ok()
            .flatten()
            .map(|record| record.session_token)
    }

    /// Strict read of the persisted record, surfacing the underlying failure.
    pub fn load(&self) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(CredentialStoreError::io(
                    "reading credential file",
                    &self.path,
                    source,
                ))
            }
        };

        let record: CredentialRecord = serde_json::from_str(&raw)
            .map_err(|source| CredentialStoreError::json_parse(&self.path, source))?;
        validate_record(&self.path, &record)?;
        Ok(Some(record))
    }

    /// Persists the credential, replacing any previously stored one.
    pub fn set(&self, session_token: &str) -> Result<(), CredentialStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| {
                CredentialStoreError::io("creating credential root", parent, source)
            })?;
        }

        let updated_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(CredentialStoreError::ClockFormat)?;
        let record = CredentialRecord::v1(session_token, updated_at);
        let document = serde_json::to_string(&record)
            .map_err(|source| CredentialStoreError::json_serialize(&self.path, source))?;

        fs::write(&self.path, document).map_err(|source| {
            CredentialStoreError::io("writing credential file", &self.path, source)
        })
    }

    /// Deletes the stored credential. A missing file is already success.
    pub fn remove(&self) -> Result<(), CredentialStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CredentialStoreError::io(
                "removing credential file",
                &self.path,
                source,
            )),
        }
    }
}

pub(crate) fn validate_record(
    path: &Path,
    record: &CredentialRecord,
) -> Result<(), CredentialStoreError> {
    if record.version != 1 {
        return Err(CredentialStoreError::UnsupportedVersion {
            path: path.to_path_buf(),
            found: record.version,
        });
    }

    if OffsetDateTime::parse(&record.updated_at, &Rfc3339).is_err() {
        return Err(CredentialStoreError::InvalidTimestamp {
            path: path.to_path_buf(),
            value: record.updated_at.clone(),
        });
    }

    Ok(())
}
