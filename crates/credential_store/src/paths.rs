use std::path::{Path, PathBuf};

pub const CREDENTIAL_DIR: &str = ".farha";

#[must_use]
pub fn credential_root(home: &Path) -> PathBuf {
    home.join(CREDENTIAL_DIR)
}

#[must_use]
pub fn credential_file_name() -> &'static str {
    "credential.json"
}
