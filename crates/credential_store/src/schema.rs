use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialRecordType {
    Credential,
}

/// On-disk shape of the single credential slot.
///
/// One JSON document per file; writing replaces the previous record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialRecord {
    #[serde(rename = "type")]
    pub record_type: CredentialRecordType,
    pub version: u32,
    pub session_token: String,
    pub updated_at: String,
}

impl CredentialRecord {
    #[must_use]
    pub fn v1(session_token: impl Into<String>, updated_at: impl Into<String>) -> Self {
        Self {
            record_type: CredentialRecordType::Credential,
            version: 1,
            session_token: session_token.into(),
            updated_at: updated_at.into(),
        }
    }
}
