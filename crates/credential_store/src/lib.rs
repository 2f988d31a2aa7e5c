mod error;
mod paths;
mod schema;
mod store;

pub use error::CredentialStoreError;
pub use paths::{credential_file_name, credential_root, CREDENTIAL_DIR};
pub use schema::{CredentialRecord, CredentialRecordType};
pub use store::CredentialStore;
