pub mod secure_credential;

pub use secure_credential::SecureCredential;
