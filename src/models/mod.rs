//! Credential data model: byte-level value objects and their rendered forms.

pub mod credentials;

pub use credentials::{
    CredentialSet, DevAddr, FirmwareBlock, RenderedCredential, RenderedCredentialSet, SessionKey,
};
