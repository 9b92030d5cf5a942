/*!

Error taxonomy for the credential client.

Every verb either fully succeeds or returns one of these; there is no
retry and no partial-success state. Failures the client does not model
(store unreachable, D-Bus trouble mid-operation) pass through untranslated
as [`Error::Platform`].

*/

/// Errors returned by the credential verbs and by [`Store`](crate::Store)
/// construction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The collection could not be opened or created.
    ///
    /// Covers a store-reported failure while opening, and a configured
    /// collection name that matches nothing.
    #[error("failed to open the collection: {0}")]
    Init(String),

    /// An unlock was required and the target stayed locked afterwards,
    /// which means the user dismissed the prompt.
    #[error("failed to unlock the {0}")]
    KeyringLocked(&'static str),

    /// A delete was requested but no matching item exists.
    #[error("no such password")]
    PasswordDelete,

    /// The configured attribute scheme name is not known.
    #[error("unknown attribute scheme: {0}")]
    UnknownScheme(String),

    /// A stored secret could not be decoded as UTF-8 text.
    #[error("stored secret is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// Any store-level failure this client does not reinterpret.
    #[error(transparent)]
    Platform(#[from] dbus_secret_service::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
