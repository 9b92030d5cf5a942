/*!

The credential value returned by reads.

*/

/// A username/secret pair read back from the store.
///
/// Constructed per call and discarded after use; it holds no connection
/// to the store. The username is the attribute actually stored on the
/// item, so it can differ from the username a caller searched with, and
/// it is absent when the item carries no username attribute at all.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: Option<String>,
    pub secret: String,
}

impl std::fmt::Debug for Credential {
    // Keeps the secret out of logs and panic messages.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}
