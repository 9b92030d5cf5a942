/*!

Secret Service access.

This module owns the interaction protocol with the store: opening a
connection, resolving the collection the verbs operate on, and the unlock
handshake shared by collections and items. Each verb opens its own
connection and drops it on return, so the underlying session is released
exactly once on every exit path.

*/

#[cfg(not(any(feature = "crypto-rust", feature = "crypto-openssl")))]
compile_error!("You must enable one of the features crypto-rust or crypto-openssl");

use dbus_secret_service::{Collection, EncryptionType, Item, SecretService};
use tracing::debug;

use crate::errors::{Error, Result};

/// Opens a fresh session with the Secret Service daemon.
pub(crate) fn connect() -> Result<SecretService> {
    Ok(SecretService::connect(EncryptionType::Dh)?)
}

/// Resolves the collection the verbs operate on.
///
/// With no target configured, this is the store's default collection.
/// Otherwise it is the collection labeled with the target name, except
/// that the name `default` always means the default collection regardless
/// of its label. A locked collection is put through the unlock handshake
/// before it is handed out.
/// Whether a configured collection name means the default collection.
///
/// The match is exact: a collection genuinely labeled `Default` is still
/// addressable by its label.
pub(crate) fn is_default_name(name: &str) -> bool {
    name.eq("default")
}

pub(crate) fn resolve_collection<'a>(
    ss: &'a SecretService,
    target: Option<&str>,
) -> Result<Collection<'a>> {
    let collection = match target {
        Some(name) if !is_default_name(name) => {
            let all = ss
                .get_all_collections()
                .map_err(|e| Error::Init(e.to_string()))?;
            all.into_iter()
                .find(|c| c.get_label().map(|l| l.eq(name)).unwrap_or(false))
                .ok_or_else(|| Error::Init(format!("no collection labeled '{name}'")))?
        }
        _ => ss
            .get_default_collection()
            .map_err(|e| Error::Init(e.to_string()))?,
    };
    if collection.is_locked()? {
        debug!("collection is locked, requesting unlock");
        unlock(&collection, "collection")?;
    }
    Ok(collection)
}

/// Something the store can hold locked: a collection or an item.
///
/// `try_unlock` defaults to a no-op for targets that expose no unlock
/// capability of their own; those rely on the store having unlocked them
/// already, which the follow-up `is_locked` check verifies.
pub(crate) trait Lockable {
    fn is_locked(&self) -> std::result::Result<bool, dbus_secret_service::Error>;

    fn try_unlock(&self) -> std::result::Result<(), dbus_secret_service::Error> {
        Ok(())
    }
}

impl Lockable for Collection<'_> {
    fn is_locked(&self) -> std::result::Result<bool, dbus_secret_service::Error> {
        Collection::is_locked(self)
    }

    fn try_unlock(&self) -> std::result::Result<(), dbus_secret_service::Error> {
        Collection::unlock(self)
    }
}

impl Lockable for Item<'_> {
    fn is_locked(&self) -> std::result::Result<bool, dbus_secret_service::Error> {
        Item::is_locked(self)
    }

    fn try_unlock(&self) -> std::result::Result<(), dbus_secret_service::Error> {
        Item::ensure_unlocked(self)
    }
}

/// Runs the unlock handshake on a collection or item.
///
/// The unlock call may block while the store prompts the user. A target
/// that is still locked afterwards means the user dismissed the prompt,
/// which is reported as [`Error::KeyringLocked`] rather than silently
/// proceeding against a locked target.
pub(crate) fn unlock(target: &impl Lockable, kind: &'static str) -> Result<()> {
    target.try_unlock()?;
    if target.is_locked()? {
        return Err(Error::KeyringLocked(kind));
    }
    Ok(())
}
