/*!

The credential store and its four verbs.

A [`Store`] is cheap to construct and holds no live connection: every verb
opens its own session with the Secret Service, resolves the collection it
operates on, and drops the session before returning.

*/

use tracing::debug;

use crate::cred::Credential;
use crate::errors::{Error, Result};
use crate::scheme::Scheme;
use crate::service;

/// The `application` attribute stamped on items this client creates.
pub const DEFAULT_APP_ID: &str = "secret-service-credential-client";

/// Configuration accepted by [`Store::with_config`].
///
/// Every field has a default, so `StoreConfig::default()` is a valid
/// configuration and is what [`Store::new`] uses.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Name of the attribute scheme used on items; `default` when unset.
    /// See the [`scheme`](crate::scheme) module for the known names.
    pub scheme: Option<String>,
    /// Label of the collection to use instead of the store's default
    /// collection. The name `default` is interpreted as the default
    /// collection regardless of its label.
    pub collection: Option<String>,
    /// Value of the `application` attribute stamped on created items;
    /// [`DEFAULT_APP_ID`] when unset.
    pub app_id: Option<String>,
}

/// A client for one Secret Service collection.
#[derive(Debug)]
pub struct Store {
    scheme: &'static Scheme,
    collection: Option<String>,
    app_id: String,
}

impl Store {
    /// Creates a store with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(StoreConfig::default())
    }

    /// Creates a store from the given configuration.
    ///
    /// Resolves the attribute scheme and opens a throwaway connection to
    /// confirm the Secret Service daemon is reachable, so an unusable
    /// store surfaces here rather than on the first verb call.
    pub fn with_config(config: StoreConfig) -> Result<Self> {
        let scheme = Scheme::resolve(config.scheme.as_deref().unwrap_or("default"))?;
        service::connect()?;
        Ok(Self {
            scheme,
            collection: config.collection,
            app_id: config.app_id.unwrap_or_else(|| DEFAULT_APP_ID.to_string()),
        })
    }

    /// Gets the password of the username for the service.
    ///
    /// With no username, this is the password of the first item the store
    /// returns for the service, whatever its identity. `Ok(None)` when
    /// nothing matches.
    pub fn get_password(&self, service: &str, username: Option<&str>) -> Result<Option<String>> {
        debug!(service, "get_password");
        let ss = service::connect()?;
        let collection = service::resolve_collection(&ss, self.collection.as_deref())?;
        let query = self.scheme.search_attributes(service, username);
        let Some(item) = collection.search_items(query)?.into_iter().next() else {
            return Ok(None);
        };
        service::unlock(&item, "item")?;
        let secret = item.get_secret()?;
        Ok(Some(String::from_utf8(secret)?))
    }

    /// Sets the password for the username of the service.
    ///
    /// Creates the item, or replaces the one already carrying these
    /// attributes; existing items are not searched or unlocked first.
    pub fn set_password(&self, service: &str, username: &str, password: &str) -> Result<()> {
        debug!(service, username, "set_password");
        let ss = service::connect()?;
        let collection = service::resolve_collection(&ss, self.collection.as_deref())?;
        let mut attributes = self.scheme.search_attributes(service, Some(username));
        attributes.insert("application", &self.app_id);
        let label = format!("Password for '{username}' on '{service}'");
        collection.create_item(&label, attributes, password.as_bytes(), true, "text/plain")?;
        Ok(())
    }

    /// Deletes the stored password, first match only.
    ///
    /// Any further items matching the same query are left untouched.
    /// Fails with [`Error::PasswordDelete`] when nothing matches.
    pub fn delete_password(&self, service: &str, username: Option<&str>) -> Result<()> {
        debug!(service, "delete_password");
        let ss = service::connect()?;
        let collection = service::resolve_collection(&ss, self.collection.as_deref())?;
        let query = self.scheme.search_attributes(service, username);
        match collection.search_items(query)?.into_iter().next() {
            Some(item) => Ok(item.delete()?),
            None => Err(Error::PasswordDelete),
        }
    }

    /// Gets the first username and password stored for the service.
    ///
    /// The username in the returned credential is read from the item's
    /// stored attribute, which is authoritative even when a username was
    /// supplied to the search. `Ok(None)` when nothing matches.
    pub fn get_credential(
        &self,
        service: &str,
        username: Option<&str>,
    ) -> Result<Option<Credential>> {
        debug!(service, "get_credential");
        let ss = service::connect()?;
        let collection = service::resolve_collection(&ss, self.collection.as_deref())?;
        let query = self.scheme.search_attributes(service, username);
        let Some(item) = collection.search_items(query)?.into_iter().next() else {
            return Ok(None);
        };
        service::unlock(&item, "item")?;
        let username = item.get_attributes()?.get(self.scheme.username).cloned();
        let secret = String::from_utf8(item.get_secret()?)?;
        Ok(Some(Credential { username, secret }))
    }
}
