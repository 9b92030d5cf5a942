/*!

Attribute schemes.

Different tools that write to the Secret Service store the service and
username under different attribute key names. A scheme names that pair of
keys; the store consults it both when building search queries and when
reading a username back off a found item.

*/

use std::collections::HashMap;

use crate::errors::{Error, Result};

/// The attribute keys under which a backend stores the service name and
/// the username.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheme {
    pub username: &'static str,
    pub service: &'static str,
}

/// Plain `username`/`service` attributes.
pub const DEFAULT: Scheme = Scheme {
    username: "username",
    service: "service",
};

/// The attribute naming used by KeepassXC's Secret Service integration.
pub const KEEPASS_XC: Scheme = Scheme {
    username: "UserName",
    service: "Title",
};

impl Scheme {
    /// Looks up a scheme by its configured name.
    pub fn resolve(name: &str) -> Result<&'static Scheme> {
        match name {
            "default" => Ok(&DEFAULT),
            "KeepassXC" => Ok(&KEEPASS_XC),
            other => Err(Error::UnknownScheme(other.to_string())),
        }
    }

    /// Builds the attribute map used to search for a credential.
    ///
    /// A missing or empty username is left out of the map entirely: it
    /// means "any identity for this service", not "the empty identity".
    pub(crate) fn search_attributes<'a>(
        &self,
        service: &'a str,
        username: Option<&'a str>,
    ) -> HashMap<&'a str, &'a str> {
        match username.filter(|u| !u.is_empty()) {
            Some(username) => {
                HashMap::from([(self.service, service), (self.username, username)])
            }
            None => HashMap::from([(self.service, service)]),
        }
    }
}
