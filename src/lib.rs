/*!

# Secret Service credential client

This crate is a small client for the freedesktop.org Secret Service: it
stores, retrieves, and deletes named passwords in a collection managed by
the system's secret-management daemon (GNOME Keyring, KWallet, and
friends), reached via the
[dbus-secret-service crate](https://crates.io/crates/dbus-secret-service).

## Verbs

A [`Store`] exposes four operations, all synchronous and blocking:

- [`get_password`](Store::get_password) — the secret for a
  (service, username) pair, or `None`.
- [`set_password`](Store::set_password) — create or replace the item for
  a (service, username) pair.
- [`delete_password`](Store::delete_password) — delete the first item
  matching a (service, username) pair.
- [`get_credential`](Store::get_credential) — the first matching item's
  stored username and secret together, as a [`Credential`].

The read and delete verbs take the username as an `Option`: a missing
username matches any identity stored for the service, and the first item
the store returns wins. The store may legitimately hold several items for
one logical credential (repeated writes from different tools, say); these
verbs make no attempt to reconcile duplicates and are deterministic only
in terms of the store's own return order.

## Attributes and schemes

Items are matched by attribute. Which attribute keys hold the service and
username depends on the tool that wrote the item: this client's `default`
scheme uses `service`/`username`, and the `KeepassXC` scheme matches the
naming used by KeepassXC's Secret Service integration. The scheme, the
collection to use, and the `application` attribute stamped on created
items are all chosen once, at [`Store`] construction, via [`StoreConfig`].

## Locking

Collections and items can be locked; unlocking is user-mediated and may
block an operation for as long as the store's prompt stays on screen. A
prompt the user dismisses leaves the target locked, and every verb
reports that as [`Error::KeyringLocked`] rather than proceeding.

## Headless usage

If you must use the secret-service on a headless linux box, be aware that
there are known issues with getting dbus and secret-service and the gnome
keyring to work properly in headless environments. The following `bash`
function may be helpful:

```shell
function unlock-keyring ()
{
    read -rsp "Password: " pass
    echo -n "$pass" | gnome-keyring-daemon --unlock
    unset pass
}
```

For an excellent treatment of all the headless dbus issues, see
[this answer on ServerFault](https://serverfault.com/a/906224/79617).

 */

pub mod cred;
pub mod errors;
pub mod scheme;
mod service;
pub mod store;

pub use cred::Credential;
pub use errors::{Error, Result};
pub use store::{Store, StoreConfig};
