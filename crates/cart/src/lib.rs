//! Cart domain module.
//!
//! The [`CartStore`] is the one mutable piece of the storefront core: it
//! owns the session's cart entries, resolves product ids against the
//! current catalog, and fires change hooks after every mutation so an
//! external view layer can re-render. Everything derived (item count,
//! total) is recomputed from the entries on every query.

pub mod hooks;
pub mod store;

pub use hooks::ChangeHooks;
pub use store::{CartEntry, CartStore, CartSummary};
