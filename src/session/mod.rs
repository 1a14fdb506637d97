//! Session identifier lifecycle.
//!
//! The identifier is resolved once at startup from a [`SessionStore`] and
//! then passed explicitly to everything that talks to the backend.

mod id;
mod store;

pub use id::SessionId;
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
