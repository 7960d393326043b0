//! Domain types and pure logic for the Heptapus Group site backend.
//!
//! Nothing in this crate touches the database or the network; the `db` and
//! `api` crates build on top of it.

pub mod careers;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod pagination;
pub mod roles;
pub mod slug;
pub mod subdomain;
pub mod types;
