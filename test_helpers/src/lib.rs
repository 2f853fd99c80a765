//! Test helpers shared across crates.
//!
//! The helpers follow the object-mother pattern: [`fixture`] holds canonical
//! payloads, [`mother`] builds outcomes from them, and
//! [`assert`](crate::assert) checks both status flags alongside the payload.

pub mod assert;
pub mod fixture;
pub mod mother;
