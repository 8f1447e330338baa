//! Implementation of the `#[derive(Resolvable)]` macro.
//!
//! Generates key path dispatch and key constants from struct fields.

mod attrs;
mod derive;

pub use derive::resolvable_derive_impl;
