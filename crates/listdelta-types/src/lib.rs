//! Foundation types for the listdelta sequence diff engine.
//!
//! This crate provides the identity contract and the edit-step type shared
//! by the engine and its consumers. Every other listdelta crate depends on
//! `listdelta-types`.
//!
//! # Key Types
//!
//! - [`Diffable`] — The identity + content-equality contract every diffed
//!   item type must implement
//! - [`DiffStep`] — A single edit (insert/delete/move/update) in a diff
//!   result

pub mod diffable;
pub mod step;

pub use diffable::Diffable;
pub use step::DiffStep;
