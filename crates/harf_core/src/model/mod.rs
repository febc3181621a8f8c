//! Structured Arabic text model.
//!
//! # Responsibility
//! - Define letter and mark identities as closed enums.
//! - Hold immutable `Text` values produced by `TextBuilder` or decoding.
//!
//! # Invariants
//! - Every `Letter` holds at most one mark per `MarkGroup`.
//! - `Text` is never mutated after construction.

pub mod letter;
pub mod text;
