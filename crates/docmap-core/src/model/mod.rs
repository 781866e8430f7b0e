//! Declared-model vocabulary.
//!
//! This module contains the *input* side of the compiler: the statically
//! typed description a model supplies about its own fields, as opposed to
//! the resolved mapping in `mapping`.
//!
//! In general:
//! - `model` describes *what was declared*
//! - `mapping` describes *what gets published*
mod attribute;
mod expr;
mod field;

pub use attribute::Attributes;
pub use expr::{ModelRef, TypeExpr};
pub use field::DeclaredField;
