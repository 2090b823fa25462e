//! `intranet-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identity, inclusive ranges, errors and culture-aware translations.

pub mod entity;
pub mod error;
pub mod id;
pub mod range;
pub mod translation;
pub mod value_object;

pub use entity::{Identifiable, Identity};
pub use error::{DomainError, DomainResult, require_text};
pub use id::Identifier;
pub use range::Range;
pub use translation::{CultureInfo, Translatable, Translation, TranslationInfo, Translations};
pub use value_object::ValueObject;
