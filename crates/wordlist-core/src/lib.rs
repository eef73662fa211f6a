//! Shared types and validation rules for wordlist curation.
//!
//! - [`character`] -- Letter classes used by the validity rules
//! - [`word`] -- Normalization and the canonical-word validator
//! - [`enums`] -- Parts of speech and classification buckets
//! - [`score`] -- Per-word score record and rounding

pub mod character;
pub mod enums;
pub mod score;
pub mod word;
