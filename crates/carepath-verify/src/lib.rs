//! # carepath-verify
//!
//! Result verification for CAREPATH.
//!
//! This crate provides [`engine::SchemaVerifier`], which implements the
//! [`carepath_core::traits::ResultVerifier`] trait. It checks the JSON form
//! of an engine result in two phases:
//!
//! 1. **Structural**: JSON Schema validation via the `jsonschema` crate.
//! 2. **Domain**: `RequiredField`, `AllowedValues`, `IntegerRange`,
//!    `MaxItems` and `Custom` rules evaluated against the result.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use carepath_verify::engine::SchemaVerifier;
//!
//! let mut verifier = SchemaVerifier::new();
//! verifier.register_rule("no-empty-recommendations", Box::new(|result| {
//!     match result.get("recommendations").and_then(|v| v.as_array()) {
//!         Some(items) if !items.is_empty() => None,
//!         _ => Some("recommendations must not be empty".to_string()),
//!     }
//! }));
//! ```

pub mod engine;

pub use engine::{CustomVerifierFn, SchemaVerifier};
