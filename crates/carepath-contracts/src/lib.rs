//! # carepath-contracts
//!
//! Shared value records, schemas, and error types for the CAREPATH decision
//! engine.
//!
//! All crates in the workspace import from here. No decision logic lives in
//! this crate, only data definitions and error types.

pub mod analysis;
pub mod error;
pub mod history;
pub mod imaging;
pub mod patient;
pub mod prescription;
pub mod urgency;
pub mod verify;
