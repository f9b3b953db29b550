//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `movement`: Movement records, movement kinds and CSV operation records
//! - `error`: Error types for the wallet engine

pub mod error;
pub mod movement;

pub use error::WalletError;
pub use movement::{Movement, MovementKind, OperationRecord};
