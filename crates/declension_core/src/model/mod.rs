//! Declension domain model.
//!
//! # Responsibility
//! - Define the closed case set and the total per-case result shape.
//!
//! # Invariants
//! - The case set is fixed at compile time.
//! - A result always carries one form per case, non-empty for non-empty input.

pub mod case;
pub mod inflection;
