//! # Evidence Check
//!
//! Validates a checklist-style text report: every required section heading
//! must be present and every required checklist item must be ticked.
//! This crate is independent of the entity pool crates.

pub mod checker;
pub mod rules;

pub use checker::*;
pub use rules::*;
