//! Enrollment engine operations wired to the store.
//!
//! The rules live in `reg-core`; these `impl RegService` blocks fetch exactly
//! the rows each rule needs and persist the outcome.

pub mod eligibility;
pub mod marks;
pub mod results;
pub mod roster;
