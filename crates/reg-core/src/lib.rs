//! # reg-core
//!
//! Core types, grading rules, and enrollment eligibility for Registrar.
//!
//! This crate holds everything that does not touch storage:
//! - Entity structs for departments, users, courses, course sessions and enrollments
//! - Role and letter-grade enums
//! - ID prefix constants
//! - The static grade table and mark-to-grade lookup
//! - The re-enrollment eligibility decision (retake / improvement)
//! - Best-attempt selection and semester CGPA aggregation
//! - Mark-entry authorization policy
//! - Response types returned by the `regr` CLI
//! - Domain error types

pub mod eligibility;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod grading;
pub mod ids;
pub mod policy;
pub mod responses;
pub mod results;
