//! Repository modules implementing storage operations for all Registrar entities.
//!
//! Each module adds methods to `RegService` via `impl RegService` blocks.

pub mod course;
pub mod course_session;
pub mod department;
pub mod enrollment;
pub mod user;
