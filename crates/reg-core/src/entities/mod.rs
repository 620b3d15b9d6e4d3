//! Entity structs for all Registrar domain objects.
//!
//! Each entity maps to a table in the libSQL database (see `reg-db/migrations`).
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! output and schema validation.

mod course;
mod course_session;
mod department;
mod enrollment;
mod user;

pub use course::Course;
pub use course_session::CourseSession;
pub use department::Department;
pub use enrollment::{Enrollment, EnrollmentAttempt, Marks};
pub use user::{Student, User};
