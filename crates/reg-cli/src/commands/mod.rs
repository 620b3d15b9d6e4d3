pub mod course;
pub mod dispatch;
pub mod eligibility;
pub mod enroll;
pub mod grade;
pub mod import;
pub mod marks;
pub mod overview;
pub mod result;
pub mod roster;
pub mod shared;
pub mod user;
