pub mod course;
pub mod marks;
pub mod result;
pub mod roster;
pub mod user;

pub use course::CourseCommands;
pub use marks::MarksCommands;
pub use result::ResultCommands;
pub use roster::RosterCommands;
pub use user::UserCommands;
