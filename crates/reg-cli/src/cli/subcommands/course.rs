use clap::Subcommand;

/// Catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CourseCommands {
    /// List catalog courses of one year and semester.
    List {
        #[arg(long)]
        year: u32,
        #[arg(long)]
        semester: u32,
    },
    /// List offerings of a course, latest first.
    Offerings { course: String },
    /// Set the teacher who owns an offering; omit `--teacher` to clear it.
    AssignTeacher {
        /// Course session id.
        offering: String,
        #[arg(long)]
        teacher: Option<String>,
    },
}
