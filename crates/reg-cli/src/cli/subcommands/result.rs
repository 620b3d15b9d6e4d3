use clap::Subcommand;

/// Result commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ResultCommands {
    /// Best attempt of a student at one course.
    Course {
        #[arg(long)]
        student: String,
        #[arg(long)]
        course: String,
    },
    /// Per-course results and CGPA for one year and semester.
    Semester {
        #[arg(long)]
        student: String,
        #[arg(long)]
        year: u32,
        #[arg(long)]
        semester: u32,
    },
}
