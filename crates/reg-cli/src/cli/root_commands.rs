use std::path::PathBuf;

use clap::{ArgGroup, Args, Subcommand};

use crate::cli::subcommands::{
    CourseCommands, MarksCommands, ResultCommands, RosterCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Import departments, users, courses and offerings from a JSON document.
    Import(ImportArgs),
    /// Check whether a student may enroll in an offering.
    Eligibility(EligibilityArgs),
    /// Enroll a student in an offering, or in the latest offering of a course.
    Enroll(EnrollArgs),
    /// Offering rosters.
    Roster {
        #[command(subcommand)]
        action: RosterCommands,
    },
    /// Mark entry.
    Marks {
        #[command(subcommand)]
        action: MarksCommands,
    },
    /// Best results and semester reports.
    Result {
        #[command(subcommand)]
        action: ResultCommands,
    },
    /// A student's enrollments with re-enrollment flags.
    Overview(OverviewArgs),
    /// Look up the grade band of a total.
    Grade(GradeArgs),
    /// Users.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Catalog courses and their offerings.
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// Path to the catalog JSON document.
    pub file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct EligibilityArgs {
    #[arg(long)]
    pub student: String,
    /// Course session id.
    #[arg(long)]
    pub offering: String,
}

#[derive(Clone, Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).args(["offering", "course"])))]
pub struct EnrollArgs {
    #[arg(long)]
    pub student: String,
    /// Course session id.
    #[arg(long)]
    pub offering: Option<String>,
    /// Course id; enrolls in its latest offering.
    #[arg(long)]
    pub course: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct OverviewArgs {
    #[arg(long)]
    pub student: String,
}

#[derive(Clone, Debug, Args)]
pub struct GradeArgs {
    /// Total marks (class assessment + final term).
    #[arg(allow_negative_numbers = true)]
    pub total: i64,
}
