use std::path::PathBuf;

use clap::Subcommand;

/// Mark entry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MarksCommands {
    /// Post marks for one enrollment.
    Set {
        enrollment: String,
        /// Acting teacher or admin.
        #[arg(long)]
        actor: String,
        /// Class assessment marks (0-30).
        #[arg(long = "ca")]
        class_assessment: i64,
        /// Final term marks (0-70).
        #[arg(long = "final")]
        final_term: i64,
    },
    /// Post marks for an offering from a JSON array of entries.
    Import {
        /// Course session id.
        offering: String,
        #[arg(long)]
        actor: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Mark an enrollment as finalized (fees paid).
    Finalize {
        enrollment: String,
        /// Clear the flag instead of setting it.
        #[arg(long)]
        undo: bool,
    },
}
