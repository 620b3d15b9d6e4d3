use clap::Subcommand;

/// Roster commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RosterCommands {
    /// Enroll the offering's whole student cohort.
    Create {
        /// Course session id.
        offering: String,
    },
    /// List enrollments of an offering.
    List {
        /// Course session id.
        offering: String,
        /// Acting teacher or admin.
        #[arg(long)]
        actor: String,
    },
}
