use clap::Subcommand;

/// User commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users.
    List {
        /// student, teacher, admin or super_admin
        #[arg(long)]
        role: Option<String>,
    },
    /// Get a user by ID.
    Get { id: String },
}
