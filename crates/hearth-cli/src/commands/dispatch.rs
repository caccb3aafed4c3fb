use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Status(args) => commands::status::handle(args, ctx, flags),
        Commands::Rota(args) => commands::rota::handle(args, ctx, flags),
        Commands::PlanComplete(args) => commands::plan::handle_complete(args, ctx, flags),
        Commands::PlanUncomplete(args) => commands::plan::handle_uncomplete(args, flags),
        Commands::Check(args) => commands::check::handle(args, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
