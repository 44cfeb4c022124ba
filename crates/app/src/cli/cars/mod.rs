use clap::{Args, Subcommand};

mod list;
mod seed;

#[derive(Debug, Args)]
pub(crate) struct CarsCommand {
    #[command(subcommand)]
    command: CarsSubcommand,
}

#[derive(Debug, Subcommand)]
enum CarsSubcommand {
    /// Load a car fixture set into the database
    Seed(seed::SeedArgs),

    /// Show a catalog page
    List(list::ListArgs),
}

pub(crate) async fn run(command: CarsCommand) -> Result<(), String> {
    match command.command {
        CarsSubcommand::Seed(args) => seed::run(args).await,
        CarsSubcommand::List(args) => list::run(args).await,
    }
}
