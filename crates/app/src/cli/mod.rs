use clap::{Parser, Subcommand};

mod cars;
mod db;

#[derive(Debug, Parser)]
#[command(name = "forecourt-app", about = "Forecourt CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Cars(cars::CarsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Cars(command) => cars::run(command).await,
        }
    }
}
