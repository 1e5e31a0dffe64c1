//! TypeX CLI
//!
//! Command-line interface for resolving and querying type inventories

use clap::{Parser, Subcommand};
use typex_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "typex")]
#[command(about = "TypeX - Metadata type system resolution", long_about = None)]
struct Cli {
    /// Emit debug logs to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve an inventory and print type counts
    Resolve(commands::resolve::ResolveArgs),
    /// Print the resolved view of one type
    Show(commands::show::ShowArgs),
    /// Check whether a classification may be attached to an entity type
    Check(commands::check::CheckArgs),
    /// Translate between type names and guids
    Lookup(commands::lookup::LookupArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init(Profile::Development);
    }

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::execute(args),
        Commands::Show(args) => commands::show::execute(args),
        Commands::Check(args) => commands::check::execute(args),
        Commands::Lookup(args) => commands::lookup::execute(args),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
