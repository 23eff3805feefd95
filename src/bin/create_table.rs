//! DragonDB table creator - make a new creature table under a name read at runtime

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use dragondb::config::load_config;
use dragondb::{commands, logging, ui};

#[derive(Parser)]
#[command(name = "dragondb-create-table")]
#[command(version)]
#[command(about = "Create a table (id, name, power_level, is_mythical) with a name you choose")]
struct Cli {
    /// Table name; prompted for on stdin when omitted
    name: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to the database file [default: dragon.db]
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Path to the config file [default: dragondb.toml]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only accept letters, digits and underscores (not starting with a digit)
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut stdout = std::io::stdout();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            let _ = ui::error(&mut stdout, &e.to_string());
            return ExitCode::FAILURE;
        }
    };
    let database = config.database_path(cli.database.as_deref());
    let policy = config.identifier_policy(cli.strict);
    tracing::debug!("Database {}, {} table names", database.display(), policy.as_str());

    let mut stdin = std::io::stdin().lock();
    match commands::run_create_table(&mut stdin, &mut stdout, &database, cli.name, policy) {
        Ok(outcome) => {
            tracing::debug!("Table creation finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let _ = ui::error(&mut stdout, &format!("Could not create table: {}", e));
            ExitCode::FAILURE
        }
    }
}
