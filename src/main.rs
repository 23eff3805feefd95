//! DragonDB CLI - seed, report and edit the dragons table

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use dragondb::config::load_config;
use dragondb::report::ReportFormat;
use dragondb::{commands, logging, ui};

#[derive(Parser)]
#[command(name = "dragondb")]
#[command(version)]
#[command(about = "Seed, report and edit the dragons table in a local SQLite file")]
#[command(long_about = r#"
Runs a fixed sequence against a single-file database:
  0. create the dragons table and seed it if empty
  1-2. print the field names and every row
  3. change one dragon's color
  4. print the data again

Example usage:
  dragondb
  dragondb --database lair.db --target Terra --color Ochre
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to the database file [default: dragon.db]
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Path to the config file [default: dragondb.toml]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Name of the dragon whose color is changed
    #[arg(short, long, default_value = "Ignis")]
    target: String,

    /// New color for the target dragon
    #[arg(long, default_value = "Crimson")]
    color: String,

    /// Report format (plain, table, json) [default: plain]
    #[arg(short, long)]
    format: Option<ReportFormat>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut stdout = std::io::stdout();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            let _ = ui::fatal(&mut stdout, &format!("FATAL ERROR: {}", e));
            return ExitCode::FAILURE;
        }
    };
    let database = config.database_path(cli.database.as_deref());
    let format = config.report_format(cli.format);
    tracing::debug!("Database {}, {} report", database.display(), format);

    match commands::run_demo(&mut stdout, &database, &cli.target, &cli.color, format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Run against {} aborted: {:?}", database.display(), e);
            let _ = commands::report_fatal(&mut stdout, &database, &e);
            ExitCode::FAILURE
        }
    }
}
