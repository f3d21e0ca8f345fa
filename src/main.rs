//! Userdb CLI - Interactive user record manager

use clap::Parser;
use std::io;
use std::path::PathBuf;
use userdb::{config, ui};
use userdb::{Menu, UserStore};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "userdb")]
#[command(version)]
#[command(about = "Interactive user record manager backed by SQLite")]
#[command(long_about = r#"
Userdb keeps a table of users (id, name, age) in a SQLite file and lets you
create, list, update and delete them from a numbered menu.

Example usage:
  userdb
  userdb --database ./data/users.db
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (overrides the config file)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let loaded = config::load_config(cli.config.as_deref())?;
    let database = config::resolve_database_path(cli.database, loaded.as_ref());
    config::ensure_db_dir(&database)?;

    ui::header(&mut io::stdout(), &format!("User database: {}", database.display()))?;
    let store = UserStore::open(&database)?;

    let result = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Menu::new(&store, stdin.lock(), stdout.lock()).run()
    };

    let closed = store.close();
    if closed.is_ok() {
        println!("Database connection closed.");
    }

    session_outcome(result, closed)
}

/// Fold the menu result and the close result so neither failure is dropped.
fn session_outcome(run: userdb::Result<()>, closed: userdb::Result<()>) -> anyhow::Result<()> {
    match (run, closed) {
        (Ok(()), Ok(())) => Ok(()),
        (Ok(()), Err(close_err)) => Err(close_err.into()),
        (Err(run_err), Ok(())) => Err(run_err.into()),
        (Err(run_err), Err(close_err)) => Err(anyhow::Error::new(run_err)
            .context(format!("failed to close the database ({})", close_err))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userdb::Error;

    #[test]
    fn test_session_outcome_clean() {
        assert!(session_outcome(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_session_outcome_keeps_single_failure() {
        let err = session_outcome(Err(Error::InvalidInput("'abc' is not a whole number".into())), Ok(()))
            .unwrap_err();
        assert!(err.to_string().contains("'abc' is not a whole number"));

        let err = session_outcome(Ok(()), Err(Error::InvalidInput("disk gone".into()))).unwrap_err();
        assert!(err.to_string().contains("disk gone"));
    }

    #[test]
    fn test_session_outcome_reports_both_failures() {
        let run = Err(Error::InvalidInput("'abc' is not a whole number".into()));
        let closed = Err(Error::Io(io::Error::other("disk gone")));

        let report = format!("{:#}", session_outcome(run, closed).unwrap_err());
        assert!(report.contains("failed to close the database"));
        assert!(report.contains("disk gone"));
        assert!(report.contains("'abc' is not a whole number"));
    }
}
