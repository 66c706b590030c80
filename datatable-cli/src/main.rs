mod cli;
mod command;
mod paths;

use std::fs::File;
use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use datatable_lib::error::FetchError;
use datatable_lib::source::{DataSource, FileSource, HttpSource, load};
use datatable_lib::{TableEngine, TableView};
use log::{debug, info};
use simplelog::{Config, WriteLogger};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

use cli::Args;
use command::{Command, HELP};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Table(#[from] datatable_lib::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("no log directory available, pass --log-file")]
    NoLogDir,
}

fn init_logging(args: &Args) -> Result<(), AppError> {
    let path = match &args.log_file {
        Some(path) => path.clone(),
        None => paths::prepare_log_file(&paths::log_dir().ok_or(AppError::NoLogDir)?)?,
    };
    WriteLogger::init(args.log_level, Config::default(), File::create(&path)?)?;
    info!("Logging to {}", path.display());
    Ok(())
}

fn source(args: &Args) -> Box<dyn DataSource> {
    match &args.file {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(HttpSource::new(&args.url).with_timeout(args.timeout())),
    }
}

fn show(engine: &TableEngine) -> Result<(), AppError> {
    println!("{}", TableView::new(engine)?.to_text());
    Ok(())
}

/// What to tell the user after a failed load.
fn failure_hint(err: &FetchError) -> &'static str {
    if err.is_retryable() {
        "The source may recover, type 'reload' to try again."
    } else {
        "Retrying will not help until the source is fixed."
    }
}

/// Loads `source` and shows the table. A failure is already shown in the
/// table itself, so it only adds a hint.
async fn reload(
    engine: &mut TableEngine,
    source: &dyn DataSource,
    ready_delay: Duration,
) -> Result<(), AppError> {
    let outcome = load(engine, source, ready_delay).await;
    show(engine)?;
    if let Err(e) = outcome {
        debug!("Load failed: {}", e);
        println!("{}", failure_hint(&e));
    }
    Ok(())
}

async fn run(args: Args) -> Result<(), AppError> {
    let config = args.table_config();
    let mut engine = TableEngine::new(args.columns(), config.clone());
    if let Some(page) = args.page {
        engine = engine.with_initial_page(page);
    }
    if let Some(search) = &args.search {
        engine = engine.with_initial_search(search.clone());
    }

    let source = source(&args);
    show(&engine)?;
    reload(&mut engine, source.as_ref(), config.ready_delay).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        debug!("Command: {:?}", command);

        match command {
            Command::Table(action) => {
                if engine.dispatch(action) {
                    show(&engine)?;
                } else {
                    println!("Nothing to do.");
                }
            }
            Command::Export => println!("{}", engine.export_json()?),
            Command::Reload => {
                reload(&mut engine, source.as_ref(), config.ready_delay).await?;
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }

    info!("Exiting");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = init_logging(&args) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_hint_follows_retryability() {
        let unavailable = FetchError::http(503, "Service Unavailable");
        assert!(failure_hint(&unavailable).contains("reload"));

        let missing = FetchError::Io {
            path: "products.json".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(!failure_hint(&missing).contains("reload"));
    }
}
