mod console;
mod paths;
mod screens;
mod settings;
mod source;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::console::{Console, ConsoleError};
use crate::screens::Screen;
use crate::settings::ConsoleSettings;
use crate::source::JsonSource;

/// Browse chargers and charging sessions a page at a time.
#[derive(Debug, Parser)]
#[command(name = "voltdesk", version, about)]
struct Args {
    /// List to open.
    #[arg(value_enum, default_value_t = Screen::Chargers)]
    screen: Screen,

    /// JSON file with records to serve instead of the bundled sample data.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Records per page, overriding the saved setting.
    #[arg(short = 's', long)]
    page_size: Option<u32>,

    /// Page to open on.
    #[arg(short, long, default_value_t = 1)]
    page: u32,

    /// Print one page and exit.
    #[arg(long)]
    once: bool,
}

fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
        }
        Err(e) => eprintln!("Could not create log file {}: {e}", path.display()),
    }
}

async fn run(args: Args) -> Result<(), ConsoleError> {
    let settings_path = paths::settings_file();
    let mut settings = match &settings_path {
        Some(path) => ConsoleSettings::load(path)?,
        None => ConsoleSettings::default(),
    };
    if let Some(size) = args.page_size {
        settings.page_size = size;
        settings = settings.sanitized();
    }

    let source = match &args.data {
        Some(path) => JsonSource::from_file(path).await?,
        None => JsonSource::from_json_str(args.screen.sample_data())?,
    };
    if source.is_empty() {
        log::warn!("no {:?} records to serve", args.screen);
    } else {
        log::info!("serving {} {:?} records", source.len(), args.screen);
    }

    if args.once {
        return Console::new(source, args.screen, settings)
            .start_page(args.page)
            .run_once()
            .await;
    }

    let source = source.latency(settings.latency());
    Console::new(source, args.screen, settings)
        .settings_path(settings_path)
        .start_page(args.page)
        .run()
        .await
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();
    log::debug!("{args:?}");

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
