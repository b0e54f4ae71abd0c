//! cookieshift — convert cookie files between browser automation and cookie
//! jar shapes.

use std::path::{Path, PathBuf};

use cookieshift_core::CookieShiftConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod run;

use run::Direction;

fn load_config() -> cookieshift_core::Result<CookieShiftConfig> {
    match std::env::var("COOKIESHIFT_CONFIG") {
        Ok(path) => CookieShiftConfig::load(Path::new(&path)),
        Err(_) => CookieShiftConfig::from_env(),
    }
}

fn print_usage() {
    println!("cookieshift — convert cookies between browser and cookie jar shapes");
    println!();
    println!("Usage: cookieshift <command> [file]");
    println!();
    println!("Commands:");
    println!("  to-jar [file]        Browser cookies (JSON) to jar cookies");
    println!("  to-browser [file]    Jar cookies (JSON) to browser cookies");
    println!("  help                 Show this help message");
    println!();
    println!("Reads stdin when no file is given.");
}

fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    // Logs go to stderr; stdout carries the converted document.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        std::process::exit(1);
    };

    let direction = match command.as_str() {
        "--help" | "-h" | "help" => {
            print_usage();
            return Ok(());
        }
        other => match Direction::from_command(other) {
            Some(direction) => direction,
            None => {
                eprintln!("Unknown command: {}. Use 'cookieshift help' for usage.", other);
                std::process::exit(1);
            }
        },
    };

    let path = args.get(2).map(PathBuf::from);
    debug!("Converting {:?} from {:?}", direction, path);

    let input = run::read_input(path.as_deref())?;
    let output = run::convert(direction, &input, config.pretty)?;
    println!("{}", output);

    Ok(())
}
