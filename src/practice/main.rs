use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use practice::api::{
    CmdMessage, ConfigAction, FlowerForm, FlowerView, MessageLevel, PracticeApi, PracticePaths,
    ReaderView,
};
use practice::config::CONFIG_KEYS;
use practice::error::{PracticeError, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

const HOME_ENV: &str = "PRACTICE_HOME";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let api = PracticeApi::new(PracticePaths::new(resolve_home()?));

    match cli.command {
        Commands::Newsletter { steps } => handle_newsletter(&api, &steps),
        Commands::Flower {
            name,
            description,
            region,
            ph,
            temperature,
            season,
        } => handle_flower(
            &api,
            FlowerForm {
                name,
                description,
                region,
                ph,
                temperature,
                season,
            },
        ),
        Commands::Config { key, value } => handle_config(&api, key, value),
    }
}

fn resolve_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "pattern-practice", "pattern-practice")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PracticeError::Config("Could not determine data directory".into()))
}

fn handle_newsletter(api: &PracticeApi, steps: &[String]) -> Result<()> {
    let result = api.newsletter(steps)?;
    print_messages(&result.messages);
    print_readers(&result.readers);
    Ok(())
}

fn handle_flower(api: &PracticeApi, form: FlowerForm) -> Result<()> {
    let result = api.flower(&form)?;
    print_messages(&result.messages);
    if let Some(flower) = &result.flower {
        print_flower(flower);
    }
    Ok(())
}

fn handle_config(api: &PracticeApi, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            for key in CONFIG_KEYS {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_readers(readers: &[ReaderView]) {
    for reader in readers {
        println!();
        println!("{}", reader.title.bold());
        println!("Nombre: {}", reader.name);
        let state = if reader.subscribed {
            "Suscrito".green()
        } else {
            "No suscrito".dimmed()
        };
        println!("Estado: {}", state);
        println!("{}", reader.news);
    }
}

fn print_flower(flower: &FlowerView) {
    println!("{}", flower.name.bold());
    println!("Región: {}", flower.region);
    println!("--------------------------------");
    println!("{}", flower.description);
}
