use clap::{Parser, Subcommand};
use log::{error, info};
use quotegen::configuration::{Config, ConfigOverrides};
use quotegen::controller::{Controller, QuoteView};
use quotegen::error_handling::types::ControllerError;
use quotegen::sync::MockServer;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quotegen")]
#[command(version)]
#[command(about = "A dynamic quote generator with categories, import/export and server sync")]
struct Args {
    /// TOML configuration file
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: ConfigOverrides,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show a random quote from the selected category (default)
    Show,
    /// Show the last quote displayed in this session
    Last,
    /// Add a new quote
    Add {
        text: String,
        #[arg(long, short = 'k')]
        category: String,
        #[arg(long, short = 'a')]
        author: Option<String>,
    },
    /// List the quotes in the selected category
    List,
    /// List categories, marking the selected one
    Categories,
    /// Select a category, `all` to clear; prints the current one when omitted
    Filter { category: Option<String> },
    /// Export all quotes to a JSON file
    Export {
        #[arg(default_value = "quotes.json")]
        path: PathBuf,
    },
    /// Import quotes from a JSON file
    Import { path: PathBuf },
    /// Pull quotes from the (mock) server
    Sync,
    /// Show quote and category counts
    Stats,
    /// Drop all quotes and restore the built-in set
    Reset,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_target(false)
        .init();

    let args = Args::parse();

    let config = match args.config {
        Some(ref path) => Config::from_file(path).unwrap_or_else(|e| {
            error!("Unable to import configuration from {}: {}", path.display(), e);
            std::process::exit(1);
        }),
        None => Config::default(),
    };
    let config = config.with_overrides(&args.overrides).unwrap_or_else(|e| {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    });
    info!("Configuration imported successfully");

    let mut controller = Controller::new(config).unwrap_or_else(|e| {
        error!("Unable to create a controller instance: {}, exiting...", e);
        std::process::exit(1);
    });

    let command = args.command.unwrap_or(Command::Show);
    if let Err(e) = run(&mut controller, command).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(controller: &mut Controller, command: Command) -> Result<(), ControllerError> {
    match command {
        Command::Show => match controller.show_quote()? {
            QuoteView::Quote(quote) => println!("{}", quote),
            QuoteView::NoQuotesAvailable => println!("No quotes available. Add some quotes to get started!"),
            QuoteView::NoQuotesInCategory(category) => {
                println!("No quotes found in \"{}\" category.", category)
            }
        },
        Command::Last => match controller.last_quote() {
            Some(quote) => println!("{}", quote),
            None => println!("No quote shown yet in this session."),
        },
        Command::Add {
            text,
            category,
            author,
        } => {
            let quote = controller.add_quote(&text, &category, author.as_deref())?;
            println!("Quote added successfully: {}", quote);
        }
        Command::List => {
            for quote in controller.list() {
                println!("{}", quote);
            }
        }
        Command::Categories => {
            let selected = controller.selected_category();
            let marker = |active: bool| if active { "*" } else { " " };
            println!("{} all", marker(selected.is_all()));
            for category in controller.categories() {
                println!("{} {}", marker(selected.as_str() == category), category);
            }
        }
        Command::Filter { category: None } => println!("{}", controller.filter()),
        Command::Filter {
            category: Some(category),
        } => {
            let filter = controller.set_filter(&category)?;
            println!("Selected category: {}", filter);
        }
        Command::Export { path } => {
            let count = controller.export(&path).await?;
            println!("Exported {} quote(s) to {}", count, path.display());
        }
        Command::Import { path } => {
            let report = controller.import(&path).await?;
            println!(
                "Quotes imported successfully: {} added, {} skipped ({} malformed, {} duplicate)",
                report.imported,
                report.skipped(),
                report.malformed,
                report.duplicates
            );
        }
        Command::Sync => {
            let added = controller.sync(&MockServer::new()).await?;
            println!("Synced with server. {} server quote(s) added!", added);
        }
        Command::Stats => {
            let stats = controller.stats();
            println!(
                "Total Quotes: {} | Categories: {}",
                stats.total_quotes, stats.total_categories
            );
        }
        Command::Reset => {
            controller.reset()?;
            println!("Quotes reset to the built-in set.");
        }
    }
    Ok(())
}
