use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use idcards::config::Config;
use idcards::data_uri;
use idcards::db::SqliteStore;
use idcards::models::{CardKind, CardSet};
use idcards::wallet::{Dashboard, Wallet};

#[derive(Parser)]
#[command(name = "idcards")]
#[command(about = "Keep your dorm, library and gym ID cards in one place")]
struct Cli {
    /// Path to the card database (overrides IDCARDS_DB)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with your student ID
    Login {
        student_id: String,
    },
    /// Log out of the current session
    Logout,
    /// Show who is logged in
    Whoami,
    /// Save an image as one of your ID cards
    Save {
        /// dorm, library or gym
        kind: CardKind,
        /// Image file to store
        file: Option<PathBuf>,
    },
    /// List which ID cards are stored
    List,
    /// Print a stored card as a data URI, or write it to a file
    Show {
        kind: CardKind,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "idcards=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => Ok(()),
        Err(e) => match e.downcast_ref::<idcards::Error>() {
            Some(rejection) if rejection.is_rejection() => {
                eprintln!("{}", rejection);
                std::process::exit(1);
            }
            _ => Err(e),
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::resolve(cli.db)?;
    let store = SqliteStore::open(&config.db_path)
        .with_context(|| format!("Failed to open {}", config.db_path.display()))?;
    store.migrate()?;

    let wallet = Wallet::open(Arc::new(store));

    match cli.command {
        Commands::Login { student_id } => {
            let dashboard = wallet.login(&student_id)?;
            print_dashboard(&dashboard);
        }
        Commands::Logout => {
            wallet.logout()?;
            println!("Logged out");
        }
        Commands::Whoami => match wallet.resume()? {
            Some(dashboard) => print_dashboard(&dashboard),
            None => println!("Not logged in"),
        },
        Commands::Save { kind, file } => {
            let selection = match file {
                Some(path) => Some(
                    data_uri::encode_file(&path)
                        .with_context(|| format!("Failed to read {}", path.display()))?,
                ),
                None => None,
            };
            wallet.save_card(kind, selection.as_deref())?;
            println!("{} saved successfully!", kind);
        }
        Commands::List => {
            let Some(dashboard) = wallet.resume()? else {
                return Err(idcards::Error::NotLoggedIn.into());
            };
            print_cards(&dashboard.cards);
        }
        Commands::Show { kind, out } => {
            let Some(payload) = wallet.card(kind)? else {
                println!("No {} stored", kind);
                return Ok(());
            };
            match out {
                Some(path) => {
                    let (mime, bytes) = data_uri::decode(&payload)?;
                    std::fs::write(&path, bytes)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!(
                        "Wrote {} ({}, .{}) to {}",
                        kind,
                        mime,
                        data_uri::extension_for_mime(&mime),
                        path.display()
                    );
                }
                None => println!("{}", payload),
            }
        }
    }

    Ok(())
}

fn print_dashboard(dashboard: &Dashboard) {
    println!("Welcome, {}", dashboard.identity.name);
    print_cards(&dashboard.cards);
}

fn print_cards(cards: &CardSet) {
    for kind in CardKind::ALL {
        let status = if cards.contains(kind) { "saved" } else { "-" };
        println!("  {:<11} {}", kind.display_name(), status);
    }
}
