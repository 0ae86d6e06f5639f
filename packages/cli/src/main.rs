//! `apost` — the AstroPost customer portal, from a terminal.
//!
//! Drives the portal's JSON API the way the web page does: one subcommand
//! per page action, alerts on stderr, collection tables on stdout. The
//! session identity persists in a small JSON scope file between
//! invocations, standing in for the page-scoped storage.
//!
//! ```sh
//! apost --portal http://localhost:8000 login -u mallory -p hunter2
//! apost add-address --street "1 Olympus Mons Rd" --zip 0001 \
//!     --city "New Elysium" --country Tharsis --planet Mars
//! apost addresses
//! apost feedback --offset 20
//! apost logout
//! ```
//!
//! Exit codes: 0 on success, 1 when the operation raised a danger alert,
//! 2 on setup failures.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use astropost::{InertTrigger, Page, Portal, SessionStore};
use astropost_api::{Address, CreditCard, Credentials};

mod page;
mod store;

use page::{AddressTable, CreditCardTable, FeedbackList, TerminalAlerts, TerminalNavigator};
use store::{default_session_path, FileStore};

/// apost — AstroPost customer portal CLI
///
/// Log in once, then manage your addresses and credit cards; the session
/// is remembered until `logout`.
#[derive(Parser)]
#[command(name = "apost", version, about, long_about = None)]
struct Cli {
    /// Base URL of the portal.
    #[arg(
        long,
        env = "APOST_PORTAL",
        default_value = "http://localhost:8000",
        global = true
    )]
    portal: String,

    /// Path of the session scope file.
    #[arg(long, env = "APOST_SESSION", global = true)]
    session: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in to the portal and remember the session.
    Login {
        /// Account username.
        #[arg(short = 'u', long)]
        username: String,

        /// Account password.
        #[arg(short = 'p', long)]
        password: String,
    },

    /// Store a new delivery address.
    AddAddress {
        #[arg(long)]
        street: String,

        #[arg(long)]
        zip: String,

        #[arg(long)]
        city: String,

        #[arg(long)]
        country: String,

        /// Destination planet.
        #[arg(long, default_value = "Earth")]
        planet: String,
    },

    /// List the addresses on file.
    Addresses,

    /// Store a new credit card.
    AddCreditCard {
        /// Card number.
        #[arg(long)]
        number: String,
    },

    /// List the credit cards on file.
    CreditCards,

    /// Show the portal's public feedback feed.
    Feedback {
        /// Skip the given number of newest entries.
        #[arg(long)]
        offset: Option<u32>,
    },

    /// Forget the stored session.
    Logout,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apost=warn,astropost=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let store = Arc::new(FileStore::open(
        cli.session.unwrap_or_else(default_session_path),
    ));
    let alerts = Arc::new(TerminalAlerts::new());

    let page = Page {
        alerts: alerts.clone(),
        store: store.clone(),
        navigator: Arc::new(TerminalNavigator),
        addresses: Arc::new(AddressTable),
        credit_cards: Arc::new(CreditCardTable),
        feedback: Arc::new(FeedbackList),
    };
    let portal = match Portal::new(&cli.portal, page) {
        Ok(portal) => portal,
        Err(error) => fatal(&format!("could not set up the portal client: {error}")),
    };

    // Terminal commands have no button to gate.
    let trigger = InertTrigger;

    match cli.command {
        Command::Login { username, password } => {
            portal
                .login(&trigger, &Credentials::new(username, password))
                .await;
        }

        Command::AddAddress {
            street,
            zip,
            city,
            country,
            planet,
        } => {
            portal
                .add_address(&trigger, &Address::new(street, zip, city, country, planet))
                .await;
        }

        Command::Addresses => portal.list_addresses().await,

        Command::AddCreditCard { number } => {
            portal
                .add_credit_card(&trigger, &CreditCard::new(number))
                .await;
        }

        Command::CreditCards => portal.list_credit_cards().await,

        Command::Feedback { offset } => portal.recent_feedback(offset).await,

        Command::Logout => {
            store.clear();
            println!("Session forgotten.");
        }
    }

    if alerts.saw_danger() {
        process::exit(1);
    }
}

/// Print an error message to stderr and exit with code 2.
fn fatal(msg: &str) -> ! {
    eprintln!("apost: {msg}");
    process::exit(2);
}
