//! Pocketbook CLI
//!
//! Terminal front end for the finance dashboard:
//! - Show balance, transactions and categories
//! - Add, edit and delete transactions; add and delete categories
//! - Per-category statistics and the account profile
//! - Register, log in and manage the stored token

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use pocketbook::api::{self, HttpDashboardApi};
use pocketbook::config::{generate_default_config, Config};
use pocketbook::session::{Session, SessionStore, TOKEN_KEY};
use pocketbook::view::{present_dashboard, present_profile, present_stats, OutputFormat};
use pocketbook::{CategoryId, DashboardClient, TerminalNotifier, TransactionId, TransactionKind};

#[derive(Parser)]
#[command(name = "pocketbook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Personal finance dashboard in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Dashboard(DashboardCommand),

    /// Log in and store the token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "POCKETBOOK_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create an account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "POCKETBOOK_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Manage the stored token
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Commands that talk to the dashboard with the stored token
#[derive(Subcommand)]
pub enum DashboardCommand {
    /// Show the dashboard
    Show,

    /// Add a transaction
    AddTransaction {
        /// Amount (sent to the backend as a number)
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
        /// income or expense
        #[arg(short = 't', long = "type", value_parser = parse_kind, default_value = "income")]
        kind: TransactionKind,
        /// Category id
        #[arg(short = 'C', long)]
        category_id: Option<i64>,
        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Change fields of a transaction; omitted fields keep their values
    Edit {
        /// Transaction id
        id: i64,
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(short = 't', long = "type", value_parser = parse_kind)]
        kind: Option<TransactionKind>,
        #[arg(short = 'C', long)]
        category_id: Option<i64>,
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Add a category
    AddCategory {
        /// Category name
        name: String,
    },

    /// Delete a transaction by id or by row number
    Delete(DeleteArgs),

    /// Delete a category by id
    DeleteCategory {
        id: i64,
    },

    /// Show income and expense totals per category
    Stats,

    /// Show the logged-in account
    Profile,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct DeleteArgs {
    /// Transaction id
    id: Option<i64>,
    /// Row number as shown by `pocketbook show`
    #[arg(short, long)]
    row: Option<usize>,
}

#[derive(Subcommand)]
pub enum TokenAction {
    /// Store a token obtained elsewhere
    Set { token: String },
    /// Print the stored token
    Show,
    /// Remove the stored token
    Clear,
}

fn parse_kind(s: &str) -> Result<TransactionKind, String> {
    match s.to_lowercase().as_str() {
        "income" => Ok(TransactionKind::Income),
        "expense" => Ok(TransactionKind::Expense),
        other => Err(format!("Invalid type: {}. Use: income, expense", other)),
    }
}

type Client = DashboardClient<HttpDashboardApi, TerminalNotifier>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    let format = cli.format.unwrap_or(config.output.format);

    pocketbook::logging::init(&config.logging);
    tracing::debug!(base_url = %config.api.base_url, "Pocketbook v{}", env!("CARGO_PKG_VERSION"));

    let command = match cli.command {
        Commands::Dashboard(command) => command,
        Commands::Login { email, password } => return login(&config, &email, &password).await,
        Commands::Register {
            username,
            email,
            password,
        } => return register(&config, &username, &email, &password).await,
        Commands::Token { action } => return manage_token(&config, action),
        Commands::Config { output } => return write_config(output),
    };

    // Token is read once; the client never looks at the store again
    let store = SessionStore::open(&config.session.store_path)?;
    let session = Session::from_store(&store)?;
    let api = HttpDashboardApi::new(&config.api.base_url, session)
        .context("Failed to build HTTP client")?;
    let mut client: Client = DashboardClient::new(api, TerminalNotifier::new());

    match command {
        DashboardCommand::Show => {
            let _ = client.load_dashboard().await;
        }

        DashboardCommand::AddTransaction {
            amount,
            kind,
            category_id,
            description,
        } => {
            let form = client.transaction_form_mut();
            form.set("amount", amount);
            form.set("type", kind.as_str());
            if let Some(id) = category_id {
                form.set("category_id", id.to_string());
            }
            if let Some(description) = description {
                form.set("description", description);
            }
            let _ = client.submit_transaction().await;
        }

        DashboardCommand::Edit {
            id,
            amount,
            kind,
            category_id,
            description,
        } => {
            let form = client.edit_form_mut();
            if let Some(amount) = amount {
                form.set("amount", amount);
            }
            if let Some(kind) = kind {
                form.set("type", kind.as_str());
            }
            if let Some(category_id) = category_id {
                form.set("category_id", category_id.to_string());
            }
            if let Some(description) = description {
                form.set("description", description);
            }
            let _ = client.submit_edit(TransactionId(id)).await;
        }

        DashboardCommand::AddCategory { name } => {
            client.category_form_mut().set("name", name);
            let _ = client.submit_category().await;
        }

        DashboardCommand::Delete(DeleteArgs { id: Some(id), .. }) => {
            let _ = client.delete_transaction(TransactionId(id)).await;
        }

        DashboardCommand::Delete(DeleteArgs { row, .. }) => {
            let row = row.unwrap_or_default();
            if client.load_dashboard().await.is_applied() {
                let index = row.checked_sub(1);
                let outcome = match index {
                    Some(index) => client.delete_row(index).await,
                    None => None,
                };
                if outcome.is_none() {
                    eprintln!("No transaction in row {}", row);
                    std::process::exit(1);
                }
            }
        }

        DashboardCommand::DeleteCategory { id } => {
            let _ = client.delete_category(CategoryId(id)).await;
        }

        DashboardCommand::Stats => {
            if let Some(stats) = client.load_stats().await {
                present_stats(&mut std::io::stdout().lock(), &stats, format)?;
            }
            return finish(&client);
        }

        DashboardCommand::Profile => {
            if let Some(profile) = client.load_profile().await {
                present_profile(&mut std::io::stdout().lock(), &profile, format)?;
            }
            return finish(&client);
        }
    }

    if let Some(view) = client.view() {
        present_dashboard(&mut std::io::stdout().lock(), view, format)?;
    }

    finish(&client)
}

/// Exit non-zero if any notice was shown
fn finish(client: &Client) -> anyhow::Result<()> {
    if client.notifier().shown() > 0 {
        std::process::exit(1);
    }
    Ok(())
}

async fn login(config: &Config, email: &str, password: &str) -> anyhow::Result<()> {
    let response = match api::login(&config.api.base_url, email, password).await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Login failed: {}", e);
            std::process::exit(1);
        }
    };

    let mut store = SessionStore::open(&config.session.store_path)?;
    store.set(TOKEN_KEY, &response.token)?;

    match response.user {
        Some(user) => println!(
            "Logged in as {} <{}> (id {})",
            user.username, user.email, user.id
        ),
        None => println!("Logged in"),
    }
    Ok(())
}

async fn register(
    config: &Config,
    username: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    match api::register(&config.api.base_url, username, email, password).await {
        Ok(response) => {
            match response.user {
                Some(user) => {
                    println!("{}: {} (id {})", response.message, user.username, user.id)
                }
                None => println!("{}", response.message),
            }
            println!("Run `pocketbook login --email {}` to sign in", email);
            Ok(())
        }
        Err(e) => {
            eprintln!("Registration failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn manage_token(config: &Config, action: TokenAction) -> anyhow::Result<()> {
    let mut store = SessionStore::open(&config.session.store_path)?;
    match action {
        TokenAction::Set { token } => {
            store.set(TOKEN_KEY, &token)?;
            println!("Token stored in {:?}", store.path());
        }
        TokenAction::Show => match store.get(TOKEN_KEY) {
            Some(token) => println!("{}", token),
            None => {
                eprintln!("No token stored in {:?}", store.path());
                std::process::exit(1);
            }
        },
        TokenAction::Clear => {
            store.remove(TOKEN_KEY)?;
            println!("Token removed");
        }
    }
    Ok(())
}

fn write_config(output: Option<PathBuf>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, &content)?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}
