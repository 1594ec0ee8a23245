//! Runs one CLI invocation: load config, open storage, restore the session,
//! dispatch the subcommand and persist the session again.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use colored::Colorize;
use std::io::{BufRead, BufReader};
use std::path::Path;

use grocery_tracker_lib::commands::{self, ItemForm, ProfileUpdate, SignupForm};
use grocery_tracker_lib::config::{default_data_dir, TrackerConfig};
use grocery_tracker_lib::domain::{CategoryFilter, Session};
use grocery_tracker_lib::AppState;
use rolling_logger::LoggerOptions;

use crate::cli::{Cli, Commands};
use crate::render;
use crate::session_store;

const APP_LOG_NAME: &str = "grocery-tracker";

pub async fn run(cli: Cli) -> Result<()> {
    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    let config = TrackerConfig::load(&data_dir)?;
    init_logging(&config, cli.verbose)?;
    let _ = rolling_logger::info(&format!("grocery-tracker {}", env!("CARGO_PKG_VERSION")));

    let state = AppState::open(config).await?;
    let session_path = state.config.session_path();
    let mut session = session_store::load(&session_path, evaluation_instant(cli.today))?;

    let outcome = dispatch(&state, &mut session, cli.command).await;
    if let Err(e) = &outcome {
        let _ = rolling_logger::error(&format!("Command failed: {:#}", e));
    }
    session_store::save(&session_path, &session)?;

    if cli.verbose > 0 {
        eprint!("{}", render::log_lines(&rolling_logger::recent_lines(50)).dimmed());
    }
    outcome
}

fn init_logging(config: &TrackerConfig, verbose: u8) -> Result<()> {
    let mut options = LoggerOptions::new(config.log_dir(), APP_LOG_NAME);
    options.max_bytes = config.log_max_bytes;
    options.max_files = config.log_max_files;
    options.level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    rolling_logger::init_logger_with(options).map_err(|e| anyhow!(e))
}

/// Midnight UTC of `--today`, or the current instant
fn evaluation_instant(today: Option<NaiveDate>) -> DateTime<Utc> {
    today
        .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
        .unwrap_or_else(Utc::now)
}

async fn dispatch(state: &AppState, session: &mut Session, command: Commands) -> Result<()> {
    match command {
        Commands::Signup {
            name,
            email,
            password,
            confirm_password,
        } => {
            let form = SignupForm {
                name,
                email,
                password,
                confirm_password,
            };
            let profile = commands::signup(state, session, form).await?;
            println!("{} {}", "Welcome,".green(), profile.name.bold());
        }
        Commands::Login { email, password } => {
            let profile = commands::login(state, session, &email, &password).await?;
            println!("{} {}", "Signed in as".green(), profile.name.bold());
        }
        Commands::Logout => {
            commands::logout(session);
            println!("Signed out");
        }
        Commands::Whoami => {
            let profile = commands::current_profile(state, session).await?;
            print!("{}", render::profile(&profile));
        }
        Commands::Profile { name, phone } => {
            let profile = if name.is_none() && phone.is_none() {
                commands::current_profile(state, session).await?
            } else {
                commands::update_profile(state, session, ProfileUpdate { name, phone }).await?
            };
            print!("{}", render::profile(&profile));
        }
        Commands::Add {
            name,
            category,
            expires,
            quantity,
        } => {
            let form = ItemForm {
                name,
                category,
                expiry_date: Some(expires),
                quantity,
            };
            let item = commands::add_item(state, session, form).await?;
            print!("{}", render::saved(std::slice::from_ref(&item)));
        }
        Commands::Scan { save } => {
            println!("Scanning receipt...");
            let drafts = commands::scan_receipt(state, session).await?;
            println!("Detected {} item(s):", drafts.len());
            print!("{}", render::drafts(&drafts));
            if save {
                let saved = commands::save_batch(state, session, drafts).await?;
                print!("{}", render::saved(&saved));
            }
        }
        Commands::Voice { save } => {
            println!("Listening...");
            let draft = commands::voice_input(state, session).await?;
            print!("{}", render::drafts(std::slice::from_ref(&draft)));
            if save {
                let saved = commands::save_batch(state, session, vec![draft]).await?;
                print!("{}", render::saved(&saved));
            }
        }
        Commands::List { category } => {
            let filter = CategoryFilter::from_label(category.as_deref());
            let view = commands::list_inventory(state, session, &filter).await?;
            print!("{}", render::inventory(&view));
        }
        Commands::Remove { id } => {
            let removed = commands::remove_item(state, session, &id).await?;
            println!("Removed {}", removed.name.bold());
        }
        Commands::ClearExpired => {
            let removed = commands::clear_expired(state, session).await?;
            println!("Cleared {} expired item(s)", removed.len());
        }
        Commands::Notifications { dismiss, clear } => {
            if let Some(item_id) = dismiss {
                if !commands::dismiss_notification(session, &item_id) {
                    println!("Notification for {} was already dismissed", item_id);
                }
            } else if clear {
                let cleared = commands::clear_notifications(state, session).await?;
                println!("Dismissed {} notification(s)", cleared);
            }
            let visible = commands::list_notifications(state, session).await?;
            print!("{}", render::notifications(&visible));
        }
        Commands::Dashboard => {
            let metrics = commands::impact_dashboard(state, session).await?;
            print!("{}", render::dashboard(&metrics));
        }
        Commands::Logs { lines } => {
            let path = rolling_logger::log_file_path()
                .ok_or_else(|| anyhow!("Logger not initialized"))?;
            for line in tail_lines(&path, lines)? {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn tail_lines(path: &Path, count: usize) -> Result<Vec<String>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let lines: Vec<String> = BufReader::new(file).lines().collect::<std::io::Result<_>>()?;
    let skip = lines.len().saturating_sub(count);
    Ok(lines.into_iter().skip(skip).collect())
}
