use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use grocery_tracker_lib::commands::parse_expiry_date;

#[derive(Parser, Debug)]
#[command(name = "grocery-tracker")]
#[command(about = "Track groceries, expiry dates and the waste you avoid", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the database, config, session and logs
    #[arg(long, env = "GROCERY_TRACKER_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Evaluate freshness as of this date (YYYY-MM-DD) instead of now
    #[arg(long, value_parser = parse_today, global = true)]
    pub today: Option<NaiveDate>,

    /// Increase log detail (-v debug, -vv trace) and echo this run's log lines
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and sign in
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Must match --password
        #[arg(long = "confirm-password")]
        confirm_password: String,
    },

    /// Sign in to an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign out and forget dismissed notifications
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Show or edit the profile
    Profile {
        #[arg(long)]
        name: Option<String>,
        /// Pass an empty value to clear
        #[arg(long)]
        phone: Option<String>,
    },

    /// Add one item manually
    Add {
        #[arg(long)]
        name: String,
        /// Dairy, Produce, Meat, Snacks, Beverages, Pantry, Frozen, Other or any custom label
        #[arg(long)]
        category: Option<String>,
        /// Expiry date, YYYY-MM-DD
        #[arg(long)]
        expires: String,
        #[arg(long, allow_negative_numbers = true)]
        quantity: Option<i64>,
    },

    /// Scan a receipt and review the detected items
    Scan {
        /// Store the detected items
        #[arg(long)]
        save: bool,
    },

    /// Capture an item by voice
    Voice {
        /// Store the captured item
        #[arg(long)]
        save: bool,
    },

    /// List the inventory with freshness
    List {
        /// Only show this category ("All" shows everything)
        #[arg(long)]
        category: Option<String>,
    },

    /// Remove an item by id
    Remove { id: String },

    /// Remove every expired item
    ClearExpired,

    /// Show expiry notifications
    Notifications {
        /// Hide the notification for this item id
        #[arg(long, conflicts_with = "clear")]
        dismiss: Option<String>,

        /// Hide all visible notifications
        #[arg(long)]
        clear: bool,
    },

    /// Show the environmental impact dashboard
    Dashboard,

    /// Show the tail of the log file
    Logs {
        #[arg(long, default_value = "20")]
        lines: usize,
    },
}

fn parse_today(raw: &str) -> Result<NaiveDate, String> {
    parse_expiry_date(raw).map_err(|e| e.to_string())
}
