use crate::core::profile::FaceVariant;
use crate::domain::model::Permission;
use clap::{Args, Subcommand};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the companion weather relay
    Relay(RelayArgs),
    /// Simulate one watch-face tick and print every display element
    Render(RenderArgs),
}

#[derive(Debug, Clone, Args)]
pub struct RelayArgs {
    /// Override the weather endpoint from the config file
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Override the outbox directory from the config file
    #[arg(long)]
    pub outbox: Option<String>,

    /// Override the wake interval in minutes
    #[arg(long)]
    pub wake_minutes: Option<u64>,

    /// Refresh once and exit
    #[arg(long)]
    pub once: bool,

    /// Pretend access_location was not granted
    #[arg(long)]
    pub deny_location: bool,
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Local time of the tick, e.g. 2025-03-04T09:05 (defaults to now)
    #[arg(long)]
    pub at: Option<String>,

    /// Face variant: minimal, versa, sense or lite (defaults to the config file)
    #[arg(long)]
    pub variant: Option<FaceVariant>,

    /// Granted permissions: activity, heart_rate, location
    #[arg(long, value_delimiter = ',')]
    pub grant: Vec<Permission>,

    #[arg(long, help = "Use the 12 hour clock")]
    pub twelve_hour: bool,

    #[arg(long, help = "Show distance in miles")]
    pub imperial: bool,

    #[arg(long, help = "Show temperature in Fahrenheit")]
    pub fahrenheit: bool,

    #[arg(long, help = "Disable leading zero on hours")]
    pub no_leading_zero: bool,

    #[arg(long, help = "Hide the AM/PM indicators")]
    pub hide_am_pm: bool,

    #[arg(long)]
    pub color: Option<String>,

    #[arg(long, default_value = "0")]
    pub steps: u32,

    #[arg(long, default_value = "0", help = "Distance walked in meters")]
    pub distance: f64,

    #[arg(long, default_value = "0")]
    pub calories: u32,

    #[arg(long, default_value = "0")]
    pub active_minutes: u32,

    #[arg(long, default_value = "0")]
    pub floors: u32,

    #[arg(long, default_value = "100", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub battery: u8,

    #[arg(long)]
    pub charging: bool,

    /// Heart-rate reading in bpm; negative values are shown as invalid
    #[arg(long, allow_hyphen_values = true)]
    pub heart_rate: Option<i32>,

    /// Directory to read the latest weather payload from
    #[arg(long)]
    pub inbox: Option<String>,
}
