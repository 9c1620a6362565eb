#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::PanelConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "stats-panel")]
#[command(about = "Stats panel watch face: companion weather relay and face simulator")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入配置檔；未指定時使用預設值
    pub fn load_panel_config(&self) -> crate::utils::error::Result<PanelConfig> {
        match &self.config {
            Some(path) => PanelConfig::from_file(path),
            None => Ok(PanelConfig::default()),
        }
    }
}
