use clap::Parser;
use pizzad::LogLevel;
use pizzad::core::config::{self, CliOverrides, PizzadConfig};
use pizzad::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pizzad", about = "Build a pizza order in your terminal")]
struct Args {
    /// Config file (default: ~/.pizzad/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the log
    #[arg(long, default_value = "pizzad.log")]
    log_file: PathBuf,

    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,

    /// Start a fresh order after each receipt
    #[arg(long)]
    reset_order: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
    }

    log::info!("pizzad starting up (log level {:?})", args.log_level);

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Failed to load config: {}", e);
            eprintln!("Warning: {e}. Using default settings.");
            PizzadConfig::default()
        }
    };
    let cli = CliOverrides {
        reset_order_after_receipt: args.reset_order,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!(
        "Resolved config: shop={:?}, {} catalog pizzas, reset_order_after_receipt={}",
        resolved.shop_name,
        resolved.catalog.len(),
        resolved.reset_order_after_receipt
    );

    tui::run(resolved)
}
