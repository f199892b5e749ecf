use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use atlas::core::config;
use atlas::tui;

#[derive(Parser)]
#[command(name = "atlas", about = "Terminal country lookup")]
struct Args {
    /// Override the REST Countries base URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // A malformed config file is fatal before the terminal is entered
    let loaded = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("atlas: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&loaded, args.base_url.as_deref());

    // Initialize file logger - writes to atlas.log in current directory
    // (stdout belongs to the TUI)
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("atlas.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Atlas starting up (endpoint: {})", resolved.base_url);

    tui::run(resolved)
}
