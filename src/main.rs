use anyhow::{Context, Result};
use clap::Parser;
use foodsplit::cli::Cli;
use foodsplit::styles::init_theme;
use foodsplit::utils::get_log_dir;
use foodsplit::{tui, App};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging directory
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;
    let log_file = log_dir.join("foodsplit.log");

    // Initialize tracing with file logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "foodsplit.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    let config = cli.load_config()?;
    init_theme(cli.theme_type(&config));

    // Visible only until the alternate screen takes over
    eprintln!("Logs are being written to: {:?}", log_file);

    // Restore the terminal before the panic message is printed
    tui::install_panic_hook();

    let mut app = App::new(config)?;
    let result = app.run();

    drop(app);
    drop(guard);

    result
}
