use clap::Parser;
use steel_inventory::cli::{self, CliError};
use steel_inventory::{open_inventory, AppConfig, Args, Command};

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // RUST_LOG=steel_inventory=debug for store and service detail
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match AppConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to resolve working directory: {e}");
            std::process::exit(1);
        }
    };

    match args.command {
        Some(command) => run_command(&config, command),
        None => {
            log::info!("Starting Steel Inventory");
            if let Err(e) = steel_inventory::ui::launch_gui(config) {
                log::error!("Application error: {e}");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn run_command(config: &AppConfig, command: Command) {
    let mut service = match open_inventory(&config.database_path) {
        Ok(service) => service,
        Err(e) => {
            log::error!("Failed to open inventory: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match cli::execute(&mut service, command) {
        Ok(output) => print!("{output}"),
        Err(CliError::Inventory(e)) => {
            let notice = e.notice();
            eprintln!("{}: {}", notice.title, notice.message);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
