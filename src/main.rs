//! GX Shell - Entry Point
//!
//! Interactive filesystem shell with guarded commands.

use log::{error, info};
use std::process::ExitCode;
use tokio::io::{BufReader, stdin, stdout};

use gx_shell::{Session, Shell, ShellConfig, run_shell};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match ShellConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let root = match config.root_path() {
        Ok(root) => root,
        Err(e) => {
            error!("Cannot determine start directory: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if !root.is_dir() {
        error!("Start directory {} is not a directory", root.display());
        return ExitCode::FAILURE;
    }

    info!("Launching GX shell in {}", root.display());
    let mut shell = Shell::new(Session::new(root), config);

    if let Err(e) = run_shell(&mut shell, BufReader::new(stdin()), stdout()).await {
        error!("Shell terminated: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
