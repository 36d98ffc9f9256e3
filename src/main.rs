use std::process::ExitCode;

mod app;
mod audio;
mod cli;
mod config;
mod error;
mod library;
mod logging;
mod runtime;
mod ui;

fn main() -> ExitCode {
    match runtime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("repro: {e}");
            ExitCode::FAILURE
        }
    }
}
