use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode
{
    let cli = cli::Cli::parse();

    cli::init_tracing(&cli);

    match cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ошибка: {}", e);
            ExitCode::FAILURE
        }
    }
}
