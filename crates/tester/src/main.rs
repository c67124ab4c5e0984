use std::io::Write;
use std::process::ExitCode;

use catalogcheck_tester::{Cli, Settings};
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let settings = Settings::from(Cli::parse());
    catalogcheck_observability::init(settings.log_format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match catalogcheck_tester::run::run(&settings, &mut out).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = writeln!(out, "{e:#}");
            ExitCode::FAILURE
        }
    }
}
