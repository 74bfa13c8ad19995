//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use georoute_cli::CliError;

#[tokio::main]
async fn main() {
    match georoute_cli::run().await {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("georoute: {err}");
            std::process::exit(1);
        }
    }
}
