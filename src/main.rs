use clap::Parser;
use hello_greeter::utils::logger;
use hello_greeter::{say_hello, CliConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting hello-greeter CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    println!("{}", say_hello());

    Ok(())
}
