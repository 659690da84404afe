use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "hello-greeter")]
#[command(about = "Prints a fixed greeting")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
