mod commands;
mod terminal;

use commands::{CommandLine, Commands, discover, info, resolve};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();
    print::banner(commands.quiet);

    match commands.command {
        Commands::Info { ip } => info::info(ip.as_deref(), commands.quiet).await,
        Commands::Discover(args) => {
            print::header("getting ready for discovery", commands.quiet);
            discover::discover(&args, commands.quiet).await
        }
        Commands::Resolve { scan, fallback } => {
            print::header("resolving api endpoint", commands.quiet);
            resolve::resolve(&scan, &fallback, commands.quiet).await
        }
    }
}
