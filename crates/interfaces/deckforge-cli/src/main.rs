use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use deckforge_cli::commands::{self, BuildArgs, CardSource};
use deckforge_cli::CliFormat;
use tokio::io::AsyncReadExt;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Base URL of the deck service
    #[arg(long, global = true, env = deckforge_config::API_URL_ENV)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a card can lead a commander deck
    Validate {
        name: String,
        #[arg(long, help = "Validate as a partner commander")]
        partner: bool,
    },
    #[command(name = "check-partner")]
    CheckPartner { commander1: String, commander2: String },
    /// Build a deck from a card pool
    Build {
        #[arg(long, value_enum)]
        format: CliFormat,
        #[arg(long, help = "Card list file (reads stdin when omitted)")]
        cards: Option<Utf8PathBuf>,
        #[arg(long)]
        commander: Option<String>,
        #[arg(long)]
        partner: Option<String>,
        #[arg(long, help = "Free-text deck goal, e.g. \"aggressive tokens\"")]
        goal: Option<String>,
        #[arg(long, help = "Print the built deck as JSON")]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let api_url = deckforge_config::resolve_api_base_url(cli.api_url.as_deref());

    match cli.command {
        Commands::Validate { name, partner } => {
            commands::cmd_validate(&api_url, name, partner).await?;
        }
        Commands::CheckPartner {
            commander1,
            commander2,
        } => {
            commands::cmd_check_partner(&api_url, commander1, commander2).await?;
        }
        Commands::Build {
            format,
            cards,
            commander,
            partner,
            goal,
            json,
        } => {
            let cards = match cards {
                Some(path) => CardSource::File(path),
                None => {
                    let mut text = String::new();
                    tokio::io::stdin().read_to_string(&mut text).await?;
                    CardSource::Text(text)
                }
            };
            let args = BuildArgs {
                format,
                cards,
                commander,
                partner,
                goal,
                json,
            };
            commands::cmd_build(&api_url, args).await?;
        }
    }

    Ok(())
}
