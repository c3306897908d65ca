use clap::CommandFactory;
use clap::{Parser, Subcommand};
use dryness::utils::{init_logging, setup_crypto_provider};
use std::path::PathBuf;

// Use jemalloc on musl x86_64 for better performance
#[cfg(all(target_env = "musl", target_arch = "x86_64"))]
#[global_allocator]
static ALLOC: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser)]
#[command(
    name = "dryness",
    about = "Classify banana dryness from the terminal",
    long_about = None,
    version = env!("CARGO_PKG_VERSION"),
    long_version = concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\n",
        "Build Information:\n",
        "  Timestamp:         ", env!("VERGEN_BUILD_TIMESTAMP"), "\n",
        "  Target Triple:     ", env!("VERGEN_CARGO_TARGET_TRIPLE"), "\n",
        "  Commit SHA:        ", env!("VERGEN_GIT_SHA"), "\n",
        "  Branch:            ", env!("VERGEN_GIT_BRANCH"), "\n",
        "  Rustc Version:     ", env!("VERGEN_RUSTC_SEMVER"), "\n",
        "  Host Triple:       ", env!("VERGEN_RUSTC_HOST_TRIPLE"), "\n"
    ),
    disable_help_subcommand = true
)]
struct Cli {
    /// Base URL of the prediction API [env: DRYNESS_API_URL]
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an image and show its dryness classification.
    ///
    /// The image must be at most 10MB. After a successful analysis the three
    /// most recent history entries are shown.
    Predict {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        image: PathBuf,
        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
        /// Do not show recent history after the result
        #[arg(long)]
        no_history: bool,
    },

    /// List past analyses stored by the service.
    History {
        /// Only show the most recent entries
        #[arg(long)]
        recent: bool,
        /// Include the image URL of each entry
        #[arg(long)]
        wide: bool,
        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete one analysis from the history.
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// What this tool does.
    About,

    /// A few facts about bananas and drying them.
    #[command(alias = "banana-facts")]
    Facts,

    /// Show or change the stored API URL.
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// Show instructions for enabling shell completions.
    Completions,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Store the API URL in the config file.
    SetUrl { url: String },
    /// Remove the stored API URL.
    UnsetUrl,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    setup_crypto_provider();
    init_logging();

    clap_complete::CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();
    let api_url = cli.api_url;

    let result = match cli.command {
        Commands::Predict {
            image,
            json,
            no_history,
        } => dryness::commands::predict::run(image, api_url, json, no_history).await,
        Commands::History { recent, wide, json } => {
            dryness::commands::history::run(api_url, recent, wide, json).await
        }
        Commands::Delete { id, yes } => dryness::commands::delete::run(id, yes, api_url).await,
        Commands::About => dryness::commands::pages::about(),
        Commands::Facts => dryness::commands::pages::facts(),
        Commands::Config { action } => match action {
            None => dryness::commands::config_cmds::show(api_url),
            Some(ConfigAction::SetUrl { url }) => dryness::commands::config_cmds::set_url(url),
            Some(ConfigAction::UnsetUrl) => dryness::commands::config_cmds::unset_url(),
        },
        Commands::Completions => {
            println!(
                "Bash:\n\
                echo \"source <(COMPLETE=bash dryness)\" >> ~/.bashrc\n\
                \n\
                Elvish:\n\
                echo \"eval (E:COMPLETE=elvish dryness | slurp)\" >> ~/.elvish/rc.elv\n\
                \n\
                Fish:\n\
                echo \"COMPLETE=fish dryness | source\" >> ~/.config/fish/config.fish\n\
                \n\
                Zsh:\n\
                echo \"source <(COMPLETE=zsh dryness)\" >> ~/.zshrc\n"
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
