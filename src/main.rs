use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dila::WorkspaceError;

#[derive(Parser)]
#[command(name = "dila")]
#[command(version)]
#[command(about = "Generate prompts from a directive + layer pair", long_about = None)]
struct Cli {
    /// Workspace working directory
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the workspace layout, config, and bundled templates
    #[clap(visible_alias = "i")]
    Init,
    /// Generate a prompt for a directive + layer pair
    #[clap(visible_alias = "p")]
    Prompt {
        /// Directive, e.g. to, summary, defect
        directive: String,
        /// Layer, e.g. project, issue, task
        layer: String,
        /// Input file whose content feeds the prompt
        #[arg(short, long)]
        from: Option<PathBuf>,
        /// Destination path substituted into the prompt
        #[arg(short, long)]
        destination: Option<PathBuf>,
    },
    /// Inspect or reload the workspace configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Check that the working directory exists
    Validate,
    /// Re-read the bootstrap config and print the effective base dirs
    Reload,
}

fn main() {
    let cli = Cli::parse();
    let working_dir = cli.dir.unwrap_or_else(|| PathBuf::from(dila::DEFAULT_WORKING_DIR));

    let result: Result<(), WorkspaceError> = match cli.command {
        Commands::Init => dila::init(&working_dir).map(|()| {
            println!("✅ Initialized workspace at {}", working_dir.display());
        }),
        Commands::Prompt { directive, layer, from, destination } => dila::generate_prompt(
            &working_dir,
            &directive,
            &layer,
            from.as_deref(),
            destination.as_deref(),
        )
        .map(|prompt| print!("{prompt}")),
        Commands::Config { action } => match action {
            ConfigAction::Validate => dila::validate_config(&working_dir).map(|()| {
                println!("✅ Config valid: {}", working_dir.display());
            }),
            ConfigAction::Reload => dila::reload_config(&working_dir).map(|config| {
                println!("app_prompt.base_dir: {}", config.prompt_base_dir());
                println!("app_schema.base_dir: {}", config.schema_base_dir());
            }),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
