use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, error, info};
use serde_json::json;
use std::path::PathBuf;

use curldoc::config::{ConfigError, ThemeArgs, ThemeConfig};
use curldoc::models::ApiDescription;

/// Example curl commands for API documentation themes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the curl commands for every method of an API description
    Curl {
        /// API description file (JSON or YAML)
        file: PathBuf,
    },

    /// Validate theme options, embed the logo and print the resolved configuration
    Config {
        /// Logo image path
        #[arg(long)]
        logo: Option<PathBuf>,

        /// Color theme path
        #[arg(long = "color-theme")]
        color_theme: Option<PathBuf>,

        /// Language tabs as a JSON array of strings, eg: ["json", "xml"]
        #[arg(long = "language-tabs")]
        language_tabs: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env = Env::default().filter_or("RUST_LOG", if cli.verbose { "debug" } else { "info" });
    env_logger::init_from_env(env);

    debug!("Starting curldoc...");

    match cli.command {
        Commands::Curl { file } => {
            let description = ApiDescription::from_path(&file)
                .with_context(|| format!("Failed to load API description: {:?}", file))?;

            let statements = description.curl_statements();
            debug!("Rendering {} methods", statements.len());

            for (entry, statement) in statements {
                let verb = entry.method.method.as_deref().unwrap_or("get").to_uppercase();
                println!("# {} {}\n{}\n", verb, entry.resource.path(), statement);
            }
        }
        Commands::Config {
            logo,
            color_theme,
            language_tabs,
        } => {
            let args = ThemeArgs {
                logo,
                color_theme,
                language_tabs,
            };
            let config = match ThemeConfig::from_args(args) {
                Ok(config) => config,
                Err(err @ ConfigError::InvalidLanguageTabs(_)) => {
                    error!("{}", err);
                    error!(r#"language-tabs argument should be a JSON array of strings. eg: ["json", "xml"]"#);
                    std::process::exit(1);
                }
                Err(err) => return Err(err.into()),
            };

            let logo = config.load_logo()?;
            info!("Loaded logo {:?} ({} bytes as data URI)", config.logo_path, logo.len());

            let json = serde_json::to_string_pretty(&json!({
                "config": config,
                "logo": logo,
            }))
            .context("Failed to serialize theme configuration")?;
            println!("{}", json);
        }
    }

    Ok(())
}
