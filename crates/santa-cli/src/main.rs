mod display;

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use santa_core::{Assessment, FeasibilityModel};
use santa_web::{Config, Variant};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "santa", version, about = "Santa's Advisory Desk: is your Christmas wish deliverable?")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the wish page over HTTP.
    Serve {
        #[arg(long, env = "SANTA_BIND", default_value = "0.0.0.0")]
        bind: IpAddr,

        #[arg(long, env = "SANTA_PORT", default_value_t = santa_web::config::DEFAULT_PORT)]
        port: u16,

        /// Directory holding Snow.png, Apres.png, santa_ok.png and santa_thumbs_up.png.
        #[arg(long, env = "SANTA_ASSETS_DIR", default_value = santa_web::config::DEFAULT_ASSETS_DIR)]
        assets_dir: PathBuf,

        /// Page layout: `analysis` shows the feature breakdown, `plain` omits it.
        #[arg(long, env = "SANTA_VARIANT", default_value = "analysis")]
        variant: Variant,

        /// Seconds of inactivity before a session's last result is dropped.
        #[arg(long, env = "SANTA_SESSION_TTL_SECS", default_value_t = santa_web::config::DEFAULT_SESSION_TTL_SECS)]
        session_ttl_secs: u64,
    },

    /// Assess a single wish and print the verdict.
    Ask {
        wish: String,

        /// Print the assessment as JSON.
        #[arg(long)]
        json: bool,

        /// Show each model term's contribution.
        #[arg(long, conflicts_with = "json")]
        explain: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("santa v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            bind,
            port,
            assets_dir,
            variant,
            session_ttl_secs,
        } => {
            let config = Config {
                bind,
                port,
                assets_dir,
                variant,
                session_ttl: Duration::from_secs(session_ttl_secs),
            };
            santa_web::serve(config).await.context("serving wish page")?;
        }
        Command::Ask {
            wish,
            json,
            explain,
        } => {
            let model = FeasibilityModel::default();
            let assessment = Assessment::with_model(&wish, &model);

            if json {
                let out = serde_json::to_string_pretty(&assessment)
                    .context("serialising assessment")?;
                println!("{out}");
            } else {
                print!(
                    "{}",
                    display::assessment_card(&assessment, explain.then_some(&model))
                );
            }
        }
    }

    Ok(())
}
