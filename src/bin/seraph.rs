use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use seraph_client::observability::metrics::get_metrics;
use seraph_client::services::ReportType;
use seraph_client::utils::config_loader;
use seraph_client::utils::logging::{self, LogLevel};
use seraph_client::{RefreshOutcome, SeraphApi};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "seraph.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    /// dump prometheus metrics to stderr before exiting
    #[arg(long)]
    print_metrics: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Refresh if needed and print the bearer value
    Token {
        #[arg(long)]
        raw: bool,
    },
    History { player: String },
    Changes { player: String },
    Timestamps { player: String },
    HistoryAt { player: String, timestamp: String },
    Client { player: String },
    Cosmetics { player: String },
    Search { query: String },
    Ping { player: String },
    Mojang { name_or_id: String },
    Report {
        player: String,
        /// one of the names listed by `report-types`
        report_type: Option<String>,
        #[arg(long)]
        reason: Option<String>,
    },
    ReportFormatted { player: String },
    ReportTypes,
    LinkedAccounts { snowflake: String },
    Profile { snowflake: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load YAML config, init logging
    // -------------------------------

    let args = Args::parse();
    let client_config = config_loader::run(&args.config).await?;
    logging::run(&client_config, args.log_level);

    // -------------------------------
    // 2. Compose client
    // -------------------------------

    let api = SeraphApi::from_config(&client_config)?;
    info!("client starting...");

    // -------------------------------
    // 3. Execute command
    // -------------------------------

    let result = execute(&api, args.command).await;

    if args.print_metrics {
        eprintln!("{}", get_metrics().await.render());
    }
    result
}

async fn execute(api: &SeraphApi, command: Command) -> Result<()> {
    match command {
        Command::Token { raw } => {
            if let RefreshOutcome::Failed(err) = api.auth().ensure_fresh().await {
                return Err(anyhow!(err).context("token refresh failed"));
            }
            let value = api
                .auth()
                .get_authorization_value(!raw)
                .await
                .ok_or_else(|| anyhow!("no credential available"))?;
            println!("{}", value);
            Ok(())
        }
        Command::History { player } => print_json(&api.player_cache().fetch_player_history(&player).await),
        Command::Changes { player } => print_json(&api.player_cache().fetch_player_changes(&player).await),
        Command::Timestamps { player } => print_json(&api.player_cache().fetch_player_timestamps(&player).await),
        Command::HistoryAt { player, timestamp } => print_json(
            &api.player_cache()
                .fetch_player_history_by_timestamp(&player, &timestamp)
                .await,
        ),
        Command::Client { player } => print_json(&api.client().fetch_client(&player).await),
        Command::Cosmetics { player } => print_json(&api.client().fetch_client_cosmetics(&player).await),
        Command::Search { query } => print_json(&api.stash().fetch_search(&query).await),
        Command::Ping { player } => print_json(&api.stash().fetch_ping(&player).await),
        Command::Mojang { name_or_id } => print_json(&api.mojang().fetch_mojang(&name_or_id).await),
        Command::Report { player, report_type: None, .. } => {
            print_json(&api.reports().fetch_player_report(&player).await)
        }
        Command::Report { player, report_type: Some(report_type), reason } => {
            let report_type: ReportType = report_type.parse()?;
            api.reports()
                .report_player(&player, report_type, reason.as_deref())
                .await?;
            println!("reported {} as {}", player, report_type.clean_name());
            Ok(())
        }
        Command::ReportFormatted { player } => {
            print_json(&api.reports().fetch_formatted_player_report(&player).await)
        }
        Command::ReportTypes => print_json(&api.reports().report_types()),
        Command::LinkedAccounts { snowflake } => {
            print_json(&api.linking().fetch_linked_accounts(&snowflake).await?)
        }
        Command::Profile { snowflake } => print_json(&api.linking().fetch_user_profile(&snowflake).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
