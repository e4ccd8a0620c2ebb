//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use sleeper_site::{
    cli::{Commands, SleeperSite},
    commands::{
        build_site_data::handle_build_site_data, export_csv::handle_export_csv,
        fantasypros_projections::handle_fantasypros_projections,
        matchup_predictions::handle_matchup_predictions, power_rankings::handle_power_rankings,
        projections::handle_projections, update_history::handle_update_history,
    },
    Result,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(app: SleeperSite) -> Result<()> {
    match app.command {
        Commands::ExportCsv { league_id, out_dir } => handle_export_csv(league_id, out_dir).await,
        Commands::BuildSiteData { league_id, site } => handle_build_site_data(league_id, site).await,
        Commands::Projections { site, season_type } => handle_projections(site, season_type).await,
        Commands::FantasyprosProjections { site, scoring } => {
            handle_fantasypros_projections(site, scoring).await
        }
        Commands::PowerRankings {
            league_id,
            site,
            model,
        } => handle_power_rankings(league_id, site, model).await,
        Commands::MatchupPredictions {
            league_id,
            site,
            model,
        } => handle_matchup_predictions(league_id, site, model).await,
        Commands::UpdateHistory { site } => handle_update_history(site).await,
    }
}

/// Run the CLI.
#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_tracing();

    let app = SleeperSite::parse();
    if let Err(err) = run(app).await {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
