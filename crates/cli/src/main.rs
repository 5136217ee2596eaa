use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::scores::{IMDB, METACRITIC, ROTTEN_TOMATOES, TMDB};
use pipeline::{Field, UNAVAILABLE};
use server::{disambiguation_body, MovieQuery, ProviderConfig, Resolution, ResolvedMovie};
use sources::SearchCandidate;
use std::time::Instant;
use tracing::debug;

/// movie-info - resolve a movie across TMDb and OMDb
#[derive(Parser)]
#[command(name = "movie-info")]
#[command(about = "Look up a movie's merged metadata, scores and streaming offers", long_about = None)]
struct Cli {
    #[command(flatten)]
    providers: ProviderConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a movie by title or TMDb id
    Resolve {
        /// Movie title to search for
        #[arg(long, required_unless_present = "id")]
        title: Option<String>,

        /// TMDb id; takes precedence over --title
        #[arg(long)]
        id: Option<String>,

        /// Print the raw JSON response body instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// List the TMDb search candidates for a title
    Search {
        /// Movie title to search for
        #[arg(long)]
        title: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { title, id, json } => {
            handle_resolve(&cli.providers, title, id, json).await?
        }
        Commands::Search { title } => handle_search(&cli.providers, &title).await?,
    }

    Ok(())
}

/// Handle the 'resolve' command
async fn handle_resolve(
    providers: &ProviderConfig,
    title: Option<String>,
    id: Option<String>,
    json: bool,
) -> Result<()> {
    let query = MovieQuery::from_params(title.as_deref(), id.as_deref())
        .ok_or_else(|| anyhow!("Provide a non-empty --title or --id"))?;
    let resolver = providers.build_resolver()?;
    debug!("Resolving {:?}", query);

    let start = Instant::now();
    let resolution = resolver
        .resolve(&query)
        .await
        .map_err(|failure| anyhow!("{} ({})", failure.message, failure.status))?;
    let elapsed = start.elapsed();

    match resolution {
        Resolution::Resolved(movie) if json => {
            let body = serde_json::to_string_pretty(&movie).context("Failed to encode movie")?;
            println!("{}", body);
        }
        Resolution::Resolved(movie) => print_movie(&movie),
        Resolution::Multiple(candidates) if json => {
            let body = serde_json::to_string_pretty(&disambiguation_body(&candidates))
                .context("Failed to encode candidates")?;
            println!("{}", body);
        }
        Resolution::Multiple(candidates) => {
            println!("{}", "Several movies match; rerun with --id:".bold().yellow());
            print_candidates(&candidates);
        }
    }

    if !json {
        println!("{} Resolved in {:?}", "✓".green(), elapsed);
    }
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(providers: &ProviderConfig, title: &str) -> Result<()> {
    let tmdb = providers.tmdb_client(providers.http_client()?);
    let candidates = tmdb
        .search_movies(title)
        .await
        .with_context(|| format!("Search for '{}' failed", title))?;

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    if candidates.is_empty() {
        println!("  No matches found.");
    } else {
        print_candidates(&candidates);
    }
    Ok(())
}

fn print_candidates(candidates: &[SearchCandidate]) {
    for candidate in candidates {
        println!(
            "  {} {} ({})",
            candidate.id.to_string().green(),
            candidate.title,
            candidate.release_year.as_deref().unwrap_or("????")
        );
    }
}

/// Helper function to format and print a resolved movie
fn print_movie(movie: &ResolvedMovie) {
    let info = &movie.movie_info;
    println!(
        "{}",
        format!(
            "{} ({})",
            info.title.as_deref().unwrap_or(UNAVAILABLE),
            info.year.as_deref().unwrap_or(UNAVAILABLE)
        )
        .bold()
        .blue()
    );

    for field in Field::ALL {
        if matches!(field, Field::Title | Field::Year) {
            continue;
        }
        let value = info.get(field).unwrap_or(UNAVAILABLE);
        println!("{}{:?}: {}", "• ".green(), field, value);
    }

    println!("{}", "Scores:".bold());
    let scores = [
        (IMDB, movie.scores.imdb),
        (ROTTEN_TOMATOES, movie.scores.rotten_tomatoes),
        (METACRITIC, movie.scores.metacritic),
        (TMDB, movie.scores.tmdb),
    ];
    for (source, score) in scores {
        let score = score.map_or_else(|| UNAVAILABLE.to_string(), |s| s.to_string());
        println!("{}{}: {}", "• ".cyan(), source, score);
    }
    let average = movie
        .average
        .0
        .map_or_else(|| UNAVAILABLE.to_string(), |a| a.to_string());
    println!("{}Average: {}", "• ".cyan(), average.bold());

    if movie.streaming.is_empty() {
        println!("{}", "Not streaming on any flatrate service.".dimmed());
    } else {
        println!("{}", "Streaming on:".bold());
        for offer in &movie.streaming {
            println!("  - {}", offer.name);
        }
    }
}
