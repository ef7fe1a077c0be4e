use anyhow::{Context, Result};
use catalog::{Catalog, LoadOptions};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use recommend::{recommend_for_user, similar_movies};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use synth::{default_profiles, HistoryGenerator, Interaction};

/// ViewLens - movie catalog analytics & synthetic viewing history
#[derive(Parser)]
#[command(name = "viewlens")]
#[command(about = "Movie catalog statistics, synthetic viewing history and genre-based recommendations", long_about = None)]
struct Cli {
    /// Path to the movie catalog CSV
    #[arg(short, long, default_value = "data/movies.csv")]
    catalog: PathBuf,

    /// Analyze only the first N catalog rows
    #[arg(long)]
    max_movies: Option<usize>,

    /// RNG seed for history synthesis (same seed, same history)
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Synthetic interactions per user
    #[arg(long, default_value = "60")]
    per_user: usize,

    /// Sample uniformly instead of biasing toward preferred genres
    #[arg(long)]
    no_genre_bias: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show headline metrics over the synthetic history
    Overview,

    /// Genre popularity: views and average rating per split genre
    Genres,

    /// Top movies by weighted score (rating + log views)
    TopMovies {
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Per-user behaviour profiles
    Users,

    /// Monthly viewing trend
    Trends,

    /// Preview one user's viewing history
    History {
        /// User ID, e.g. U01
        #[arg(long)]
        user: String,

        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Genre-based recommendations for a user
    Recommend {
        /// User ID, e.g. U01
        #[arg(long)]
        user: String,

        #[arg(long, default_value = "7")]
        limit: usize,
    },

    /// Movies similar to a given title
    Similar {
        /// Title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Write the synthetic interaction table to a file
    Export {
        #[arg(long)]
        out: PathBuf,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let options = LoadOptions {
        max_movies: cli.max_movies,
    };
    let catalog = Arc::new(
        catalog::load_csv(&cli.catalog, &options)
            .with_context(|| format!("failed to load catalog from {}", cli.catalog.display()))?,
    );
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    // The interaction table is rebuilt from scratch on every run
    let profiles = default_profiles();
    let history = HistoryGenerator::new(Arc::clone(&catalog))
        .with_seed(cli.seed)
        .with_per_user(cli.per_user)
        .with_genre_bias(!cli.no_genre_bias)
        .generate(&profiles)
        .context("failed to synthesize viewing history")?;

    match cli.command {
        Commands::Overview => handle_overview(&history),
        Commands::Genres => handle_genres(&catalog, &history),
        Commands::TopMovies { limit } => handle_top_movies(&history, limit),
        Commands::Users => handle_users(&history),
        Commands::Trends => handle_trends(&history),
        Commands::History { user, limit } => handle_history(&history, &user, limit)?,
        Commands::Recommend { user, limit } => {
            handle_recommend(Arc::clone(&catalog), &history, &user, limit)?
        }
        Commands::Similar { title, limit } => {
            handle_similar(Arc::clone(&catalog), &title, limit)?
        }
        Commands::Export { out, format } => handle_export(&history, &out, format)?,
    }

    Ok(())
}

fn handle_overview(history: &[Interaction]) {
    let kpis = analytics::kpis(history);

    println!("{}", "Platform Overview".bold().blue());
    println!("{}Users: {}", "• ".green(), kpis.users);
    println!("{}Movies watched: {}", "• ".green(), kpis.distinct_movies);
    println!("{}Avg rating: {:.2}", "• ".cyan(), kpis.avg_rating);
    println!(
        "{}Avg watch time: {} min",
        "• ".cyan(),
        kpis.avg_watch_minutes as u32
    );
}

fn handle_genres(catalog: &Catalog, history: &[Interaction]) {
    let stats = analytics::genre_popularity(history);

    println!("{}", "Genre Popularity".bold().blue());
    println!(
        "{:<16} {:>6} {:>12} {:>10}",
        "Genre", "Views", "Avg Rating", "In Catalog"
    );
    for stat in stats {
        println!(
            "{:<16} {:>6} {:>12.2} {:>10}",
            stat.genre,
            stat.views,
            stat.avg_rating,
            catalog.movies_in_genre(&stat.genre).len()
        );
    }
}

fn handle_top_movies(history: &[Interaction], limit: usize) {
    let top = analytics::top_movies(history, limit);

    println!("{}", "Top Movies (Weighted Score)".bold().blue());
    for (rank, score) in top.iter().enumerate() {
        println!(
            "{}. {} - score {:.2} (avg {:.2}, {} views)",
            (rank + 1).to_string().green(),
            score.title,
            score.weighted_score,
            score.avg_rating,
            score.views
        );
    }
}

fn handle_users(history: &[Interaction]) {
    let profiles = analytics::user_profiles(history);

    println!("{}", "User Behaviour".bold().blue());
    for p in profiles {
        println!(
            "{} watched {} movies, avg rating {:.2}, avg watch {} min, favorite genre {}",
            p.user_id.bold(),
            p.movies_watched,
            p.avg_rating,
            p.avg_watch_minutes as u32,
            p.favorite_genre.as_deref().unwrap_or("-")
        );
    }
}

fn handle_trends(history: &[Interaction]) {
    let trend = analytics::monthly_views(history);

    println!("{}", "Monthly Viewing Trend".bold().blue());
    for month in trend {
        println!("{:<8} {}", month.month, month.views);
    }
}

fn handle_history(history: &[Interaction], user: &str, limit: usize) -> Result<()> {
    let rows: Vec<&Interaction> = history.iter().filter(|i| i.user_id == user).collect();
    if rows.is_empty() {
        anyhow::bail!("user {} has no viewing history", user);
    }

    println!("{}", format!("Viewing history for {}", user).bold().blue());
    for it in rows.iter().take(limit) {
        println!(
            "{} {} [{}] rating {:.1}, {} min",
            it.watch_date,
            it.title,
            it.genres,
            it.rating,
            it.watch_minutes
        );
    }
    if rows.len() > limit {
        println!("... and {} more", rows.len() - limit);
    }
    Ok(())
}

fn handle_recommend(
    catalog: Arc<Catalog>,
    history: &[Interaction],
    user: &str,
    limit: usize,
) -> Result<()> {
    let recs = recommend_for_user(catalog, history, user, limit)?;

    println!(
        "{}",
        format!("Recommendations for {}", recs.user_id).bold().blue()
    );
    if let Some(genre) = &recs.favorite_genre {
        println!("{}Favorite genre: {}", "• ".green(), genre.bold());
    }
    if recs.items.is_empty() {
        println!("Nothing left to recommend, the user has seen it all.");
        return Ok(());
    }
    for (rank, item) in recs.items.iter().enumerate() {
        println!(
            "{}. {} [{}] - rating {:.1}",
            (rank + 1).to_string().green(),
            item.title,
            item.genres,
            item.base_rating
        );
    }
    Ok(())
}

fn handle_similar(catalog: Arc<Catalog>, title: &str, limit: usize) -> Result<()> {
    let similar = similar_movies(catalog, title, limit)?;

    println!(
        "{}",
        format!(
            "Movies similar to {} [{}] (rating {:.1})",
            similar.anchor.title, similar.anchor.genres, similar.anchor.base_rating
        )
        .bold()
        .blue()
    );
    for (rank, item) in similar.items.iter().enumerate() {
        println!(
            "{}. {} [{}] - rating {:.1}",
            (rank + 1).to_string().green(),
            item.title,
            item.genres,
            item.base_rating
        );
    }
    Ok(())
}

fn handle_export(history: &[Interaction], out: &PathBuf, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_path(out)
                .with_context(|| format!("failed to create {}", out.display()))?;
            for it in history {
                writer.serialize(it)?;
            }
            writer.flush()?;
        }
        ExportFormat::Json => {
            let file = File::create(out)
                .with_context(|| format!("failed to create {}", out.display()))?;
            serde_json::to_writer_pretty(file, history)?;
        }
    }
    println!(
        "{} Wrote {} interactions to {}",
        "✓".green(),
        history.len(),
        out.display()
    );
    Ok(())
}
