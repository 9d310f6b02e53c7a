use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use movie_recommender::{config, Catalog, Recommendation, RecommendError, SimilarityIndex};
use tracing_subscriber::EnvFilter;

const RULE_WIDTH: usize = 80;

#[derive(Parser)]
#[command(name = "movie-recommender", about = "Content-based movie recommendations")]
struct Args {
    /// JSON catalog file (array of movie records); the built-in sample is used when omitted
    #[arg(short, long, env = config::CATALOG_ENV)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Recommend movies similar to TITLE
    Recommend {
        title: String,
        /// Number of recommendations
        #[arg(short = 'n', long, default_value_t = config::DEFAULT_TOP_N as i64, allow_negative_numbers = true)]
        top_n: i64,
        /// Print JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Show all movies in the catalog
    List,
    /// Menu-driven session (default)
    Interactive,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_DIRECTIVE)),
        )
        .init();

    let args = Args::parse();

    let index = match load_index(args.catalog.as_deref()) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match args.command.unwrap_or(Command::Interactive) {
        Command::Recommend { title, top_n, json } => run_recommend(&index, &title, top_n, json, &mut out),
        Command::List => show_all_movies(&index, &mut out).map_err(Into::into),
        Command::Interactive => interactive(&index, io::stdin().lock(), &mut out).map_err(Into::into),
    };
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn load_index(path: Option<&std::path::Path>) -> movie_recommender::Result<SimilarityIndex> {
    let catalog = match path {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::sample(),
    };
    SimilarityIndex::build(catalog)
}

/// Query errors are reported to the user; only I/O and encoding failures propagate.
fn run_recommend(
    index: &SimilarityIndex,
    title: &str,
    top_n: i64,
    json: bool,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match index.recommend(title, top_n) {
        Ok(recommendations) if json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&recommendations)?)?;
        }
        Ok(recommendations) => display_recommendations(title, &recommendations, out)?,
        Err(e) => report_query_error(title, &e, out)?,
    }
    Ok(())
}

fn report_query_error(title: &str, err: &RecommendError, out: &mut impl Write) -> io::Result<()> {
    match err {
        RecommendError::NotFound(_) => writeln!(out, "\nMovie '{title}' not found in database!"),
        other => writeln!(out, "\n{other}"),
    }
}

fn interactive(index: &SimilarityIndex, mut input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "MOVIE RECOMMENDATION SYSTEM")?;
    writeln!(out, "Total movies in database: {}", index.len())?;

    loop {
        writeln!(out, "\n{rule}")?;
        writeln!(out, "OPTIONS:")?;
        writeln!(out, "1. Get recommendations for a movie")?;
        writeln!(out, "2. Show all available movies")?;
        writeln!(out, "3. Exit")?;
        writeln!(out, "{rule}")?;

        let Some(choice) = prompt(&mut input, out, "\nEnter your choice (1-3): ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                let Some(title) = prompt(&mut input, out, "\nEnter movie title: ")? else {
                    return Ok(());
                };
                let Some(count) = prompt(&mut input, out, "How many recommendations? (default 5): ")? else {
                    return Ok(());
                };
                let top_n = if count.is_empty() {
                    config::DEFAULT_TOP_N as i64
                } else {
                    match count.parse::<i64>() {
                        Ok(n) => n,
                        Err(_) => {
                            writeln!(out, "\nInvalid number: '{count}'")?;
                            continue;
                        }
                    }
                };
                match index.recommend(&title, top_n) {
                    Ok(recommendations) => display_recommendations(&title, &recommendations, out)?,
                    Err(e) => report_query_error(&title, &e, out)?,
                }
            }
            "2" => show_all_movies(index, out)?,
            "3" => {
                writeln!(out, "\nThank you for using Movie Recommendation System!")?;
                return Ok(());
            }
            _ => writeln!(out, "\nInvalid choice! Please enter 1, 2, or 3.")?,
        }
    }
}

/// Print `message`, read one trimmed line. `None` at end of input.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, message: &str) -> io::Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn display_recommendations(title: &str, recommendations: &[Recommendation], out: &mut impl Write) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "RECOMMENDATIONS BASED ON: {title}")?;
    writeln!(out, "{rule}")?;

    if recommendations.is_empty() {
        return writeln!(out, "\nNo recommendations found!");
    }
    for rec in recommendations {
        writeln!(out, "\n{}", rec.title)?;
        writeln!(out, "   Genre: {}", rec.genre)?;
        writeln!(out, "   Director: {}", rec.director)?;
        writeln!(out, "   Rating: {:.1}/10", rec.rating)?;
        writeln!(out, "   Year: {}", rec.year)?;
        writeln!(out, "   Similarity Score: {:.2}%", rec.score * 100.0)?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    }
    Ok(())
}

fn show_all_movies(index: &SimilarityIndex, out: &mut impl Write) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "AVAILABLE MOVIES IN DATABASE")?;
    writeln!(out, "{rule}")?;
    for (idx, movie) in index.catalog().iter().enumerate() {
        writeln!(
            out,
            "{}. {} ({}) - {} - {:.1}",
            idx + 1,
            movie.title,
            movie.year,
            movie.genre,
            movie.rating
        )?;
    }
    writeln!(out, "{rule}\n")
}
