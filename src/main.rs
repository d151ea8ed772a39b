use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use respondex::core::config::Config;
use respondex::core::engine::Engine;
use respondex::core::types::ScoredSentence;
use respondex::provider::{PlainTextProvider, TextProvider};

#[derive(Parser)]
#[command(
    name = "respondex",
    about = "Answers Spanish questions against a single document by TF-IDF sentence ranking"
)]
struct Args {
    /// Path to the source document (plain UTF-8 text)
    document: PathBuf,

    /// JSON config file overriding engine defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Answer a single question and exit instead of prompting on stdin
    #[arg(short, long)]
    question: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    let provider = PlainTextProvider::new(&args.document);
    let text = provider.extract()?;

    let engine = Engine::new(config);
    let index = engine.index(&text);
    tracing::debug!(
        threshold = engine.config().score_threshold,
        "engine ready"
    );

    let query = match args.question {
        Some(question) => question,
        None => {
            println!("Pregunta en español:");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        }
    };
    let query = query.trim();

    println!("Respuesta relevante:");
    match engine.answer(&index, query) {
        Some(ScoredSentence { score, text, .. }) => println!("- {:.2}: {}", score, text.trim()),
        None => println!("Sin respuesta relevante."),
    }

    Ok(())
}
