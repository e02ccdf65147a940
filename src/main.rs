//! CourseBuddy - Main CLI entry point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use coursebuddy::catalog::{load_catalog, Catalog};
use coursebuddy::chatbot::Chatbot;
use coursebuddy::cli::{Args, Commands};
use coursebuddy::config::Config;
use coursebuddy::embedding::OllamaEmbedder;
use coursebuddy::repl::ReplSession;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = Config::load()?;
    args.apply_overrides(&mut config);

    if let Some(Commands::Config) = args.command {
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    // Catalog file absence is the only fatal startup condition;
    // malformed rows are warnings.
    let catalog_path = std::path::PathBuf::from(&config.catalog.path);
    let (mut courses, warnings) = load_catalog(&catalog_path)?;
    for warning in &warnings {
        println!("{}", format!("Warning: skipped {}", warning).yellow());
    }
    println!(
        "{}",
        format!("Loaded {} courses from {}", courses.len(), catalog_path.display()).cyan()
    );

    let mut embedder = None;
    if !args.no_embed {
        let candidate = OllamaEmbedder::new(
            &config.providers.ollama.base_url(),
            &config.providers.ollama.embed_model,
        )?;
        println!("{}", "Indexing courses...".cyan());
        match candidate.embed_catalog(&mut courses).await {
            Ok(count) => {
                println!("{}", format!("Indexed {} courses", count).cyan());
                embedder = Some(candidate);
            }
            Err(e) => {
                // Partial embeddings would mix score scales; strip them.
                for course in &mut courses {
                    course.embedding = None;
                }
                println!(
                    "{}",
                    format!("Warning: {}; continuing with lexical matching", e).yellow()
                );
            }
        }
    }

    let mut chatbot = Chatbot::new(Catalog::new(courses), &config)?;
    if let Some(embedder) = embedder {
        chatbot = chatbot.with_embedder(embedder);
    }

    match args.question {
        Some(question) => {
            match chatbot.ask(&question).await {
                Ok(answer) => println!("{}", answer),
                Err(e) => {
                    println!("{}", format!("Error: {}", e).red());
                    std::process::exit(1);
                }
            }
            Ok(())
        }
        None => ReplSession::new(chatbot)?.run().await,
    }
}
