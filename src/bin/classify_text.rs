use anyhow::{bail, Context};
use clap::Parser;
use persona_tagger::utils::{logger, validation::Validate};
use persona_tagger::{app, CliConfig};

/// Classifies a piece of text once and prints the label.
#[derive(Debug, Parser)]
#[command(name = "classify_text")]
#[command(about = "Classify text into the content taxonomy from the command line")]
struct Args {
    #[command(flatten)]
    service: CliConfig,

    /// Text to classify; read from stdin when omitted
    text: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_logger(args.service.verbose, args.service.json_logs);

    let text = if args.text.is_empty() {
        std::io::read_to_string(std::io::stdin()).context("reading text from stdin")?
    } else {
        args.text.join(" ")
    };
    if text.trim().is_empty() {
        bail!("nothing to classify");
    }

    let config = args.service.resolve()?;
    config.validate()?;

    let gateway = app::build_gateway(&config)?;
    let result = gateway.classify_text(&text).await?;

    match result.known_category() {
        Some(category) => println!("✅ {}", category),
        None => println!("⚠️ {} (not in taxonomy)", result.category),
    }

    Ok(())
}
