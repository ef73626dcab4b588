use anyhow::Result;
use clap::Parser;
use stay_scout::cli::Cli;
use stay_scout::filter::{CriteriaUpdate, ListingFilter};
use stay_scout::models::Listing;
use stay_scout::session::SearchSession;
use stay_scout::sources::{JsonFileListings, ListingSource, SampleListings, COMMON_AMENITIES};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source: Box<dyn ListingSource> = match &cli.listings {
        Some(path) => Box::new(JsonFileListings::new(path)),
        None => Box::new(SampleListings::default()),
    };
    info!("🏠 Stay Scout - loading listings from {}", source.source_name());
    let listings = source.load().await?;

    let mut filter = ListingFilter::new(listings);
    let mut pending = cli.pending_criteria();
    filter.apply_pending(&mut pending);

    if cli.interactive {
        return run_interactive(filter, &cli).await;
    }

    let results = filter.current_results();
    info!(
        "✅ {} of {} listings match",
        results.len(),
        filter.listings().len()
    );
    print_results(&results, cli.json)
}

async fn run_interactive(filter: ListingFilter, cli: &Cli) -> Result<()> {
    info!(
        "Enter field=value edits (query, location, price, type, rating, amenities), {}",
        "`reset` or `quit`"
    );
    info!("Common amenities: {}", COMMON_AMENITIES.join(", "));

    let session = SearchSession::spawn(filter, cli.quiescence());
    let mut results = session.results();
    let json = cli.json;

    let printer = tokio::spawn(async move {
        while results.changed().await.is_ok() {
            let snapshot = results.borrow_and_update().clone();
            let listings: Vec<&Listing> = snapshot.listings.iter().collect();
            println!("--- results #{} ---", snapshot.generation);
            if let Err(e) = print_results(&listings, json) {
                warn!("Could not print results: {:?}", e);
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            "reset" => session.reset(),
            _ => match line.parse::<CriteriaUpdate>() {
                Ok(update) => session.update(update),
                Err(e) => warn!("Skipping {:?}: {}", line, e),
            },
        }
    }

    let filter = session.shutdown().await?;
    printer.await?;
    info!("Final criteria: {:?}", filter.criteria());
    Ok(())
}

fn print_results(listings: &[&Listing], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(listings)?);
        return Ok(());
    }

    for (i, listing) in listings.iter().enumerate() {
        println!("{}. {} (${}/night)", i + 1, listing.title, listing.price);
        println!("   {} · {}", listing.location, listing.property_type);
        println!(
            "   ★ {:.1} ({} reviews), {} guests, {} bd / {} ba",
            listing.rating,
            listing.review_count,
            listing.max_guests,
            listing.bedrooms,
            listing.bathrooms
        );
        println!("   Amenities: {}", listing.amenities.join(", "));
        println!("   ID: {}", listing.id);
        println!();
    }
    Ok(())
}
