use std::sync::Arc;

use bookhive::{
    client::HttpRecommendationClient,
    telemetry::init_tracing,
    ui::{BookList, FormInputs, Notifier, SearchController, SearchOutcome},
};
use clap::Parser;

/// Fetch book recommendations from a BookHive server and print them as HTML cards
#[derive(Debug, Parser)]
#[command(name = "bookhive-search", version)]
struct Args {
    /// Free-text search query
    query: String,

    /// Comma-separated genres, e.g. "Fantasy, Young Adult"
    #[arg(short, long, default_value = "")]
    genres: String,

    /// Base URL of the BookHive server
    #[arg(long, env = "BOOKHIVE_SERVER", default_value = "http://127.0.0.1:3000")]
    server: String,
}

struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let controller = SearchController::new(Arc::new(HttpRecommendationClient::new(args.server)));
    let form = FormInputs::new(args.query, args.genres);
    let mut book_list = BookList::new();

    let outcome = controller
        .search(&form, &mut book_list, &mut StderrNotifier)
        .await;

    if let SearchOutcome::Rendered(_) = outcome {
        println!("{}", book_list.render().into_string());
    }
    tracing::debug!(?outcome, "Search finished");

    Ok(())
}
