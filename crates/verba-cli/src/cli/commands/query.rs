use anyhow::{Context, Result};
use clap::Args;
use std::sync::Arc;

use crate::cli::formatters::print_search_results;
use verba_search::{search_collection, AppConfig, QdrantClientTrait, SearchParams};

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// The search query string.
    #[arg(required = true)]
    pub query: String,

    /// Maximum number of results to return.
    #[arg(short, long, default_value_t = 5)]
    pub limit: u64,

    /// Optional: restrict matches to a single video.
    #[arg(long)]
    pub video_id: Option<String>,

    /// Output results in JSON format.
    #[arg(long)]
    pub json: bool,
}

pub async fn handle_query<C>(args: QueryArgs, config: &AppConfig, client: Arc<C>) -> Result<()>
where
    C: QdrantClientTrait + Send + Sync + 'static,
{
    let provider = super::build_provider(config)?;

    let results = search_collection(SearchParams {
        client,
        provider,
        collection_name: &config.collection_name,
        query_text: &args.query,
        limit: args.limit,
        video_id: args.video_id.as_deref(),
    })
    .await
    .with_context(|| format!("Search failed for query '{}'", args.query))?;

    print_search_results(&results, &args.query, args.json)
}
