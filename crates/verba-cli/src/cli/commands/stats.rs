use anyhow::Result;
use clap::Args;
use colored::*;
use qdrant_client::qdrant::CountPoints;
use std::sync::Arc;

use verba_search::{AppConfig, QdrantClientTrait};

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {}

pub async fn handle_stats<C>(_args: StatsArgs, config: &AppConfig, client: Arc<C>) -> Result<()>
where
    C: QdrantClientTrait + Send + Sync + 'static,
{
    client.health_check().await?;
    println!("Qdrant:     {}", config.qdrant_url.cyan());
    println!("Collection: {}", config.collection_name.cyan());

    if !client
        .collection_exists(config.collection_name.clone())
        .await?
    {
        println!(
            "{}",
            "Collection does not exist yet; index a video first.".yellow()
        );
        return Ok(());
    }

    let response = client
        .count(CountPoints {
            collection_name: config.collection_name.clone(),
            exact: Some(true),
            ..Default::default()
        })
        .await?;
    let count = response.result.map(|r| r.count).unwrap_or(0);
    println!("Chunks:     {count}");
    Ok(())
}
