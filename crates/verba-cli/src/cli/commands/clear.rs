use anyhow::Result;
use clap::Args;
use colored::*;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use verba_search::{AppConfig, QdrantClientTrait};

#[derive(Args, Debug, Clone)]
pub struct ClearArgs {
    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

pub async fn handle_clear<C>(args: ClearArgs, config: &AppConfig, client: Arc<C>) -> Result<()>
where
    C: QdrantClientTrait + Send + Sync + 'static,
{
    if !client
        .collection_exists(config.collection_name.clone())
        .await?
    {
        println!(
            "Collection '{}' does not exist; nothing to clear.",
            config.collection_name
        );
        return Ok(());
    }

    if !args.yes {
        print!(
            "Delete collection '{}' and everything indexed in it? [y/N] ",
            config.collection_name.cyan()
        );
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    client
        .delete_collection(config.collection_name.clone())
        .await?;
    println!(
        "{} Deleted collection '{}'",
        "✓".green().bold(),
        config.collection_name.cyan()
    );
    Ok(())
}
