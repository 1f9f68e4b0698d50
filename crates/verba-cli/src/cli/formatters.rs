// Formatters for displaying search results.
use anyhow::Result;
use colored::*;

use verba_search::SearchResult;

/// Formats search results for display, handling both JSON and human-readable output.
pub fn print_search_results(
    results: &[SearchResult],
    query_text: &str,
    json_output: bool,
) -> Result<()> {
    if results.is_empty() {
        if json_output {
            println!("[]"); // Output empty JSON array
        } else {
            println!("No results found for query: \"{query_text}\"");
        }
        return Ok(());
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    println!("Results for \"{}\":\n", query_text.bold());
    for (rank, result) in results.iter().enumerate() {
        println!(
            "{}. {} {}  {}",
            rank + 1,
            result.video_id.cyan(),
            format!("[{} - {}]", result.start_formatted, result.end_formatted).green(),
            format!("score {:.3}", result.score).yellow()
        );
        println!("   {}\n", result.text);
    }
    Ok(())
}
