use log::debug;
use qdrant_client::qdrant::{Condition, Filter, ScoredPoint, SearchPointsBuilder};
use std::sync::Arc;
use verba_embed::{EmbeddingIntent, EmbeddingProvider};

use crate::constants::{
    FIELD_CHUNK_ID, FIELD_END_FORMATTED, FIELD_END_TIME, FIELD_START_FORMATTED, FIELD_START_TIME,
    FIELD_TEXT, FIELD_VIDEO_ID,
};
use crate::error::{Result, VerbaError};
use crate::qdrant_client_trait::QdrantClientTrait;
use crate::search::SearchResult;

/// Parameters for searching indexed transcripts.
pub struct SearchParams<'a, C> {
    /// Qdrant client instance.
    pub client: Arc<C>,
    /// Provider used to embed the query.
    pub provider: Arc<dyn EmbeddingProvider>,
    /// Name of the collection to search.
    pub collection_name: &'a str,
    /// Natural-language query text.
    pub query_text: &'a str,
    /// Maximum number of results to return.
    pub limit: u64,
    /// Optional: restrict matches to a single video.
    pub video_id: Option<&'a str>,
}

/// Performs a semantic search over indexed transcript chunks.
///
/// Embeds the query with query intent, issues a top-k cosine similarity
/// search with payloads included and maps each match back into a ranked,
/// time-anchored [`SearchResult`], preserving the store's descending score
/// order. An empty result set is valid and yields an empty vector.
pub async fn search_collection<C>(params: SearchParams<'_, C>) -> Result<Vec<SearchResult>>
where
    C: QdrantClientTrait + Send + Sync + 'static,
{
    if params.query_text.trim().is_empty() {
        return Err(VerbaError::InvalidParameter(
            "query text must not be empty".to_string(),
        ));
    }
    if params.limit == 0 {
        return Err(VerbaError::InvalidParameter(
            "limit must be greater than zero".to_string(),
        ));
    }

    debug!(
        "Searching collection \"{}\" for query: \"{}\" with limit {} (video filter: {:?})",
        params.collection_name, params.query_text, params.limit, params.video_id
    );

    let query_embedding = params
        .provider
        .embed(params.query_text, EmbeddingIntent::Query)
        .await?;

    let mut request =
        SearchPointsBuilder::new(params.collection_name, query_embedding, params.limit)
            .with_payload(true);
    if let Some(video_id) = params.video_id {
        request = request.filter(Filter::must([Condition::matches(
            FIELD_VIDEO_ID,
            video_id.to_string(),
        )]));
    }

    let response = params
        .client
        .search_points(request.into())
        .await
        .map_err(|e| VerbaError::SearchError(e.to_string()))?;

    response.result.iter().map(scored_point_to_result).collect()
}

/// Maps a scored Qdrant point back into a time-anchored search result.
fn scored_point_to_result(point: &ScoredPoint) -> Result<SearchResult> {
    let get_str = |field: &str| -> Result<String> {
        point
            .payload
            .get(field)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| {
                VerbaError::SearchError(format!("Match payload is missing field '{field}'"))
            })
    };
    let get_f64 = |field: &str| -> Result<f64> {
        point
            .payload
            .get(field)
            .and_then(|v| v.as_double())
            .ok_or_else(|| {
                VerbaError::SearchError(format!("Match payload is missing field '{field}'"))
            })
    };

    Ok(SearchResult {
        video_id: get_str(FIELD_VIDEO_ID)?,
        chunk_id: get_str(FIELD_CHUNK_ID)?,
        text: get_str(FIELD_TEXT)?,
        start_time: get_f64(FIELD_START_TIME)?,
        end_time: get_f64(FIELD_END_TIME)?,
        start_formatted: get_str(FIELD_START_FORMATTED)?,
        end_formatted: get_str(FIELD_END_FORMATTED)?,
        score: point.score,
    })
}
