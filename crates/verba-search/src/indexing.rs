//! Core logic for indexing video transcripts.
//!
//! A transcript is chunked, every chunk embedded with document intent and
//! upserted into the collection under a stable, ordinal-derived identifier.
//! Embedding requests run with bounded concurrency; any chunk failure
//! aborts the call naming the failing ordinal.

use futures::stream::{self, StreamExt, TryStreamExt};
use log::{debug, info};
use qdrant_client::qdrant::PointStruct;
use qdrant_client::Payload;
use std::sync::Arc;
use uuid::Uuid;
use verba_embed::{EmbeddingIntent, EmbeddingProvider};

use crate::chunker::{chunk_entries, TranscriptChunk};
use crate::constants::{
    FIELD_CHUNK_ID, FIELD_CHUNK_ORDINAL, FIELD_END_FORMATTED, FIELD_END_TIME,
    FIELD_START_FORMATTED, FIELD_START_TIME, FIELD_TEXT, FIELD_VIDEO_ID,
};
use crate::error::{Result, VerbaError};
use crate::qdrant_client_trait::QdrantClientTrait;
use crate::qdrant_ops::{delete_video_points, ensure_collection, upsert_batch};
use crate::transcript::CaptionEntry;

/// Derives the stable chunk identifier `<video_id>_chunk_<ordinal>`.
pub fn chunk_id(video_id: &str, ordinal: usize) -> String {
    format!("{video_id}_chunk_{ordinal}")
}

/// Derives the Qdrant point id for a chunk.
///
/// Qdrant point ids must be UUIDs or unsigned integers, so the readable
/// chunk id is mapped through UUIDv5 and itself stored in the payload.
/// The mapping is deterministic: re-indexing overwrites instead of
/// duplicating.
pub fn chunk_point_id(video_id: &str, ordinal: usize) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, chunk_id(video_id, ordinal).as_bytes()).to_string()
}

/// Parameters for indexing a single video transcript.
pub struct IndexTranscriptParams<'a, C> {
    /// Qdrant client instance.
    pub client: Arc<C>,
    /// Provider used for document embeddings.
    pub provider: Arc<dyn EmbeddingProvider>,
    /// Name of the collection receiving the points.
    pub collection_name: &'a str,
    /// Identifier of the source video.
    pub video_id: &'a str,
    /// Ordered caption entries of the transcript.
    pub entries: &'a [CaptionEntry],
    /// Number of consecutive captions merged into one chunk.
    pub chunk_size: usize,
    /// Maximum in-flight embedding requests.
    pub max_concurrent_requests: usize,
    /// Number of points per upsert batch.
    pub batch_size: usize,
}

/// Indexes a transcript into the vector store and returns the number of
/// chunks written.
///
/// Re-running with an unchanged chunk size is idempotent: point ids derive
/// from chunk ordinals, and the video's previous points are deleted first
/// so a reduced chunk count cannot leave stale ordinals behind. Points
/// upserted before a failure are not rolled back.
pub async fn index_transcript<C>(params: IndexTranscriptParams<'_, C>) -> Result<usize>
where
    C: QdrantClientTrait + Send + Sync + 'static,
{
    if params.max_concurrent_requests == 0 {
        return Err(VerbaError::InvalidParameter(
            "max_concurrent_requests must be greater than zero".to_string(),
        ));
    }
    if params.batch_size == 0 {
        return Err(VerbaError::InvalidParameter(
            "batch_size must be greater than zero".to_string(),
        ));
    }

    let chunks = chunk_entries(params.entries, params.chunk_size)?;
    if chunks.is_empty() {
        info!(
            "Transcript for video '{}' produced no chunks; nothing to index.",
            params.video_id
        );
        return Ok(0);
    }

    ensure_collection(
        params.client.clone(),
        params.collection_name,
        params.provider.dimension() as u64,
    )
    .await?;
    delete_video_points(params.client.clone(), params.collection_name, params.video_id).await?;

    debug!(
        "Embedding {} chunks for video '{}' ({} concurrent requests)",
        chunks.len(),
        params.video_id,
        params.max_concurrent_requests
    );

    let video_id = params.video_id;
    let provider = &params.provider;
    let mut points: Vec<(usize, PointStruct)> = stream::iter(chunks.iter().enumerate())
        .map(|(ordinal, chunk)| {
            let provider = provider.clone();
            async move {
                let embedding = provider
                    .embed(&chunk.text, EmbeddingIntent::Document)
                    .await
                    .map_err(|e| VerbaError::IndexingError {
                        video_id: video_id.to_string(),
                        ordinal,
                        message: e.to_string(),
                    })?;
                Ok::<_, VerbaError>((ordinal, build_point(video_id, ordinal, chunk, embedding)))
            }
        })
        .buffer_unordered(params.max_concurrent_requests)
        .try_collect()
        .await?;

    // buffer_unordered yields in completion order; restore ordinal order.
    points.sort_by_key(|(ordinal, _)| *ordinal);

    let total = points.len();
    for (batch_index, batch) in points.chunks(params.batch_size).enumerate() {
        let batch_points = batch.iter().map(|(_, point)| point.clone()).collect();
        upsert_batch(params.client.clone(), params.collection_name, batch_points)
            .await
            .map_err(|e| VerbaError::IndexingError {
                video_id: video_id.to_string(),
                ordinal: batch_index * params.batch_size,
                message: format!("upsert failed: {e}"),
            })?;
    }

    info!("Indexed {total} chunks for video '{video_id}'");
    Ok(total)
}

/// Builds the Qdrant point carrying a chunk's vector and metadata.
fn build_point(
    video_id: &str,
    ordinal: usize,
    chunk: &TranscriptChunk,
    embedding: Vec<f32>,
) -> PointStruct {
    let mut payload = Payload::new();
    payload.insert(FIELD_VIDEO_ID, video_id.to_string());
    payload.insert(FIELD_CHUNK_ID, chunk_id(video_id, ordinal));
    payload.insert(FIELD_CHUNK_ORDINAL, ordinal as i64);
    payload.insert(FIELD_TEXT, chunk.text.clone());
    payload.insert(FIELD_START_TIME, chunk.start_time);
    payload.insert(FIELD_END_TIME, chunk.end_time);
    payload.insert(FIELD_START_FORMATTED, chunk.start_formatted.clone());
    payload.insert(FIELD_END_FORMATTED, chunk.end_formatted.clone());

    PointStruct::new(chunk_point_id(video_id, ordinal), embedding, payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockQdrantClient;
    use async_trait::async_trait;
    use verba_embed::error::VerbaEmbedError;
    use verba_embed::DefaultEmbeddingProvider;

    fn entries(count: usize) -> Vec<CaptionEntry> {
        (0..count)
            .map(|i| CaptionEntry {
                text: format!("caption {i}"),
                start: i as f64 * 2.0,
                duration: 2.0,
            })
            .collect()
    }

    fn params<'a, C>(
        client: Arc<C>,
        provider: Arc<dyn EmbeddingProvider>,
        entries: &'a [CaptionEntry],
    ) -> IndexTranscriptParams<'a, C> {
        IndexTranscriptParams {
            client,
            provider,
            collection_name: "videos",
            video_id: "vid1",
            entries,
            chunk_size: 3,
            max_concurrent_requests: 4,
            batch_size: 64,
        }
    }

    #[test]
    fn test_chunk_id_format() {
        assert_eq!(chunk_id("abc", 0), "abc_chunk_0");
        assert_eq!(chunk_id("abc", 12), "abc_chunk_12");
    }

    #[test]
    fn test_chunk_point_id_deterministic_and_distinct() {
        assert_eq!(chunk_point_id("abc", 0), chunk_point_id("abc", 0));
        assert_ne!(chunk_point_id("abc", 0), chunk_point_id("abc", 1));
        assert_ne!(chunk_point_id("abc", 0), chunk_point_id("abd", 0));
    }

    #[tokio::test]
    async fn test_empty_transcript_indexes_nothing() {
        let client = Arc::new(MockQdrantClient::default());
        let provider = Arc::new(DefaultEmbeddingProvider::new(8)) as Arc<dyn EmbeddingProvider>;
        let indexed = index_transcript(params(client.clone(), provider, &[]))
            .await
            .unwrap();
        assert_eq!(indexed, 0);
        assert!(client.upserted.lock().unwrap().is_empty());
        assert!(client.delete_requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_index_counts_and_clears_previous_points() {
        let client = Arc::new(MockQdrantClient::default());
        let provider = Arc::new(DefaultEmbeddingProvider::new(8)) as Arc<dyn EmbeddingProvider>;
        let captions = entries(7);
        let indexed = index_transcript(params(client.clone(), provider, &captions))
            .await
            .unwrap();
        assert_eq!(indexed, 3); // ceil(7 / 3)
        assert_eq!(client.upserted.lock().unwrap().len(), 3);
        // Collection created with the provider dimension, old points removed.
        assert_eq!(
            client.created_collections.lock().unwrap().as_slice(),
            &[("videos".to_string(), 8)]
        );
        assert_eq!(client.delete_requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_reindex_produces_identical_point_ids() {
        let client = Arc::new(MockQdrantClient::default());
        let provider = Arc::new(DefaultEmbeddingProvider::new(8)) as Arc<dyn EmbeddingProvider>;
        let captions = entries(6);

        index_transcript(params(client.clone(), provider.clone(), &captions))
            .await
            .unwrap();
        let first_ids: Vec<_> = client
            .upserted
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.id.clone())
            .collect();
        client.upserted.lock().unwrap().clear();

        index_transcript(params(client.clone(), provider, &captions))
            .await
            .unwrap();
        let second_ids: Vec<_> = client
            .upserted
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.id.clone())
            .collect();

        assert_eq!(first_ids, second_ids);
    }

    /// Provider whose embed calls always fail, for exercising the failure path.
    #[derive(Debug)]
    struct FailingProvider;

    #[async_trait]
    impl EmbeddingProvider for FailingProvider {
        fn dimension(&self) -> usize {
            8
        }

        async fn embed(
            &self,
            _text: &str,
            _intent: EmbeddingIntent,
        ) -> verba_embed::error::Result<Vec<f32>> {
            Err(VerbaEmbedError::provider("backend down"))
        }
    }

    #[tokio::test]
    async fn test_embed_failure_reports_ordinal() {
        let client = Arc::new(MockQdrantClient::default());
        let provider = Arc::new(FailingProvider) as Arc<dyn EmbeddingProvider>;
        let captions = entries(3);
        let err = index_transcript(params(client.clone(), provider, &captions))
            .await
            .unwrap_err();
        match err {
            VerbaError::IndexingError {
                video_id, ordinal, ..
            } => {
                assert_eq!(video_id, "vid1");
                assert_eq!(ordinal, 0);
            }
            other => panic!("expected IndexingError, got {other:?}"),
        }
        // Nothing reached the store.
        assert!(client.upserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_zero_concurrency_rejected() {
        let client = Arc::new(MockQdrantClient::default());
        let provider = Arc::new(DefaultEmbeddingProvider::new(8)) as Arc<dyn EmbeddingProvider>;
        let captions = entries(3);
        let mut p = params(client, provider, &captions);
        p.max_concurrent_requests = 0;
        assert!(matches!(
            index_transcript(p).await,
            Err(VerbaError::InvalidParameter(_))
        ));
    }
}
