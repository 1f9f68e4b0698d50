//! Operations specific to Qdrant interactions, like upserting and deleting points.

use crate::constants::FIELD_VIDEO_ID;
use crate::error::{Result, VerbaError};
use crate::qdrant_client_trait::QdrantClientTrait;
use log;
use qdrant_client::qdrant::{
    points_selector::PointsSelectorOneOf, Condition, DeletePointsBuilder, Filter, PointStruct,
    PointsOperationResponse, UpsertPointsBuilder,
};
use std::sync::Arc;

/// Ensures `collection_name` exists, creating it with `vector_dimension` when missing.
///
/// The dimension must match the embedding provider feeding the collection;
/// Qdrant rejects mismatched upserts at write time.
pub async fn ensure_collection<C>(
    client: Arc<C>,
    collection_name: &str,
    vector_dimension: u64,
) -> Result<()>
where
    C: QdrantClientTrait + Send + Sync + 'static,
{
    if client
        .collection_exists(collection_name.to_string())
        .await?
    {
        return Ok(());
    }

    log::info!("Creating collection '{collection_name}' with dimension {vector_dimension}");
    let created = client
        .create_collection(collection_name, vector_dimension)
        .await?;
    if !created {
        return Err(VerbaError::QdrantOperationError(format!(
            "Qdrant did not acknowledge creation of collection '{collection_name}'"
        )));
    }
    Ok(())
}

/// Upserts a batch of points into a Qdrant collection.
pub async fn upsert_batch<C: QdrantClientTrait>(
    client: Arc<C>,
    collection_name: &str,
    points: Vec<PointStruct>,
) -> Result<()> {
    if points.is_empty() {
        return Ok(());
    }
    log::debug!(
        "Upserting batch of {} points to \"{}\"",
        points.len(),
        collection_name
    );

    let upsert_builder = UpsertPointsBuilder::new(collection_name, points).wait(true);
    client.upsert_points(upsert_builder.into()).await?;
    Ok(())
}

/// Deletes every point belonging to `video_id` from the collection.
///
/// Runs before re-indexing a video so that a smaller chunk count cannot
/// leave stale ordinals behind. Waits for the operation to complete.
pub async fn delete_video_points<C>(
    client: Arc<C>,
    collection_name: &str,
    video_id: &str,
) -> Result<PointsOperationResponse>
where
    C: QdrantClientTrait + Send + Sync + 'static,
{
    log::debug!("Deleting existing points for video '{video_id}' from collection \"{collection_name}\"");

    let filter = Filter::must([Condition::matches(FIELD_VIDEO_ID, video_id.to_string())]);
    let delete_request = DeletePointsBuilder::new(collection_name)
        .points(PointsSelectorOneOf::Filter(filter))
        .wait(true);

    client.delete_points(delete_request.into()).await
}
