//! Utilities specific to testing within the core library.

use async_trait::async_trait;
use qdrant_client::qdrant::{
    CollectionInfo, CountPoints, CountResponse, CountResult, DeletePoints, HealthCheckReply,
    PointStruct, PointsOperationResponse, SearchPoints, SearchResponse, UpdateResult,
    UpdateStatus, UpsertPoints,
};
use std::sync::Mutex;

use crate::error::{Result, VerbaError};
use crate::qdrant_client_trait::QdrantClientTrait;

/// In-memory mock of [`QdrantClientTrait`] recording calls for assertions.
#[derive(Default)]
pub struct MockQdrantClient {
    /// Points received through `upsert_points`, in arrival order.
    pub upserted: Mutex<Vec<PointStruct>>,
    /// Delete requests received through `delete_points`.
    pub delete_requests: Mutex<Vec<DeletePoints>>,
    /// Collections reported as existing by `collection_exists`.
    pub existing_collections: Mutex<Vec<String>>,
    /// Collection creations requested through `create_collection`.
    pub created_collections: Mutex<Vec<(String, u64)>>,
    /// Canned response returned by `search_points`.
    pub search_response: Mutex<Option<SearchResponse>>,
    /// When set, upsert/search/delete calls fail with this message.
    pub fail_with: Mutex<Option<String>>,
}

impl MockQdrantClient {
    fn maybe_fail(&self) -> Result<()> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(VerbaError::QdrantOperationError(message));
        }
        Ok(())
    }

    fn ok_operation_response() -> PointsOperationResponse {
        PointsOperationResponse {
            result: Some(UpdateResult {
                operation_id: Some(1),
                status: UpdateStatus::Completed as i32,
            }),
            ..Default::default()
        }
    }
}

#[async_trait]
impl QdrantClientTrait for MockQdrantClient {
    async fn health_check(&self) -> Result<HealthCheckReply> {
        Ok(HealthCheckReply::default())
    }

    async fn collection_exists(&self, collection_name: String) -> Result<bool> {
        Ok(self
            .existing_collections
            .lock()
            .unwrap()
            .contains(&collection_name))
    }

    async fn create_collection(
        &self,
        collection_name: &str,
        vector_dimension: u64,
    ) -> Result<bool> {
        self.maybe_fail()?;
        self.created_collections
            .lock()
            .unwrap()
            .push((collection_name.to_string(), vector_dimension));
        self.existing_collections
            .lock()
            .unwrap()
            .push(collection_name.to_string());
        Ok(true)
    }

    async fn delete_collection(&self, collection_name: String) -> Result<bool> {
        self.existing_collections
            .lock()
            .unwrap()
            .retain(|name| name != &collection_name);
        Ok(true)
    }

    async fn get_collection_info(&self, _collection_name: String) -> Result<CollectionInfo> {
        Ok(CollectionInfo::default())
    }

    async fn count(&self, _request: CountPoints) -> Result<CountResponse> {
        Ok(CountResponse {
            result: Some(CountResult {
                count: self.upserted.lock().unwrap().len() as u64,
            }),
            ..Default::default()
        })
    }

    async fn upsert_points(&self, request: UpsertPoints) -> Result<PointsOperationResponse> {
        self.maybe_fail()?;
        self.upserted.lock().unwrap().extend(request.points);
        Ok(Self::ok_operation_response())
    }

    async fn search_points(&self, _request: SearchPoints) -> Result<SearchResponse> {
        self.maybe_fail()?;
        Ok(self
            .search_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_default())
    }

    async fn delete_points(&self, request: DeletePoints) -> Result<PointsOperationResponse> {
        self.maybe_fail()?;
        self.delete_requests.lock().unwrap().push(request);
        Ok(Self::ok_operation_response())
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        Ok(self.existing_collections.lock().unwrap().clone())
    }
}
