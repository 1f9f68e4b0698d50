use async_trait::async_trait;
use qdrant_client::qdrant::{
    vectors_config::Config as VectorsConfig_oneof_config, CollectionInfo, CountPoints,
    CountResponse, CreateCollection, DeleteCollection, DeletePoints, Distance,
    GetCollectionInfoRequest, HealthCheckReply, PointsOperationResponse, SearchPoints,
    SearchResponse, UpsertPoints, VectorParamsBuilder, VectorsConfig,
};
use qdrant_client::Qdrant;

use crate::error::{Result, VerbaError};

#[async_trait]
/// Trait defining the interface for a Qdrant client.
/// This allows for mocking the client in tests.
pub trait QdrantClientTrait: Send + Sync {
    /// Checks the health of the Qdrant server.
    async fn health_check(&self) -> Result<HealthCheckReply>;
    /// Checks if a collection exists.
    async fn collection_exists(&self, collection_name: String) -> Result<bool>;
    /// Creates a new collection with a single dense cosine vector.
    async fn create_collection(&self, collection_name: &str, vector_dimension: u64)
        -> Result<bool>;
    /// Deletes a collection from the Qdrant server.
    async fn delete_collection(&self, collection_name: String) -> Result<bool>;
    /// Gets information about a collection.
    async fn get_collection_info(&self, collection_name: String) -> Result<CollectionInfo>;
    /// Counts the number of points in a collection.
    async fn count(&self, request: CountPoints) -> Result<CountResponse>;
    /// Upserts points into a collection.
    async fn upsert_points(&self, request: UpsertPoints) -> Result<PointsOperationResponse>;
    /// Searches for points in a collection.
    async fn search_points(&self, request: SearchPoints) -> Result<SearchResponse>;
    /// Deletes points from a collection.
    async fn delete_points(&self, request: DeletePoints) -> Result<PointsOperationResponse>;
    /// Lists all collections.
    async fn list_collections(&self) -> Result<Vec<String>>;
}

#[async_trait]
impl QdrantClientTrait for Qdrant {
    async fn health_check(&self) -> Result<HealthCheckReply> {
        self.health_check().await.map_err(VerbaError::from)
    }

    async fn collection_exists(&self, collection_name: String) -> Result<bool> {
        self.collection_exists(collection_name)
            .await
            .map_err(VerbaError::from)
    }

    async fn create_collection(
        &self,
        collection_name: &str,
        vector_dimension: u64,
    ) -> Result<bool> {
        // Single unnamed dense vector; cosine is the documented metric for
        // every collection this library creates.
        let dense_params = VectorParamsBuilder::new(vector_dimension, Distance::Cosine).build();
        let request = CreateCollection {
            collection_name: collection_name.to_string(),
            vectors_config: Some(VectorsConfig {
                config: Some(VectorsConfig_oneof_config::Params(dense_params)),
            }),
            ..Default::default()
        };

        let response = self
            .create_collection(request)
            .await
            .map_err(VerbaError::from)?;
        Ok(response.result)
    }

    async fn delete_collection(&self, collection_name: String) -> Result<bool> {
        let request = DeleteCollection {
            collection_name,
            ..Default::default()
        };
        Ok(self
            .delete_collection(request)
            .await
            .map_err(VerbaError::from)?
            .result)
    }

    async fn get_collection_info(&self, collection_name: String) -> Result<CollectionInfo> {
        let request = GetCollectionInfoRequest {
            collection_name: collection_name.clone(),
        };
        let response = self.collection_info(request).await.map_err(VerbaError::from)?;
        match response.result {
            Some(info) => Ok(info),
            None => Err(VerbaError::QdrantOperationError(format!(
                "Collection info not found for '{collection_name}'"
            ))),
        }
    }

    async fn count(&self, request: CountPoints) -> Result<CountResponse> {
        self.count(request).await.map_err(VerbaError::from)
    }

    async fn upsert_points(&self, request: UpsertPoints) -> Result<PointsOperationResponse> {
        self.upsert_points(request).await.map_err(VerbaError::from)
    }

    async fn search_points(&self, request: SearchPoints) -> Result<SearchResponse> {
        self.search_points(request).await.map_err(VerbaError::from)
    }

    async fn delete_points(&self, request: DeletePoints) -> Result<PointsOperationResponse> {
        self.delete_points(request).await.map_err(VerbaError::from)
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        let response = self.list_collections().await.map_err(VerbaError::from)?;
        let collection_names = response
            .collections
            .into_iter()
            .map(|collection| collection.name)
            .collect();
        Ok(collection_names)
    }
}
