//! Posts Service
//!
//! Thin typed wrapper over the JSONPlaceholder posts API, demonstrating the
//! caching client: reads are cached, mutations always hit the network.

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{Post, PostDraft};

/// Default base address for the posts API.
pub const POSTS_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

// == Posts Service ==
/// Client for the posts resource.
#[derive(Debug)]
pub struct PostsService {
    api: ApiClient,
}

impl PostsService {
    // == Constructor ==
    /// Creates a service against the public JSONPlaceholder API.
    pub fn new() -> ApiResult<Self> {
        Ok(Self {
            api: ApiClient::new(POSTS_BASE_URL)?,
        })
    }

    /// Creates a service over an existing client, e.g. against a test server.
    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    // == Reads (cached) ==
    /// Lists all posts.
    pub async fn get_posts(&self) -> ApiResult<Vec<Post>> {
        self.api.get("/posts").await
    }

    /// Fetches a single post by id.
    pub async fn get_post(&self, id: u64) -> ApiResult<Post> {
        self.api.get(&format!("/posts/{id}")).await
    }

    /// Lists the posts belonging to one user.
    pub async fn get_posts_by_user(&self, user_id: u64) -> ApiResult<Vec<Post>> {
        self.api.get(&format!("/posts?userId={user_id}")).await
    }

    // == Mutations (uncached) ==
    /// Creates a new post.
    pub async fn create_post(&self, draft: &PostDraft) -> ApiResult<Post> {
        self.api.post("/posts", draft).await
    }

    /// Replaces an existing post.
    pub async fn update_post(&self, id: u64, draft: &PostDraft) -> ApiResult<Post> {
        self.api.put(&format!("/posts/{id}"), draft).await
    }

    /// Partially updates a post with the given JSON fields.
    pub async fn patch_post(&self, id: u64, fields: &Value) -> ApiResult<Post> {
        self.api.patch(&format!("/posts/{id}"), fields).await
    }

    /// Deletes a post.
    pub async fn delete_post(&self, id: u64) -> ApiResult<()> {
        let _: Value = self.api.delete(&format!("/posts/{id}")).await?;
        Ok(())
    }

    // == Cache Management ==
    /// Clears all cached post responses.
    pub async fn clear_cache(&self) {
        self.api.clear_cache().await;
    }
}
