use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostBody;
use crate::domain::traveler::TravelerId;
use crate::domain::trip::models::TripId;

/// Port for post domain service operations.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Publish a post to a trip's feed.
    ///
    /// # Errors
    /// * `TripNotFound` - Trip does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_post(
        &self,
        trip_id: TripId,
        author_id: TravelerId,
        body: PostBody,
    ) -> Result<Post, PostError>;

    /// Retrieve a trip's posts, newest first, optionally before a point in
    /// time.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn get_trip_posts(
        &self,
        trip_id: TripId,
        limit: i32,
        before: Option<DateTime<Utc>>,
    ) -> Result<Vec<Post>, PostError>;
}

/// Persistence operations for the post aggregate.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// Persist a new post.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, post: Post) -> Result<Post, PostError>;

    /// Retrieve posts for a trip, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_trip(
        &self,
        trip_id: TripId,
        limit: i32,
        before: Option<DateTime<Utc>>,
    ) -> Result<Vec<Post>, PostError>;
}
