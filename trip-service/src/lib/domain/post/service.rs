use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use super::errors::PostError;
use super::models::Post;
use super::models::PostBody;
use super::models::PostId;
use super::ports::PostRepository;
use super::ports::PostServicePort;
use crate::domain::traveler::TravelerId;
use crate::domain::trip::models::TripId;
use crate::domain::trip::ports::TripRepository;

/// Concrete implementation of PostServicePort.
///
/// Validates the target trip before writing; the author is always the
/// verified caller identity passed in by the handler.
pub struct PostService<PR, TR>
where
    PR: PostRepository,
    TR: TripRepository,
{
    post_repository: Arc<PR>,
    trip_repository: Arc<TR>,
}

impl<PR, TR> PostService<PR, TR>
where
    PR: PostRepository,
    TR: TripRepository,
{
    pub fn new(post_repository: Arc<PR>, trip_repository: Arc<TR>) -> Self {
        Self {
            post_repository,
            trip_repository,
        }
    }
}

#[async_trait]
impl<PR, TR> PostServicePort for PostService<PR, TR>
where
    PR: PostRepository + 'static,
    TR: TripRepository + 'static,
{
    async fn create_post(
        &self,
        trip_id: TripId,
        author_id: TravelerId,
        body: PostBody,
    ) -> Result<Post, PostError> {
        // Verify the trip exists
        self.trip_repository
            .find_by_id(trip_id)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?
            .ok_or(PostError::TripNotFound(trip_id))?;

        let post = Post {
            id: PostId::new_time_based(),
            trip_id,
            author_id,
            body,
            posted_at: Utc::now(),
        };

        self.post_repository.create(post).await
    }

    async fn get_trip_posts(
        &self,
        trip_id: TripId,
        limit: i32,
        before: Option<DateTime<Utc>>,
    ) -> Result<Vec<Post>, PostError> {
        self.post_repository
            .find_by_trip(trip_id, limit, before)
            .await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::*;
    use uuid::Uuid;

    use super::*;
    use crate::domain::trip::errors::TripError;
    use crate::domain::trip::models::Destination;
    use crate::domain::trip::models::Trip;
    use crate::domain::trip::models::TripTitle;

    mock! {
        pub TestPostRepository {}

        #[async_trait]
        impl PostRepository for TestPostRepository {
            async fn create(&self, post: Post) -> Result<Post, PostError>;
            async fn find_by_trip(
                &self,
                trip_id: TripId,
                limit: i32,
                before: Option<DateTime<Utc>>,
            ) -> Result<Vec<Post>, PostError>;
        }
    }

    mock! {
        pub TestTripRepository {}

        #[async_trait]
        impl TripRepository for TestTripRepository {
            async fn create(&self, trip: Trip) -> Result<Trip, TripError>;
            async fn find_by_id(&self, id: TripId) -> Result<Option<Trip>, TripError>;
            async fn list_all(&self) -> Result<Vec<Trip>, TripError>;
            async fn delete(&self, id: TripId) -> Result<(), TripError>;
        }
    }

    fn trip_with_id(id: TripId) -> Trip {
        Trip {
            id,
            title: TripTitle::new("Sailing the Cyclades".to_string()).unwrap(),
            destination: Destination::new("Naxos".to_string()).unwrap(),
            description: None,
            host_id: TravelerId(Uuid::new_v4()),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_post_success() {
        let trip_id = TripId::new();
        let author_id = TravelerId(Uuid::new_v4());

        let mut trip_repository = MockTestTripRepository::new();
        trip_repository
            .expect_find_by_id()
            .with(eq(trip_id))
            .returning(move |id| Ok(Some(trip_with_id(id))));

        let mut post_repository = MockTestPostRepository::new();
        post_repository
            .expect_create()
            .withf(move |post| post.trip_id == trip_id && post.author_id == author_id)
            .times(1)
            .returning(Ok);

        let service = PostService::new(Arc::new(post_repository), Arc::new(trip_repository));

        let body = PostBody::new("Anchored off Naxos tonight".to_string()).unwrap();
        let result = service.create_post(trip_id, author_id, body).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_post_unknown_trip() {
        let mut trip_repository = MockTestTripRepository::new();
        trip_repository.expect_find_by_id().returning(|_| Ok(None));

        let mut post_repository = MockTestPostRepository::new();
        post_repository.expect_create().times(0);

        let service = PostService::new(Arc::new(post_repository), Arc::new(trip_repository));

        let body = PostBody::new("hello".to_string()).unwrap();
        let result = service
            .create_post(TripId::new(), TravelerId(Uuid::new_v4()), body)
            .await;

        assert!(matches!(result, Err(PostError::TripNotFound(_))));
    }
}
