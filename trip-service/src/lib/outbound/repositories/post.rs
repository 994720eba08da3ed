use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use scylla::frame::value::CqlTimeuuid;
use scylla::Session;
use uuid::Uuid;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostBody;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostRepository;
use crate::domain::traveler::TravelerId;
use crate::domain::trip::models::TripId;

type PostRow = (Uuid, CqlTimeuuid, Uuid, String, DateTime<Utc>);

pub struct ScyllaPostRepository {
    session: Arc<Session>,
}

impl ScyllaPostRepository {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    fn row_to_post(row: PostRow) -> Result<Post, PostError> {
        let (trip_id, post_id, author_id, body, posted_at) = row;

        Ok(Post {
            id: PostId(post_id.into()),
            trip_id: TripId(trip_id),
            author_id: TravelerId(author_id),
            body: PostBody::new(body)?,
            posted_at,
        })
    }
}

#[async_trait]
impl PostRepository for ScyllaPostRepository {
    async fn create(&self, post: Post) -> Result<Post, PostError> {
        // Convert domain Uuid to CqlTimeuuid for the clustering column
        let post_id_timeuuid = CqlTimeuuid::from(*post.id.as_uuid());

        self.session
            .query(
                "INSERT INTO posts_by_trip (trip_id, post_id, author_id, body, posted_at)
                 VALUES (?, ?, ?, ?, ?)",
                (
                    post.trip_id.as_uuid(),
                    post_id_timeuuid,
                    post.author_id.as_uuid(),
                    post.body.as_str(),
                    post.posted_at,
                ),
            )
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(post)
    }

    async fn find_by_trip(
        &self,
        trip_id: TripId,
        limit: i32,
        before: Option<DateTime<Utc>>,
    ) -> Result<Vec<Post>, PostError> {
        let query = if let Some(before_time) = before {
            self.session
                .query(
                    "SELECT trip_id, post_id, author_id, body, posted_at
                     FROM posts_by_trip
                     WHERE trip_id = ? AND post_id < maxTimeuuid(?)
                     LIMIT ?",
                    (trip_id.as_uuid(), before_time, limit),
                )
                .await
        } else {
            self.session
                .query(
                    "SELECT trip_id, post_id, author_id, body, posted_at
                     FROM posts_by_trip
                     WHERE trip_id = ?
                     LIMIT ?",
                    (trip_id.as_uuid(), limit),
                )
                .await
        };

        let result = query.map_err(|e| PostError::DatabaseError(e.to_string()))?;

        let mut posts = Vec::new();
        if let Some(rows) = result.rows {
            for row in rows {
                let typed = row
                    .into_typed::<PostRow>()
                    .map_err(|e| PostError::DatabaseError(e.to_string()))?;
                posts.push(Self::row_to_post(typed)?);
            }
        }

        Ok(posts)
    }
}
