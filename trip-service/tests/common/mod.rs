use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Role;
use chrono::DateTime;
use chrono::Utc;
use trip_service::domain::post::errors::PostError;
use trip_service::domain::post::models::Post;
use trip_service::domain::post::ports::PostRepository;
use trip_service::domain::post::service::PostService;
use trip_service::domain::trip::errors::TripError;
use trip_service::domain::trip::models::Trip;
use trip_service::domain::trip::models::TripId;
use trip_service::domain::trip::ports::TripRepository;
use trip_service::domain::trip::service::TripService;
use trip_service::inbound::http::router::create_router;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory trip store so the full HTTP stack can run without ScyllaDB.
#[derive(Default)]
pub struct InMemoryTripRepository {
    trips: Mutex<HashMap<Uuid, Trip>>,
}

#[async_trait]
impl TripRepository for InMemoryTripRepository {
    async fn create(&self, trip: Trip) -> Result<Trip, TripError> {
        self.trips.lock().unwrap().insert(trip.id.0, trip.clone());
        Ok(trip)
    }

    async fn find_by_id(&self, id: TripId) -> Result<Option<Trip>, TripError> {
        Ok(self.trips.lock().unwrap().get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Trip>, TripError> {
        Ok(self.trips.lock().unwrap().values().cloned().collect())
    }

    async fn delete(&self, id: TripId) -> Result<(), TripError> {
        self.trips.lock().unwrap().remove(&id.0);
        Ok(())
    }
}

/// In-memory post store mirroring the newest-first clustering of the real
/// posts_by_trip table.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Mutex<Vec<Post>>,
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: Post) -> Result<Post, PostError> {
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn find_by_trip(
        &self,
        trip_id: TripId,
        limit: i32,
        before: Option<DateTime<Utc>>,
    ) -> Result<Vec<Post>, PostError> {
        let posts = self.posts.lock().unwrap();

        let mut matching: Vec<Post> = posts
            .iter()
            .filter(|p| p.trip_id == trip_id)
            .filter(|p| before.map_or(true, |cutoff| p.posted_at < cutoff))
            .cloned()
            .collect();

        matching.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
        matching.truncate(limit.max(0) as usize);

        Ok(matching)
    }
}

/// Test application that spawns the real router on a random port.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp.
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator =
            Arc::new(Authenticator::new(TEST_SECRET).expect("Failed to create authenticator"));

        let trip_repository = Arc::new(InMemoryTripRepository::default());
        let post_repository = Arc::new(InMemoryPostRepository::default());

        let trip_service = Arc::new(TripService::new(Arc::clone(&trip_repository)));
        let post_service = Arc::new(PostService::new(post_repository, trip_repository));

        let router = create_router(trip_service, post_service, Arc::clone(&authenticator));

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Mint a user credential for a fresh traveler; returns (token, id).
    pub fn user_token(&self, username: &str) -> (String, String) {
        let id = Uuid::new_v4().to_string();
        let token = self
            .authenticator
            .issue_token(&id, username, Role::User)
            .expect("Failed to issue token");
        (token, id)
    }

    /// Mint an admin credential.
    pub fn admin_token(&self) -> String {
        self.authenticator
            .issue_token(&Uuid::new_v4().to_string(), "root", Role::Admin)
            .expect("Failed to issue admin token")
    }

    /// Create a trip as the given caller and return its id.
    pub async fn create_trip(&self, token: &str, title: &str) -> String {
        let response = self
            .post("/api/trips")
            .bearer_auth(token)
            .json(&serde_json::json!({
                "title": title,
                "destination": "Naxos"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success(), "trip creation failed");

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["id"].as_str().unwrap().to_string()
    }
}

/// Corrupt a credential by flipping its last character.
pub fn tamper(token: &str) -> String {
    let mut tampered = token[..token.len() - 1].to_string();
    tampered.push(if token.ends_with('A') { 'B' } else { 'A' });
    tampered
}
