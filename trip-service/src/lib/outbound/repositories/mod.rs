pub mod post;
pub mod trip;

use std::sync::Arc;

use scylla::Session;
use scylla::SessionBuilder;

pub use post::ScyllaPostRepository;
pub use trip::ScyllaTripRepository;

use crate::config::Config;

/// Connect to the cluster and prepare the keyspace and tables shared by
/// the trip and post repositories.
pub async fn connect(config: &Config) -> Result<Arc<Session>, anyhow::Error> {
    let session = SessionBuilder::new()
        .known_nodes(&config.cassandra.nodes)
        .build()
        .await?;

    // Create keyspace if not exists
    session
        .query(
            format!(
                "CREATE KEYSPACE IF NOT EXISTS {}
                WITH REPLICATION = {{
                    'class': 'SimpleStrategy',
                    'replication_factor': 1
                }}",
                &config.cassandra.keyspace
            ),
            &[],
        )
        .await?;

    session
        .use_keyspace(&config.cassandra.keyspace, false)
        .await?;

    session
        .query(
            "CREATE TABLE IF NOT EXISTS trips (
                id uuid,
                title text,
                destination text,
                description text,
                host_id uuid,
                created_at timestamp,
                PRIMARY KEY (id)
            )",
            &[],
        )
        .await?;

    // Posts are clustered newest-first within their trip.
    session
        .query(
            "CREATE TABLE IF NOT EXISTS posts_by_trip (
                trip_id uuid,
                post_id timeuuid,
                author_id uuid,
                body text,
                posted_at timestamp,
                PRIMARY KEY (trip_id, post_id)
            ) WITH CLUSTERING ORDER BY (post_id DESC)",
            &[],
        )
        .await?;

    Ok(Arc::new(session))
}
