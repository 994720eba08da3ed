pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

// Re-export commonly used types
pub use domain::post::models::*;
pub use domain::post::service::PostService;
pub use domain::traveler::TravelerId;
pub use domain::trip::models::*;
pub use domain::trip::service::TripService;
