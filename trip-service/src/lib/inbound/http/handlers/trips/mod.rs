pub mod create_trip;
pub mod delete_trip;
pub mod get_trip;
pub mod list_trips;

pub use create_trip::create_trip;
pub use delete_trip::delete_trip;
pub use get_trip::get_trip;
pub use list_trips::list_trips;
