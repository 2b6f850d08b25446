//! # HTTP Server Module
//!
//! Serves the food-truck lookup API over HTTP.
//!
//! # Endpoints
//!
//! - `GET /food_trucks?latitude=<text>?longitude=<text>` - Location lookup
//! - `GET /food_trucks/...` - Same, with trailing slash
//! - anything else - `Unknown action = <path>`

pub mod response;
pub mod server;
pub mod truck_routes;

pub use response::{render_lookup_response, write_lookup_response};
pub use server::HttpServer;
pub use truck_routes::{truck_routes, AppState};
