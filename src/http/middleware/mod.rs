//! Global middleware stages.
//!
//! Order matters and is fixed in `server::build_router`: the CORS stage
//! runs before the JSON body stage, and both run before routing.

pub mod cors;
pub mod json_body;

pub use cors::cors_layer;
pub use json_body::{json_body_middleware, JsonBody};
