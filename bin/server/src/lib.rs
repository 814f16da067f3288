mod api;
mod metrics;

pub use api::{api_route, ApiError, HEALTH_BODY};
pub use self::metrics::*;
