//! Fixed constants shared across modules.
//!
//! Policy
//! - Nothing here is read at runtime. Callers that need other bounds validate
//!   their inputs before reaching the library.

/// Largest supported dimension count. `2^MAX_DIMS` must fit a 32-bit signed count.
pub const MAX_DIMS: usize = 30;

/// Spherical Earth radius in metres, used by the haversine model.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
