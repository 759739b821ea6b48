pub mod registry;
pub mod traits;

// Provider implementations and the static baseline
pub mod fallback;
pub mod http;
