pub mod classifier;
pub mod portfolio_service;
pub mod projection_service;
pub mod snapshot_service;
