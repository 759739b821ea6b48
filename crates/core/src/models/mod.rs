pub mod inputs;
pub mod portfolio;
pub mod profile;
pub mod projection;
pub mod snapshot;
