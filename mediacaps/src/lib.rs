pub mod classify;
pub mod constants;
pub mod error;
pub mod family;
pub mod filter;
pub mod report;
pub mod snapshot;
pub mod version;
