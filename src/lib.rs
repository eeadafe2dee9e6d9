pub mod checkpoint;
pub mod collect;
pub mod config;
pub mod enrich;
pub mod error;
pub mod filter;
pub mod github;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod utils;

pub use config::{Config, Mode};
pub use error::{Error, Result};
