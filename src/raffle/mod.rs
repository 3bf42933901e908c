//! Raffle aggregate: prize registration, ticket sales and the lucky draw

pub mod engine;
pub mod report;
pub mod types;

pub use engine::Raffle;
pub use report::{DrawReport, WinnerRecord};
pub use types::*;
