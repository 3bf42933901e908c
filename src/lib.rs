//! Charity raffle engine
//!
//! Prizes are registered, tickets are sold, and a lucky draw pairs each prize
//! (in registration order) with a ticket drawn uniformly at random without
//! replacement. The console front end lives in [`session`].

pub mod config;
pub mod container;
pub mod currency;
pub mod errors;
pub mod raffle;
pub mod session;

pub use config::{ConfigLoader, RaffleConfig};
pub use container::Container;
pub use currency::Currency;
pub use errors::{ConfigurationError, RaffleError, RaffleResult};
pub use raffle::{Award, DrawReport, DrawResult, Prize, PrizeId, Raffle, Ticket, TicketId};
pub use session::RaffleSession;
