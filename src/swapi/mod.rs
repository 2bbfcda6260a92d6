//! The SWAPI side of the proxy: upstream client, people model, errors.

mod client;
mod error;
mod people;

pub use client::SwapiClient;
pub use error::ProxyError;
pub use people::{PeoplePage, PeopleSortedByName, parse_page, sort_by_name};
