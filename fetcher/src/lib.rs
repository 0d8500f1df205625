//! hh.ru listing fetcher
//!
//! Pages through an employer's vacancies on the HeadHunter API and reshapes
//! them, and the employer card, into the flat records defined in `common`.

pub mod config;
pub mod description;
pub mod error;
pub mod listing;
pub mod salary;
pub mod telemetry;
pub mod transport;

pub use error::FetchError;
pub use listing::ListingFetcher;
pub use transport::{HttpResponse, ReqwestTransport, Transport};
