pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::KapClient;
pub use error::KapError;
pub use normalize::normalize_disclosures;
pub use types::{Disclosure, DisclosureQuery};
