mod client;
pub use client::{HttpRddClient, RddFetchError, RddFetcher, DEFAULT_FRESHNESS_WINDOW};

mod types;
pub use types::{RddDocument, RddEntry};
