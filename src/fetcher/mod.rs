pub mod client;
pub mod errors;
pub mod pipeline;
pub mod types;

pub use client::{HttpFetcher, PageFetcher, fetch};
pub use errors::FetchError;
pub use types::{Charset, PageResponse};

#[cfg(test)]
pub use client::MockPageFetcher;
