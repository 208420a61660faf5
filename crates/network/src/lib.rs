// crates/network/src/lib.rs
//! HTTP retrieval of raw feed documents
//!
//! The fetcher only moves bytes: it never inspects or decodes what it
//! downloads and never retries. Callers hand the result to the feed parser.

mod client;
mod error;

pub use client::{Client, ClientConfig};
pub use error::{NetworkError, NetworkResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_exports_accessible() {
        let client = Client::new().expect("Failed to create client");
        let _: &ClientConfig = client.config();
        let _: NetworkResult<()> = Err(NetworkError::InvalidUrl("x".into()));
    }
}
