//! Client for the Have I Been Pwned "Pwned Passwords" range API.
//!
//! Passwords are checked with the k-anonymity model: the password is hashed with
//! SHA-1 locally, only the first 5 hex characters of the digest (the prefix) are
//! sent to the service, and the service answers with every known suffix sharing
//! that prefix. The remaining 35 characters (the suffix) are matched locally, so
//! neither the password nor its full hash ever leaves the machine.
//!
//! ```no_run
//! use hibp_range_client::{ClientConfig, RangeClient, leak_count};
//!
//! # async fn demo() -> Result<(), hibp_range_client::Error> {
//! let client = RangeClient::new(ClientConfig::default())?;
//! let count = leak_count(&client, "password").await?;
//! assert!(count > 0);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod conversion;
pub mod error;
pub mod matcher;

pub use client::{RangeClient, RangeSource};
pub use config::{ClientConfig, DEFAULT_BASE_URL, HIBP_ADD_PADDING_ENV, HIBP_RANGE_URL_ENV};
pub use conversion::{DIGEST_LEN, HEX_CHARS, HashSplit, PREFIX_LEN, SUFFIX_LEN, sha1_hex};
pub use error::Error;
pub use matcher::{LeakRecord, leak_count_in, parse_record};

/// Returns how many times `password` appears in the breach corpus served by `source`.
///
/// Only the 5 character prefix of the password's SHA-1 digest is handed to the
/// source. A password that is not in the corpus yields `Ok(0)`.
pub async fn leak_count<S: RangeSource>(source: &S, password: &str) -> Result<u64, Error> {
    let split = HashSplit::new(password);
    let body = source.range(split.prefix()).await?;
    let count = leak_count_in(&body, split.suffix())?;

    tracing::debug!(prefix = split.prefix(), found = count > 0, "range lookup matched");

    Ok(count)
}
