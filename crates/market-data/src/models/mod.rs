//! Market data models
//!
//! - `quote` - Normalized quote returned to callers (QuoteResult)
//! - `ticker` - Ticker normalization used for cache keys and echoed symbols

mod quote;
mod ticker;

pub use quote::QuoteResult;
pub use ticker::{is_blank_ticker, normalize_ticker};
