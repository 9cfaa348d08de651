/// Trim and uppercase a ticker for use as a cache key and as the echoed
/// symbol.
pub fn normalize_ticker(ticker: &str) -> String {
    ticker.trim().to_uppercase()
}

/// True when the ticker has no usable characters.
pub fn is_blank_ticker(ticker: &str) -> bool {
    ticker.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_ticker_uppercases() {
        assert_eq!(normalize_ticker("aapl"), "AAPL");
        assert_eq!(normalize_ticker("AAPL"), "AAPL");
        assert_eq!(normalize_ticker("brk.b"), "BRK.B");
    }

    #[test]
    fn test_normalize_ticker_trims_whitespace() {
        assert_eq!(normalize_ticker(" msft"), "MSFT");
        assert_eq!(normalize_ticker("msft\n"), "MSFT");
        assert_eq!(normalize_ticker(" msft "), normalize_ticker("MSFT"));
    }

    #[test]
    fn test_blank_ticker() {
        assert!(is_blank_ticker(""));
        assert!(is_blank_ticker("   "));
        assert!(!is_blank_ticker("msft"));
    }
}
