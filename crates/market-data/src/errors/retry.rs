/// Classification for retry policy.
///
/// The quote path never retries on its own. This tells the caller (and the
/// HTTP layer) whether trying the same request again can succeed.
///
/// | Class | Meaning |
/// |-------|---------|
/// | `Caller` | Transient upstream failure, a later request may succeed |
/// | `Never` | The request itself is unusable, retrying won't help |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// The caller may retry later. The cache is left untouched on failure,
    /// so the next request goes upstream again.
    Caller,

    /// Never retry - bad or unknown symbol.
    Never,
}
