//! Offset/limit window for collection reads.

pub const DEFAULT_SKIP: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 100;
/// Largest offset or limit the database accepts (a signed 64-bit bind).
pub const MAX_WINDOW: u64 = i64::MAX as u64;

/// Skip `skip` rows, then return at most `limit`. Callers may ask for any
/// limit; values past [`MAX_WINDOW`] are clamped to it, which still means
/// "everything" for `limit` and "nothing left" for `skip`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub skip: u64,
    pub limit: u64,
}

impl Window {
    pub fn new(skip: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            skip: skip.unwrap_or(DEFAULT_SKIP).min(MAX_WINDOW),
            limit: limit.unwrap_or(DEFAULT_LIMIT).min(MAX_WINDOW),
        }
    }
}

impl Default for Window {
    fn default() -> Self { Self { skip: DEFAULT_SKIP, limit: DEFAULT_LIMIT } }
}
