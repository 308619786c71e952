/// Configuration errors, surfaced at construction time rather than as
/// degenerate ranges later.
///
/// Row count and overscan are unsigned, so the only invalid geometry a caller
/// can express is a zero row height, which would make offset → index mapping
/// undefined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configured row height was zero.
    #[error("row height must be non-zero")]
    ZeroRowHeight,
}
