/// Errors surfaced to the caller before any enumeration begins.
///
/// Rejections found during the search itself (a disconnected or unbalanced
/// candidate) are normal pruning outcomes, not errors; an exhaustive search
/// that finds nothing yields an empty result.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An enumeration parameter is outside its valid domain.
    #[error("invalid parameter: {detail}")]
    InvalidParameter { detail: String },

    /// The graph input violates a structural invariant.
    #[error("malformed graph: {detail}")]
    MalformedGraph { detail: String },
}
