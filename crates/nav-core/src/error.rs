use thiserror::Error;

/// Precondition violations raised by the navigation core.
///
/// These indicate an integration bug (bad item source, wrong index) rather
/// than user input, so callers are expected to surface them loudly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavError {
    #[error("navigation has no items")]
    NoItems,
    #[error("item row has no measurable width (total {total})")]
    ZeroRowWidth { total: f64 },
    #[error("item index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}
