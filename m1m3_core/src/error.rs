use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ForceError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("{what}: expected {expected} values, got {actual}")]
    Shape {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("missing column {0}")]
    MissingColumn(String),
    #[error("fit error: {0}")]
    Fit(String),
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;

/// Fail with `ForceError::Shape` unless `actual == expected`.
#[inline]
pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(eyre::Report::new(ForceError::Shape {
            what,
            expected,
            actual,
        }))
    }
}

/// Re-wrap a loader failure as a typed configuration error, keeping the
/// whole context chain in the message.
pub(crate) fn config_error(err: &eyre::Report) -> eyre::Report {
    eyre::Report::new(ForceError::Config(format!("{err:#}")))
}
