use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Days must be a positive integer.")]
    InvalidDays,

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Failed to locate report path: {0}")]
    OutputPath(std::io::Error),

    #[error("Failed to write report: {0}")]
    WriteReport(std::io::Error),
}
