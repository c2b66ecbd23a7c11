use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum EdgarError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The page received was not in the expected shape (missing table, wrong column count, bad cell).
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The lookup table could not be read.
    #[error("lookup table error: {0}")]
    Csv(#[from] csv::Error),

    /// A filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The spreadsheet writer failed.
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// A date given on input was not in `YYYY-MM-DD` form.
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Export was requested but nothing was collected.
    #[error("no summaries to export")]
    EmptyExport,
}
