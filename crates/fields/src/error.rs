use thiserror::Error;

/// Errors from constructing typed fields.
///
/// Field values never fail to parse (a value that does not match its
/// grammar degrades to an empty typed value), so the only fallible surface
/// is the field name itself.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("invalid header name: {source}")]
    InvalidName {
        #[from]
        source: http::header::InvalidHeaderName,
    },
}
