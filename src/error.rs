use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid {name} value {value:?}")]
    InvalidPort {
        name: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("failed to bind status server on port {port}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },
}
