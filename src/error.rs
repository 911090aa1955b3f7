/// Broad category of an [`AppError`].
///
/// Shells use this to decide how to surface a failure (status line vs. exit);
/// the exit code travels separately so the binary stays a thin wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A filter value that is not one of the known enum members, or a malformed date.
    InvalidFilterValue,
    /// A date range whose start lies after its end.
    InvalidRange,
    /// Malformed configuration (environment or flags).
    Config,
    /// Export / file output failures.
    Io,
    /// Terminal setup, event or draw failures.
    Terminal,
    Other,
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Other,
            exit_code,
            message: message.into(),
        }
    }

    pub fn with_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        let exit_code = match kind {
            ErrorKind::InvalidFilterValue | ErrorKind::InvalidRange | ErrorKind::Config => 2,
            ErrorKind::Io => 3,
            ErrorKind::Terminal | ErrorKind::Other => 4,
        };
        Self {
            kind,
            exit_code,
            message: message.into(),
        }
    }

    pub fn invalid_filter_value(field: &str, value: &str) -> Self {
        Self::with_kind(
            ErrorKind::InvalidFilterValue,
            format!("Invalid value for {field}: '{value}'."),
        )
    }

    pub fn invalid_range(start: impl std::fmt::Display, end: impl std::fmt::Display) -> Self {
        Self::with_kind(
            ErrorKind::InvalidRange,
            format!("Invalid date range: start {start} is after end {end}."),
        )
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Io, message)
    }

    pub fn terminal(message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Terminal, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_exit_codes() {
        assert_eq!(AppError::invalid_filter_value("airport", "W").exit_code(), 2);
        assert_eq!(AppError::invalid_range("2024-02-01", "2024-01-01").exit_code(), 2);
        assert_eq!(AppError::io("disk full").exit_code(), 3);
        assert_eq!(AppError::terminal("no tty").exit_code(), 4);
        assert_eq!(AppError::new(7, "custom").kind(), ErrorKind::Other);
    }

    #[test]
    fn invalid_filter_value_names_field_and_value() {
        let err = AppError::invalid_filter_value("airport", "Aeroporto W");
        assert_eq!(err.kind(), ErrorKind::InvalidFilterValue);
        assert_eq!(err.to_string(), "Invalid value for airport: 'Aeroporto W'.");
    }
}
