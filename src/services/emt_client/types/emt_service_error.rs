#[derive(Debug)]
pub enum EmtServiceError {
    Transport(reqwest::Error),
    InvalidCredentials,
    InvalidToken,
    StopDisabled,
    Malformed(String),
}

impl std::fmt::Display for EmtServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EmtServiceError::Transport(e) => write!(f, "Transport error: {}", e),
            EmtServiceError::InvalidCredentials => write!(f, "Invalid email or password"),
            EmtServiceError::InvalidToken => write!(f, "Invalid or expired token"),
            EmtServiceError::StopDisabled => write!(f, "Bus stop disabled or does not exist"),
            EmtServiceError::Malformed(detail) => write!(f, "Malformed API response: {}", detail),
        }
    }
}

impl std::error::Error for EmtServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmtServiceError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for EmtServiceError {
    fn from(e: reqwest::Error) -> Self {
        EmtServiceError::Transport(e)
    }
}
