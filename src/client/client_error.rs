pub const GENERIC_BACKEND_MESSAGE: &str = "Something went wrong. Try again.";
pub const CONNECTIVITY_MESSAGE: &str = "Could not reach the server. Is the backend running?";
pub const MISSING_ADDRESS_MESSAGE: &str = "Please enter both addresses.";

/// Why a request to the midpoint backend did not produce a result.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Non-2xx response; carries the message to show the user.
    Backend { status: u16, message: String },
    /// Unreachable host, broken connection or an undecodable success body.
    Transport(String),
}

impl ClientError {
    pub fn user_message(&self) -> &str {
        match self {
            ClientError::Backend { message, .. } => message.as_str(),
            ClientError::Transport(_) => CONNECTIVITY_MESSAGE,
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ClientError::Backend { status, message } => {
                write!(f, "Backend returned {}: {}", status, message)
            }
            ClientError::Transport(e) => write!(f, "Transport error: {}", e),
        }
    }
}

/// Local rejection of a submission; nothing was sent.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    MissingAddress,
}

impl SubmitError {
    pub fn user_message(&self) -> &str {
        match self {
            SubmitError::MissingAddress => MISSING_ADDRESS_MESSAGE,
        }
    }
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}
