#[derive(Debug)]
pub enum MapsServiceError {
    Request(String),
    Status(u16),
    Body(String),
}

impl std::fmt::Display for MapsServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MapsServiceError::Request(e) => write!(f, "Failed to send request: {}", e),
            MapsServiceError::Status(code) => write!(f, "Unexpected status code: {}", code),
            MapsServiceError::Body(e) => write!(f, "Failed to get response body: {}", e),
        }
    }
}
