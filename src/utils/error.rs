use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GreetError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            GreetError::IoError(e) => format!("Could not write the greeting: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, GreetError>;
