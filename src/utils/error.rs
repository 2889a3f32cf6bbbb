use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("File '{path}' not found")]
    NotFound { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{program}' exited with an error: {stderr}")]
    ExporterFailed { program: String, stderr: String },

    #[error("'{program}' command not found")]
    ExporterMissing { program: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FlowError {
    /// Message printed on stdout when the error is recovered.
    pub fn user_friendly_message(&self) -> String {
        match self {
            FlowError::NotFound { path } => format!("Error: File '{}' not found.", path),
            FlowError::Io(e) => format!("Unexpected error while reading file: {}", e),
            FlowError::ExporterFailed { program, stderr } => {
                format!("Error running {}: {}", program, stderr.trim_end())
            }
            FlowError::ExporterMissing { program } => format!(
                "Error: '{}' command not found. {}",
                program,
                self.recovery_suggestion()
            ),
            FlowError::Config { message } => format!("Error: {}", message),
            FlowError::InvalidConfigValue { .. } => format!("Error: {}", self),
            FlowError::Serialization(e) => format!("Error: could not render report ({})", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FlowError::NotFound { .. } => "Check the path and the working directory",
            FlowError::Io(_) => "Check file permissions and encoding",
            FlowError::ExporterFailed { .. } => "Make sure the input is a valid YAF file",
            FlowError::ExporterMissing { .. } => "Install with: sudo apt install yaf",
            FlowError::Config { .. } | FlowError::InvalidConfigValue { .. } => {
                "Fix the configuration file or command line flags"
            }
            FlowError::Serialization(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;
