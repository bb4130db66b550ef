use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    CommaInNumber { number: String },
    InvalidPhoneNumber { input: String },
    TimeToLiveOutOfRange { min: u32, actual: u32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::CommaInNumber { number } => {
                write!(f, "',' not allowed in numbers: {number}")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::TimeToLiveOutOfRange { min, actual } => {
                write!(
                    f,
                    "time to live out of range: {actual} minutes (expected at least {min})"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
