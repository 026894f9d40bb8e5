use std::{error::Error, fmt, io};

/// The crate's result type.
pub type Result<T> = std::result::Result<T, FitErr>;

/// Pipeline failures.
#[derive(Debug)]
pub enum FitErr {
    Io(io::Error),
    EmptyPointSet {
        what: &'static str,
    },
    InvalidLearningRate {
        got: f64,
    },
    Render(String),
}

impl fmt::Display for FitErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitErr::Io(e) => write!(f, "io error: {e}"),
            FitErr::EmptyPointSet { what } => {
                write!(f, "point set is empty, cannot compute {what}")
            }
            FitErr::InvalidLearningRate { got } => {
                write!(f, "learning rate must be a positive finite number, got {got}")
            }
            FitErr::Render(msg) => write!(f, "render error: {msg}"),
        }
    }
}

impl Error for FitErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FitErr::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FitErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Boundary conversion for binaries / I/O APIs.
impl From<FitErr> for io::Error {
    fn from(value: FitErr) -> Self {
        match value {
            FitErr::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
