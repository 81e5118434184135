use compact_str::CompactString;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

impl std::fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorChannel::Red => write!(f, "red"),
            ColorChannel::Green => write!(f, "green"),
            ColorChannel::Blue => write!(f, "blue"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RangeError {
    #[error("Color component {channel} must lie in [0, 1] but got {value}")]
    ColorComponent { channel: ColorChannel, value: f64 },
    #[error("Square root of negative number {0}")]
    NegativeSqrt(f64),
    #[error("Inverted random interval [{lower}, {upper}]")]
    InvertedInterval { lower: f64, upper: f64 },
    #[error("Random interval bounds must be finite: [{lower}, {upper}]")]
    UnboundedInterval { lower: f64, upper: f64 },
    #[error("Exponent {0} is too large")]
    ExponentTooLarge(f64),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Procedure call depth exceeded {0}")]
    RecursionLimit(usize),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeErrorKind {
    #[error("Undefined name: {0}")]
    UndefinedName(CompactString),
    #[error("Undefined procedure: {0}")]
    UndefinedProcedure(CompactString),
    #[error("Duplicate procedure: {0}")]
    DuplicateProcedure(CompactString),
    #[error("Range error: {0}")]
    Range(#[from] RangeError),
    #[error("Invalid Argument Count for {function}: {actual} of {expected}")]
    InvalidArgumentCount {
        function: &'static str,
        actual: usize,
        expected: usize,
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{kind} (in `{statement}`)")]
pub struct RuntimeError {
    #[source]
    pub kind: RuntimeErrorKind,
    pub statement: &'static str,
}

impl RuntimeError {
    pub fn new(kind: impl Into<RuntimeErrorKind>, statement: &'static str) -> Self {
        Self {
            kind: kind.into(),
            statement,
        }
    }

    pub fn code(&self) -> &'static str {
        match self.kind {
            RuntimeErrorKind::UndefinedName(_) => "RT001",
            RuntimeErrorKind::UndefinedProcedure(_) => "RT002",
            RuntimeErrorKind::DuplicateProcedure(_) => "RT003",
            RuntimeErrorKind::Range(_) => "RT004",
            RuntimeErrorKind::InvalidArgumentCount { .. } => "RT005",
        }
    }
}
