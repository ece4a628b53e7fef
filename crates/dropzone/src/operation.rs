use std::str::FromStr;

/// Transfer operation hinted by a dropzone attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Copy,
    Move,
    Link,
}

impl Operation {
    /// Matches an attribute keyword. Keywords are case-sensitive.
    pub fn from_keyword(token: &str) -> Option<Self> {
        match token {
            "copy" => Some(Self::Copy),
            "move" => Some(Self::Move),
            "link" => Some(Self::Link),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Link => "link",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOperationError {
    pub input: String,
}

impl std::fmt::Display for ParseOperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown drop operation '{}' (expected copy, move or link)",
            self.input
        )
    }
}

impl std::error::Error for ParseOperationError {}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| ParseOperationError {
            input: s.to_string(),
        })
    }
}
