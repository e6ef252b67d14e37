use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::BreakwigError;

/// Strand of a breakpoint join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strand {
    Positive,
    Negative,
}

impl Strand {
    /// Both strands, in emission order.
    pub const BOTH: [Strand; 2] = [Strand::Positive, Strand::Negative];

    pub fn as_char(&self) -> char {
        match self {
            Strand::Positive => '+',
            Strand::Negative => '-',
        }
    }

    /// Multiplier applied to a raw overlap count when sign-encoding coverage.
    pub fn sign(&self) -> i64 {
        match self {
            Strand::Positive => 1,
            Strand::Negative => -1,
        }
    }
}

impl FromStr for Strand {
    type Err = BreakwigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Positive),
            "-" => Ok(Strand::Negative),
            other => Err(BreakwigError::InvalidStrand(other.to_string())),
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
