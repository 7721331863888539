use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Direction in which intervals are measured.
///
/// | binding | `b a b c b` (normal) |
/// |---------|----------------------|
/// | start   | `1 2 2 4 2`          |
/// | end     | `2 4 2 2 1`          |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Binding {
    /// Left to right, each interval ends at an occurrence.
    #[default]
    Start = 1,
    /// Right to left, each interval starts at an occurrence.
    End = 2,
}

impl Binding {
    pub const ALL: [Binding; 2] = [Binding::Start, Binding::End];

    /// Numeric code of the binding (`1` or `2`).
    pub fn code(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        match self {
            Binding::Start => "start",
            Binding::End => "end",
        }
    }
}

impl TryFrom<u8> for Binding {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Binding::Start),
            2 => Ok(Binding::End),
            other => Err(Error::InvalidBinding(other.to_string())),
        }
    }
}

impl FromStr for Binding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "1" => Ok(Binding::Start),
            "end" | "2" => Ok(Binding::End),
            _ => Err(Error::InvalidBinding(s.to_string())),
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Boundary policy: what happens to the stretch between a sequence edge and
/// the first/last occurrence of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Mode {
    /// Both boundary intervals are dropped.
    Lossy = 1,
    /// Only the boundary interval on the binding side is kept.
    #[default]
    Normal = 2,
    /// Both boundary intervals are summed, as if the sequence were a ring.
    Cycle = 3,
    /// Both boundary intervals are kept separately.
    Redundant = 4,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Lossy, Mode::Normal, Mode::Cycle, Mode::Redundant];

    /// Numeric code of the mode (`1` through `4`).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Number of intervals a symbol with `occurrences` occurrences yields.
    pub fn interval_count(self, occurrences: usize) -> usize {
        if occurrences == 0 {
            return 0;
        }
        match self {
            Mode::Lossy => occurrences - 1,
            Mode::Normal | Mode::Cycle => occurrences,
            Mode::Redundant => occurrences + 1,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Mode::Lossy => "lossy",
            Mode::Normal => "normal",
            Mode::Cycle => "cycle",
            Mode::Redundant => "redundant",
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Mode::Lossy),
            2 => Ok(Mode::Normal),
            3 => Ok(Mode::Cycle),
            4 => Ok(Mode::Redundant),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lossy" | "1" => Ok(Mode::Lossy),
            "normal" | "2" => Ok(Mode::Normal),
            "cycle" | "3" => Ok(Mode::Cycle),
            "redundant" | "4" => Ok(Mode::Redundant),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
