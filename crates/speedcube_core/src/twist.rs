use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Face;

/// Suffix that marks a counterclockwise twist in move notation.
const PRIME: &str = "'";

/// Direction of a quarter turn, as seen when looking directly at the face.
#[derive(
    Serialize,
    Deserialize,
    EnumIter,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Clockwise.
    #[default]
    Cw,
    /// Counterclockwise.
    Ccw,
}
impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Direction::Cw => Direction::Ccw,
            Direction::Ccw => Direction::Cw,
        }
    }

    /// Returns the notation suffix for the direction.
    pub fn symbol(self) -> &'static str {
        match self {
            Direction::Cw => "",
            Direction::Ccw => PRIME,
        }
    }

    /// Returns `1.0` for clockwise and `-1.0` for counterclockwise.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Cw => 1.0,
            Direction::Ccw => -1.0,
        }
    }
}

/// Quarter turn of one face.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Twist {
    /// Face to turn.
    pub face: Face,
    /// Direction to turn it.
    pub direction: Direction,
}
impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.symbol(), self.direction.symbol())
    }
}
impl FromStr for Twist {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let symbol = chars.next().ok_or(NotationError::Empty)?;
        let face = Face::from_symbol(symbol).ok_or(NotationError::UnknownFace(symbol))?;
        let direction = match chars.as_str() {
            "" => Direction::Cw,
            PRIME => Direction::Ccw,
            suffix => {
                return Err(NotationError::InvalidSuffix {
                    token: s.to_owned(),
                    suffix: suffix.to_owned(),
                });
            }
        };
        Ok(Self { face, direction })
    }
}
impl Twist {
    /// All twists in scramble order.
    ///
    /// **Changing this order breaks compatibility with recorded scrambles.**
    pub const ALL: [Twist; 12] = [
        Twist::cw(Face::R),
        Twist::ccw(Face::R),
        Twist::cw(Face::L),
        Twist::ccw(Face::L),
        Twist::cw(Face::U),
        Twist::ccw(Face::U),
        Twist::cw(Face::D),
        Twist::ccw(Face::D),
        Twist::cw(Face::F),
        Twist::ccw(Face::F),
        Twist::cw(Face::B),
        Twist::ccw(Face::B),
    ];

    /// Constructs a twist.
    pub const fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }
    /// Constructs a clockwise twist.
    pub const fn cw(face: Face) -> Self {
        Self::new(face, Direction::Cw)
    }
    /// Constructs a counterclockwise twist.
    pub const fn ccw(face: Face) -> Self {
        Self::new(face, Direction::Ccw)
    }

    /// Returns the twist that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self::new(self.face, self.direction.rev())
    }

    /// Returns the signed angle of the twist in degrees: `90.0` for clockwise
    /// and `-90.0` for counterclockwise.
    pub fn angle(self) -> f32 {
        90.0 * self.direction.sign()
    }
}

/// Error parsing move notation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The token is empty.
    #[error("empty move")]
    Empty,
    /// The token does not start with a face symbol.
    #[error("unknown face {0:?}; expected one of R, L, U, D, F, B")]
    UnknownFace(char),
    /// The face symbol is followed by something other than the prime marker.
    #[error("invalid suffix {suffix:?} in move {token:?}")]
    InvalidSuffix {
        /// Whole token.
        token: String,
        /// Part of the token after the face symbol.
        suffix: String,
    },
}

/// Parses a whitespace-separated sequence of twists.
///
/// The whole sequence is validated before anything is returned, so a single
/// bad token rejects the entire sequence.
pub fn parse_twists(s: &str) -> Result<Vec<Twist>, NotationError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Formats a sequence of twists as space-separated notation.
pub fn format_twists(twists: &[Twist]) -> String {
    let mut ret = String::new();
    for (i, twist) in twists.iter().enumerate() {
        if i > 0 {
            ret.push(' ');
        }
        ret += &twist.to_string();
    }
    ret
}
