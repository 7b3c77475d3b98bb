use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Color;

/// Face of the cube.
///
/// The discriminant is the index of the face in [`crate::CubeState`].
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
#[repr(u8)]
pub enum Face {
    /// Right face (`R`).
    #[default]
    R = 0,
    /// Left face (`L`).
    L = 1,
    /// Up face (`U`).
    U = 2,
    /// Down face (`D`).
    D = 3,
    /// Front face (`F`).
    F = 4,
    /// Back face (`B`).
    B = 5,
}
impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl Face {
    /// All faces, in index order.
    pub const ALL: [Face; 6] = [Face::R, Face::L, Face::U, Face::D, Face::F, Face::B];

    /// Returns the index of the face in [`Face::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the face with the given notation symbol, if there is one.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.symbol() == symbol)
    }

    /// Returns the notation symbol for the face.
    pub fn symbol(self) -> char {
        match self {
            Face::R => 'R',
            Face::L => 'L',
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
        }
    }
    /// Returns the human-friendly name of the face.
    pub fn name(self) -> &'static str {
        match self {
            Face::R => "Right",
            Face::L => "Left",
            Face::U => "Up",
            Face::D => "Down",
            Face::F => "Front",
            Face::B => "Back",
        }
    }

    /// Returns the face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Face::R => Face::L,
            Face::L => Face::R,
            Face::U => Face::D,
            Face::D => Face::U,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }

    /// Returns the color that fills this face when the cube is solved.
    pub fn solved_color(self) -> Color {
        match self {
            Face::R => Color::Red,
            Face::L => Color::Orange,
            Face::U => Color::White,
            Face::D => Color::Yellow,
            Face::F => Color::Green,
            Face::B => Color::Blue,
        }
    }

    /// Returns the four strips on neighboring faces that move when this face
    /// is twisted clockwise.
    ///
    /// Each strip receives the contents of the next one in the list, and the
    /// last strip receives the contents of the first. Cells are listed in the
    /// order that they correspond between strips.
    pub fn adjacent_strips(self) -> [(Face, Strip); 4] {
        use Face::*;
        use Strip::*;

        match self {
            R => [(U, Col(2)), (F, Col(2)), (D, Col(2)), (B, RevCol(0))],
            L => [(U, Col(0)), (B, RevCol(2)), (D, Col(0)), (F, Col(0))],
            U => [(F, Row(0)), (R, Row(0)), (B, Row(0)), (L, Row(0))],
            D => [(F, Row(2)), (L, Row(2)), (B, Row(2)), (R, Row(2))],
            F => [(U, Row(2)), (L, RevCol(2)), (D, RevRow(0)), (R, Col(0))],
            B => [(U, Row(0)), (R, Col(2)), (D, RevRow(2)), (L, RevCol(0))],
        }
    }
}

/// Line of three facelets along one row or column of a face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Strip {
    /// Row, left to right.
    Row(usize),
    /// Row, right to left.
    RevRow(usize),
    /// Column, top to bottom.
    Col(usize),
    /// Column, bottom to top.
    RevCol(usize),
}
impl Strip {
    /// Returns the `(row, col)` coordinates of the three cells in the strip,
    /// in traversal order.
    pub fn cells(self) -> [(usize, usize); 3] {
        match self {
            Strip::Row(r) => [(r, 0), (r, 1), (r, 2)],
            Strip::RevRow(r) => [(r, 2), (r, 1), (r, 0)],
            Strip::Col(c) => [(0, c), (1, c), (2, c)],
            Strip::RevCol(c) => [(2, c), (1, c), (0, c)],
        }
    }
}
