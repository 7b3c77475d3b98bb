use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut};

use rand::TryRngCore;

use crate::{
    Color, DEFAULT_SCRAMBLE_LENGTH, Direction, Face, GRID_SIZE, NotationError, ScrambleError,
    Strip, Twist, parse_twists,
};

/// Colors on one face, indexed by `[row][col]`.
///
/// Row 0 is the top row and column 0 is the leftmost column when looking
/// directly at the face.
pub type FaceGrid = [[Color; GRID_SIZE]; GRID_SIZE];

/// Facelet state of a 3x3x3 cube.
///
/// Every operation permutes facelets, so each color always appears exactly
/// nine times.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    faces: [FaceGrid; 6],
}
impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}
impl Index<Face> for CubeState {
    type Output = FaceGrid;

    fn index(&self, face: Face) -> &Self::Output {
        &self.faces[face.index()]
    }
}
impl IndexMut<Face> for CubeState {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        &mut self.faces[face.index()]
    }
}
impl CubeState {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        Self {
            faces: Face::ALL.map(|face| [[face.solved_color(); GRID_SIZE]; GRID_SIZE]),
        }
    }

    /// Returns the cube to the solved state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns whether every facelet has its face's solved color.
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let expected = face.solved_color();
            self[face].iter().flatten().all(|&color| color == expected)
        })
    }

    /// Returns the color at a position on a face.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range `0..=2`.
    pub fn color_at(&self, face: Face, row: usize, col: usize) -> Color {
        assert!(
            row < GRID_SIZE && col < GRID_SIZE,
            "facelet ({row}, {col}) out of range on {} face",
            face.name(),
        );
        self[face][row][col]
    }

    /// Returns the grid of colors on a face.
    pub fn face(&self, face: Face) -> &FaceGrid {
        &self[face]
    }

    /// Returns an iterator over all 54 facelets as `(face, row, col, color)`.
    pub fn facelets(&self) -> impl Iterator<Item = (Face, usize, usize, Color)> + '_ {
        Face::ALL.into_iter().flat_map(move |face| {
            self[face].iter().enumerate().flat_map(move |(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(move |(col, &color)| (face, row, col, color))
            })
        })
    }

    /// Returns the number of facelets of each color.
    pub fn color_counts(&self) -> BTreeMap<Color, usize> {
        let mut ret = BTreeMap::new();
        for (_, _, _, color) in self.facelets() {
            *ret.entry(color).or_default() += 1;
        }
        ret
    }

    /// Turns a face by a quarter turn.
    pub fn rotate_face(&mut self, face: Face, direction: Direction) {
        match direction {
            Direction::Cw => self.rotate_face_cw(face),
            Direction::Ccw => self.rotate_face_ccw(face),
        }
    }

    /// Applies a twist.
    pub fn twist(&mut self, twist: Twist) {
        self.rotate_face(twist.face, twist.direction);
    }

    /// Applies a sequence of twists in order.
    pub fn twists(&mut self, twists: impl IntoIterator<Item = Twist>) {
        for twist in twists {
            self.twist(twist);
        }
    }

    /// Parses and applies a single move such as `R` or `U'`. If the move is
    /// invalid, the state is not modified.
    pub fn apply_move(&mut self, token: &str) -> Result<Twist, NotationError> {
        let twist = token.parse()?;
        self.twist(twist);
        Ok(twist)
    }

    /// Parses and applies a whitespace-separated sequence of moves. If any move
    /// is invalid, the state is not modified.
    pub fn apply_moves(&mut self, notation: &str) -> Result<Vec<Twist>, NotationError> {
        let twists = parse_twists(notation)?;
        self.twists(twists.iter().copied());
        Ok(twists)
    }

    /// Applies `count` twists, each chosen uniformly at random from
    /// [`Twist::ALL`], and returns them.
    ///
    /// All twists are drawn before any is applied, so the state is not modified
    /// if `rng` fails.
    pub fn scramble<R: TryRngCore + ?Sized>(
        &mut self,
        count: u32,
        rng: &mut R,
    ) -> Result<Vec<Twist>, ScrambleError> {
        let twists = (0..count)
            .map(|_| crate::scramble::random_twist(rng))
            .collect::<Result<Vec<_>, _>>()?;
        self.twists(twists.iter().copied());
        log::debug!("scrambled cube with {count} twists");
        Ok(twists)
    }

    /// Applies [`DEFAULT_SCRAMBLE_LENGTH`] random twists.
    pub fn scramble_default<R: TryRngCore + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<Twist>, ScrambleError> {
        self.scramble(DEFAULT_SCRAMBLE_LENGTH, rng)
    }

    fn rotate_face_cw(&mut self, face: Face) {
        let old = self[face];
        for (i, row) in old.iter().enumerate() {
            for (j, &color) in row.iter().enumerate() {
                self[face][j][2 - i] = color;
            }
        }

        let [a, b, c, d] = face.adjacent_strips();
        let tmp = self.read_strip(a);
        self.copy_strip(b, a);
        self.copy_strip(c, b);
        self.copy_strip(d, c);
        self.write_strip(d, tmp);
    }

    /// Inverse of [`Self::rotate_face_cw()`]. Equivalent to three clockwise
    /// turns.
    fn rotate_face_ccw(&mut self, face: Face) {
        let old = self[face];
        for (i, row) in old.iter().enumerate() {
            for (j, &color) in row.iter().enumerate() {
                self[face][2 - j][i] = color;
            }
        }

        let [a, b, c, d] = face.adjacent_strips();
        let tmp = self.read_strip(d);
        self.copy_strip(c, d);
        self.copy_strip(b, c);
        self.copy_strip(a, b);
        self.write_strip(a, tmp);
    }

    fn read_strip(&self, (face, strip): (Face, Strip)) -> [Color; 3] {
        strip.cells().map(|(row, col)| self[face][row][col])
    }
    fn write_strip(&mut self, (face, strip): (Face, Strip), colors: [Color; 3]) {
        for ((row, col), color) in strip.cells().into_iter().zip(colors) {
            self[face][row][col] = color;
        }
    }
    fn copy_strip(&mut self, from: (Face, Strip), to: (Face, Strip)) {
        let colors = self.read_strip(from);
        self.write_strip(to, colors);
    }
}

/// Unfolded net:
///
/// ```text
///       U
///     L F R B
///       D
/// ```
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let write_row = |f: &mut fmt::Formatter<'_>, face: Face, row: usize| -> fmt::Result {
            for color in self[face][row] {
                write!(f, "{}", color.letter())?;
            }
            Ok(())
        };
        let pad = " ".repeat(GRID_SIZE + 1);

        for row in 0..GRID_SIZE {
            write!(f, "{pad}")?;
            write_row(f, Face::U, row)?;
            writeln!(f)?;
        }
        for row in 0..GRID_SIZE {
            for (i, face) in [Face::L, Face::F, Face::R, Face::B].into_iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write_row(f, face, row)?;
            }
            writeln!(f)?;
        }
        for row in 0..GRID_SIZE {
            write!(f, "{pad}")?;
            write_row(f, Face::D, row)?;
            if row + 1 < GRID_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
