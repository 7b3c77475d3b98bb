use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::{RngCore, TryRngCore};

use crate::*;

/// Random source that returns a fixed sequence of values, cycling forever.
struct FixedSequence {
    values: Vec<u32>,
    next: usize,
}
impl FixedSequence {
    fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            next: 0,
        }
    }
}
impl RngCore for FixedSequence {
    fn next_u32(&mut self) -> u32 {
        let ret = self.values[self.next % self.values.len()];
        self.next += 1;
        ret
    }
    fn next_u64(&mut self) -> u64 {
        u64::from(self.next_u32())
    }
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for byte in dst {
            *byte = self.next_u32() as u8;
        }
    }
}

/// Random source that always fails.
struct BrokenSource;
#[derive(Debug)]
struct BrokenSourceError;
impl std::fmt::Display for BrokenSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entropy pool is gone")
    }
}
impl TryRngCore for BrokenSource {
    type Error = BrokenSourceError;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        Err(BrokenSourceError)
    }
    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        Err(BrokenSourceError)
    }
    fn try_fill_bytes(&mut self, _dst: &mut [u8]) -> Result<(), Self::Error> {
        Err(BrokenSourceError)
    }
}

/// Returns a cube with `twists` applied from solved.
fn scrambled_by(twists: &[Twist]) -> CubeState {
    let mut state = CubeState::new();
    state.twists(twists.iter().copied());
    state
}

fn arb_twist() -> impl Strategy<Value = Twist> {
    prop::sample::select(Twist::ALL.to_vec())
}
fn arb_twists() -> impl Strategy<Value = Vec<Twist>> {
    prop::collection::vec(arb_twist(), 0..40)
}
fn arb_face() -> impl Strategy<Value = Face> {
    prop::sample::select(Face::ALL.to_vec())
}

fn column(state: &CubeState, face: Face, col: usize) -> [Color; 3] {
    [0, 1, 2].map(|row| state.color_at(face, row, col))
}

#[test]
fn test_new_cube_is_solved() {
    let state = CubeState::new();
    assert!(state.is_solved());
    for face in Face::ALL {
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(state.color_at(face, row, col), face.solved_color());
            }
        }
    }
}

#[test]
fn test_single_twist_is_not_solved() {
    for twist in Twist::ALL {
        let mut state = CubeState::new();
        state.twist(twist);
        assert!(!state.is_solved(), "{twist} should unsolve the cube");
    }
}

#[test]
fn test_r_from_solved() {
    let solved = CubeState::new();
    let mut state = solved.clone();
    state.rotate_face(Face::R, Direction::Cw);

    // Up's right column came from Front's right column.
    assert_eq!(column(&state, Face::U, 2), column(&solved, Face::F, 2));
    assert_eq!(column(&state, Face::U, 2), [Color::Green; 3]);
    // Front's right column came from Down's right column.
    assert_eq!(column(&state, Face::F, 2), [Color::Yellow; 3]);
    // Down's right column came from Back's left column.
    assert_eq!(column(&state, Face::D, 2), [Color::Blue; 3]);
    // Back's left column came from Up's right column.
    assert_eq!(column(&state, Face::B, 0), [Color::White; 3]);

    // The rest of those faces is untouched.
    for col in 0..2 {
        assert_eq!(column(&state, Face::U, col), [Color::White; 3]);
        assert_eq!(column(&state, Face::F, col), [Color::Green; 3]);
        assert_eq!(column(&state, Face::D, col), [Color::Yellow; 3]);
    }
    for col in 1..3 {
        assert_eq!(column(&state, Face::B, col), [Color::Blue; 3]);
    }
    assert_eq!(state[Face::R], [[Color::Red; 3]; 3]);
    assert_eq!(state[Face::L], [[Color::Orange; 3]; 3]);
}

#[test]
fn test_r_strip_order() {
    // Mark Front's right column so that the traversal order is visible.
    let mut state = CubeState::new();
    state.rotate_face(Face::U, Direction::Cw); // F top row now red
    state.rotate_face(Face::R, Direction::Cw);

    // After U, Front's right column is [red, green, green] top to bottom and
    // R copies it straight up onto Up's right column.
    assert_eq!(
        column(&state, Face::U, 2),
        [Color::Red, Color::Green, Color::Green],
    );
    // Back's top row was orange (from L) after U, and Back's left column is
    // read bottom to top into Down's right column.
    assert_eq!(
        column(&state, Face::D, 2),
        [Color::Blue, Color::Blue, Color::Orange],
    );
}

#[test]
fn test_face_grid_rotation() {
    // Build a recognizable pattern on Up by twisting neighbors, then check
    // that U moves cell (i, j) to (j, 2 - i).
    let before = scrambled_by(&parse_twists("R F' L").unwrap());
    let mut after = before.clone();
    after.twist(Twist::cw(Face::U));
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(
                after.color_at(Face::U, j, 2 - i),
                before.color_at(Face::U, i, j),
            );
        }
    }
    let mut back = after.clone();
    back.twist(Twist::ccw(Face::U));
    assert_eq!(back, before);
}

#[test]
fn test_period_of_each_face() {
    let start = scrambled_by(&parse_twists("R U F' D L L").unwrap());
    for face in Face::ALL {
        for direction in [Direction::Cw, Direction::Ccw] {
            let mut state = start.clone();
            for n in 1..=12 {
                state.rotate_face(face, direction);
                assert_eq!(
                    state == start,
                    n % 4 == 0,
                    "{face} {direction:?} repeated {n} times",
                );
            }
        }
    }
}

#[test]
fn test_r2_u2_has_order_6() {
    let block = parse_twists("R R U U R R U U").unwrap();
    let mut state = CubeState::new();
    for i in 1..=6 {
        state.twists(block.iter().copied());
        // Each block is (R2 U2)^2, which has order 3.
        assert_eq!(state.is_solved(), i % 3 == 0, "after {i} blocks");
    }
    assert!(state.is_solved());
}

#[test]
fn test_sexy_move_has_order_6() {
    let mut state = CubeState::new();
    for _ in 0..6 {
        state.apply_moves("R U R' U'").unwrap();
    }
    assert!(state.is_solved());
}

#[test]
fn test_apply_move() {
    let mut state = CubeState::new();
    assert_eq!(state.apply_move("F'"), Ok(Twist::ccw(Face::F)));
    let mut expected = CubeState::new();
    for _ in 0..3 {
        expected.rotate_face(Face::F, Direction::Cw);
    }
    assert_eq!(state, expected);

    for bad in ["", "X", "F''", "f", "F2", "R'  "] {
        let before = state.clone();
        assert!(state.apply_move(bad).is_err(), "{bad:?} should be rejected");
        assert_eq!(state, before, "{bad:?} should not mutate the state");
    }
}

#[test]
fn test_apply_moves_is_all_or_nothing() {
    let mut state = CubeState::new();
    assert!(state.apply_moves("R U Q F").is_err());
    assert!(state.is_solved());

    assert_eq!(state.apply_moves("R U").map(|t| t.len()), Ok(2));
    assert!(!state.is_solved());
}

#[test]
fn test_reset() {
    let mut state = scrambled_by(&parse_twists("R U F D L B R' U'").unwrap());
    assert!(!state.is_solved());
    state.reset();
    assert!(state.is_solved());
    assert_eq!(state, CubeState::new());
}

#[test]
#[should_panic(expected = "out of range")]
fn test_color_at_row_out_of_range() {
    CubeState::new().color_at(Face::U, 3, 0);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_color_at_col_out_of_range() {
    CubeState::new().color_at(Face::D, 0, 7);
}

#[test]
fn test_scramble_zero_is_noop() {
    let mut state = scrambled_by(&parse_twists("R U").unwrap());
    let before = state.clone();
    let twists = state.scramble(0, &mut FixedSequence::new([3])).unwrap();
    assert!(twists.is_empty());
    assert_eq!(state, before);

    let mut state = CubeState::new();
    state.scramble(0, &mut BrokenSource).unwrap();
    assert!(state.is_solved());
}

#[test]
fn test_scramble_with_fixed_source() {
    // Indices into `Twist::ALL`: R, U', F, B'
    let mut source = FixedSequence::new([0, 5, 8, 11]);
    let mut state = CubeState::new();
    let twists = state.scramble(4, &mut source).unwrap();
    assert_eq!(format_twists(&twists), "R U' F B'");
    assert_eq!(state, scrambled_by(&twists));

    // The source cycles, so eight twists repeat the same four.
    let mut state = CubeState::new();
    let twists = state.scramble(8, &mut FixedSequence::new([0, 5, 8, 11])).unwrap();
    assert_eq!(format_twists(&twists), "R U' F B' R U' F B'");
}

#[test]
fn test_scramble_one_move_grid() {
    // Index 0 is R.
    let mut state = CubeState::new();
    state.scramble(1, &mut FixedSequence::new([12 * 1000])).unwrap();

    use Color::*;
    assert_eq!(state[Face::U], [[White, White, Green]; 3]);
    assert_eq!(state[Face::F], [[Green, Green, Yellow]; 3]);
    assert_eq!(state[Face::D], [[Yellow, Yellow, Blue]; 3]);
    assert_eq!(state[Face::B], [[White, Blue, Blue]; 3]);
    assert_eq!(state[Face::R], [[Red; 3]; 3]);
    assert_eq!(state[Face::L], [[Orange; 3]; 3]);
}

#[test]
fn test_scramble_rejects_biased_values() {
    // `u32::MAX` is above the unbiased limit, so it is skipped.
    let mut source = FixedSequence::new([u32::MAX, 2]);
    let mut state = CubeState::new();
    let twists = state.scramble(1, &mut source).unwrap();
    assert_eq!(twists, [Twist::cw(Face::L)]);
}

#[test]
fn test_scramble_fails_on_stuck_source() {
    let mut state = CubeState::new();
    let result = state.scramble(1, &mut FixedSequence::new([u32::MAX]));
    assert!(matches!(result, Err(ScrambleError::RandomnessUnavailable(_))));
    assert!(state.is_solved());

    // A long run of rejected values that eventually ends is still fine.
    let values = std::iter::repeat_n(u32::MAX, 63).chain([2]);
    let twists = state.scramble(1, &mut FixedSequence::new(values)).unwrap();
    assert_eq!(twists, [Twist::cw(Face::L)]);
}

#[test]
fn test_scramble_default_length() {
    let values = 0..DEFAULT_SCRAMBLE_LENGTH * 7;
    let mut state = CubeState::new();
    let twists = state.scramble_default(&mut FixedSequence::new(values)).unwrap();
    assert_eq!(twists.len(), DEFAULT_SCRAMBLE_LENGTH as usize);
    assert_eq!(DEFAULT_SCRAMBLE_LENGTH, 25);
    assert_eq!(state, scrambled_by(&twists));
}

#[test]
fn test_opposite_faces_commute() {
    for face in Face::ALL {
        let other = face.opposite();
        assert_ne!(face, other);
        assert_eq!(other.opposite(), face);
        assert!(face.adjacent_strips().iter().all(|&(f, _)| f != face && f != other));

        let a = scrambled_by(&[Twist::cw(face), Twist::ccw(other)]);
        let b = scrambled_by(&[Twist::ccw(other), Twist::cw(face)]);
        assert_eq!(a, b);
    }
}

#[test]
fn test_scramble_propagates_source_failure() {
    let mut state = CubeState::new();
    assert_eq!(
        state.scramble(25, &mut BrokenSource),
        Err(ScrambleError::RandomnessUnavailable(
            "entropy pool is gone".to_string()
        )),
    );
    assert!(state.is_solved());

    assert!(ScrambleParams::from_entropy_source(25, &mut BrokenSource).is_err());
}

#[test]
fn test_scramble_params_are_reproducible() {
    let time = "2026-01-02T03:04:05.678Z".parse().unwrap();
    let a = ScrambleParams::with_seed(DEFAULT_SCRAMBLE_LENGTH, time, "seed").generate();
    let b = ScrambleParams::with_seed(DEFAULT_SCRAMBLE_LENGTH, time, "seed").generate();
    let c = ScrambleParams::with_seed(DEFAULT_SCRAMBLE_LENGTH, time, "other").generate();
    let (a, b, c) = (a.unwrap(), b.unwrap(), c.unwrap());
    assert_eq!(a.twists.len(), DEFAULT_SCRAMBLE_LENGTH as usize);
    assert_eq!(a, b);
    assert_ne!(a.twists, c.twists);
    assert_eq!(a.state, scrambled_by(&a.twists));
}

#[test]
fn test_display_net() {
    let mut state = CubeState::new();
    state.twist(Twist::cw(Face::R));
    let expected = "    WWG\n    WWG\n    WWG\n\
                    OOO GGY RRR WBB\n\
                    OOO GGY RRR WBB\n\
                    OOO GGY RRR WBB\n\
                    \x20   YYB\n    YYB\n    YYB";
    assert_eq!(state.to_string(), expected);
}

proptest! {
    #[test]
    fn proptest_twist_then_reverse_is_identity(twists in arb_twists(), twist in arb_twist()) {
        let start = scrambled_by(&twists);
        let mut state = start.clone();
        state.twist(twist);
        state.twist(twist.rev());
        prop_assert_eq!(state, start);
    }

    #[test]
    fn proptest_ccw_is_three_cw(twists in arb_twists(), face in arb_face()) {
        let start = scrambled_by(&twists);
        let mut direct = start.clone();
        direct.rotate_face(face, Direction::Ccw);
        let mut repeated = start;
        for _ in 0..3 {
            repeated.rotate_face(face, Direction::Cw);
        }
        prop_assert_eq!(direct, repeated);
    }

    #[test]
    fn proptest_four_turns_are_identity(twists in arb_twists(), twist in arb_twist()) {
        let start = scrambled_by(&twists);
        let mut state = start.clone();
        state.twists([twist; 4]);
        prop_assert_eq!(state, start);
    }

    #[test]
    fn proptest_colors_are_conserved(twists in arb_twists()) {
        let state = scrambled_by(&twists);
        let counts = state.color_counts();
        prop_assert_eq!(counts.len(), 6);
        prop_assert!(counts.values().all(|&n| n == 9));
        prop_assert_eq!(state.facelets().count(), FACELET_COUNT);
    }

    #[test]
    fn proptest_inverse_sequence_solves(twists in arb_twists()) {
        let mut state = scrambled_by(&twists);
        state.twists(twists.iter().rev().map(|t| t.rev()));
        prop_assert!(state.is_solved());
    }

    #[test]
    fn proptest_notation_roundtrip(twists in arb_twists()) {
        prop_assert_eq!(parse_twists(&format_twists(&twists)), Ok(twists));
    }

    #[test]
    fn proptest_scramble_is_deterministic(
        values in prop::collection::vec(0..u32::MAX / 2, 1..10),
        count in 0_u32..30,
    ) {
        let mut a = CubeState::new();
        let mut b = CubeState::new();
        let ta = a.scramble(count, &mut FixedSequence::new(values.clone())).unwrap();
        let tb = b.scramble(count, &mut FixedSequence::new(values)).unwrap();
        prop_assert_eq!(ta.len(), count as usize);
        prop_assert_eq!(ta, tb);
        prop_assert_eq!(a, b);
    }
}
