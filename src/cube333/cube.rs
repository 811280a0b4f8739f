use super::moves::{Move333, MoveGenerator, Qtm};
use super::{Face, FaceGrid, Sticker, StickerCube, STICKER_COUNT};
use crate::error::{InvalidLayoutSize, UnknownMoveError};
use crate::moves::{Move, MoveSequence};

use log::{debug, trace};

/// A cube together with the moves applied to it since it was made or since its history was last
/// cleared.
///
/// Only moves made after the last `replace_all` can be undone, since earlier ones were made on a
/// layout that no longer exists.
///
/// All mutating operations either fully succeed or leave both the stickers and the history
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cube {
    state: StickerCube,
    history: MoveSequence<Move333>,
    // history length at the last import
    history_floor: usize,
}

impl Cube {
    /// A solved cube with an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current stickers.
    pub fn state(&self) -> StickerCube {
        self.state
    }

    /// Copy out the stickers of one face.
    pub fn face(&self, face: Face) -> FaceGrid {
        self.state.face(face)
    }

    /// All 54 stickers, face by face in the order U L F R B D, each face row by row.
    pub fn stickers(&self) -> [Sticker; STICKER_COUNT] {
        self.state.stickers()
    }

    /// Whether every face is a single colour.
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Replace every sticker at once. The layout is read face by face in the order
    /// U L F R B D, each face row by row, and must have exactly 54 stickers. The history is not
    /// touched, and no check is made that the layout can be reached by turning.
    pub fn replace_all(&mut self, layout: &[Sticker]) -> Result<(), InvalidLayoutSize> {
        self.state = StickerCube::try_from(layout)?;
        self.history_floor = self.history.len();
        debug!("replaced cube layout with {}", self.state);
        Ok(())
    }

    /// Turn a face and record the move.
    pub fn apply(&mut self, mv: Move333) {
        self.state = self.state.make_move(mv);
        self.history.push(mv);
        trace!("applied {mv}");
    }

    /// Parse a single move token such as `R` or `U'` and apply it.
    pub fn apply_token(&mut self, token: &str) -> Result<Move333, UnknownMoveError> {
        let mv = token.parse()?;
        self.apply(mv);
        Ok(mv)
    }

    /// Apply every move of a sequence in order.
    pub fn apply_moves(&mut self, mvs: &MoveSequence<Move333>) {
        for &mv in mvs.iter() {
            self.apply(mv);
        }
    }

    /// Parse a whitespace separated algorithm and apply it. Nothing is applied unless every
    /// token parses.
    pub fn apply_alg(&mut self, alg: &str) -> Result<(), UnknownMoveError> {
        let mvs = alg.parse()?;
        self.apply_moves(&mvs);
        Ok(())
    }

    /// Take back the most recent move in the history, returning it. Returns `None` without
    /// changing anything when there is no move since the last import to take back.
    pub fn undo(&mut self) -> Option<Move333> {
        if self.history.len() <= self.history_floor {
            return None;
        }
        let mv = self.history.pop()?;
        self.state = self.state.make_move(mv.inverse());
        debug!("undid {mv}");
        Some(mv)
    }

    /// The moves applied since the history was last cleared.
    pub fn history(&self) -> &MoveSequence<Move333> {
        &self.history
    }

    /// Forget the recorded moves without changing the stickers.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.history_floor = 0;
    }

    /// Apply `n` moves drawn uniformly from the 12 quarter turns, then clear the history.
    /// Returns the moves that were applied.
    pub fn shuffle(&mut self, n: usize, rng: &mut fastrand::Rng) -> MoveSequence<Move333> {
        let scramble: MoveSequence<Move333> = (0..n)
            .map(|_| Qtm::MOVE_LIST[rng.usize(..Qtm::SIZE)])
            .collect();
        self.apply_moves(&scramble);
        self.clear_history();
        debug!("shuffled cube with {n} moves: {scramble}");
        scramble
    }
}

impl From<StickerCube> for Cube {
    fn from(state: StickerCube) -> Self {
        Cube {
            state,
            history: MoveSequence::new(),
            history_floor: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mv;

    const SCRAMBLED: &str = "ROGBGWYYOBWOYGBRRWWYROWRGOBBGGORRGWYWBBGRBRWYYBYWBORGO";

    fn layout(s: &str) -> Vec<Sticker> {
        s.chars().map(|c| Sticker::try_from(c).unwrap()).collect()
    }

    #[test]
    fn new_cube_is_solved() {
        let cube = Cube::new();
        assert!(cube.is_solved());
        assert!(cube.history().is_empty());
        assert_eq!(cube.state(), StickerCube::SOLVED);
    }

    #[test]
    fn up_and_back() {
        let mut cube = Cube::new();
        cube.apply(mv!(U));
        assert!(!cube.is_solved());
        cube.apply(mv!(U, prime));
        assert!(cube.is_solved());
        assert_eq!(cube.stickers(), StickerCube::SOLVED.stickers());
        assert_eq!(cube.history().to_string(), "U U'");
    }

    #[test]
    fn right_four_times() {
        let mut cube = Cube::new();
        for _ in 0..4 {
            cube.apply_token("R").unwrap();
        }
        assert!(cube.is_solved());
        assert_eq!(cube.history().len(), 4);
    }

    #[test]
    fn replace_with_scrambled_layout() {
        let mut cube = Cube::new();
        cube.apply(mv!(F));
        cube.replace_all(&layout(SCRAMBLED)).unwrap();
        assert!(!cube.is_solved());
        assert_eq!(cube.stickers().to_vec(), layout(SCRAMBLED));
        assert_eq!(cube.face(Face::U)[0], layout("ROG")[..]);
        assert_eq!(cube.face(Face::D)[2], layout("RGO")[..]);
        // importing doesn't touch the history
        assert_eq!(cube.history().to_string(), "F");
    }

    #[test]
    fn replace_rejects_wrong_size() {
        let mut cube = Cube::new();
        cube.apply_alg("R U F'").unwrap();
        let before = cube.clone();

        let full = layout(SCRAMBLED);
        assert_eq!(
            cube.replace_all(&full[..53]),
            Err(InvalidLayoutSize { len: 53 })
        );
        assert_eq!(cube, before);

        let mut long = full.clone();
        long.push(Sticker::White);
        assert_eq!(
            cube.replace_all(&long),
            Err(InvalidLayoutSize { len: 55 })
        );
        assert_eq!(cube, before);

        assert_eq!(cube.replace_all(&[]), Err(InvalidLayoutSize { len: 0 }));
        assert_eq!(cube, before);
    }

    #[test]
    fn unknown_move_changes_nothing() {
        let mut cube = Cube::new();
        cube.apply_alg("R U").unwrap();
        let before = cube.clone();

        assert_eq!(
            cube.apply_token("Q"),
            Err(UnknownMoveError("Q".to_owned()))
        );
        assert_eq!(cube, before);

        // a bad token anywhere means none of the alg is applied
        assert_eq!(
            cube.apply_alg("F B Q L"),
            Err(UnknownMoveError("Q".to_owned()))
        );
        assert_eq!(cube, before);
    }

    #[test]
    fn undo_moves() {
        let mut cube = Cube::new();
        cube.apply_alg("R U R' F").unwrap();
        let after_three = {
            let mut c = Cube::new();
            c.apply_alg("R U R'").unwrap();
            c
        };
        assert_eq!(cube.undo(), Some(mv!(F)));
        assert_eq!(cube, after_three);
        for _ in 0..3 {
            assert!(cube.undo().is_some());
        }
        assert_eq!(cube.undo(), None);
        assert_eq!(cube, Cube::new());
    }

    #[test]
    fn undo_stops_at_import() {
        let mut cube = Cube::new();
        cube.apply(mv!(F));
        cube.replace_all(&StickerCube::SOLVED.stickers()).unwrap();
        assert_eq!(cube.undo(), None);
        assert!(cube.is_solved());
        assert_eq!(cube.history().to_string(), "F");

        cube.apply_alg("R U").unwrap();
        assert_eq!(cube.undo(), Some(mv!(U)));
        assert_eq!(cube.undo(), Some(mv!(R)));
        assert_eq!(cube.undo(), None);
        assert_eq!(cube.state(), StickerCube::SOLVED);

        // a rejected import doesn't move the floor
        cube.apply(mv!(L));
        assert!(cube.replace_all(&[Sticker::Red; 10]).is_err());
        assert_eq!(cube.undo(), Some(mv!(L)));

        cube.clear_history();
        cube.apply(mv!(D));
        assert_eq!(cube.undo(), Some(mv!(D)));
        assert!(cube.is_solved());
    }

    #[test]
    fn clear_history_keeps_stickers() {
        let mut cube = Cube::new();
        cube.apply_alg("F R'").unwrap();
        let state = cube.state();
        cube.clear_history();
        assert!(cube.history().is_empty());
        assert_eq!(cube.state(), state);
        assert_eq!(cube.undo(), None);
        assert_eq!(Cube::from(state).state(), state);
    }

    #[test]
    fn shuffle_clears_history() {
        let mut cube = Cube::new();
        cube.apply(mv!(L));
        let mut rng = fastrand::Rng::with_seed(7);
        let scramble = cube.shuffle(25, &mut rng);
        assert_eq!(scramble.len(), 25);
        assert!(cube.history().is_empty());

        let mut expected = Cube::new();
        expected.apply(mv!(L));
        expected.apply_moves(&scramble);
        assert_eq!(cube.state(), expected.state());
        assert_eq!(cube.state().sticker_counts(), [9; 6]);
    }

    #[test]
    fn shuffle_is_reproducible() {
        let mut a = Cube::new();
        let mut b = Cube::new();
        let sa = a.shuffle(30, &mut fastrand::Rng::with_seed(1234));
        let sb = b.shuffle(30, &mut fastrand::Rng::with_seed(1234));
        assert_eq!(sa, sb);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_shuffle() {
        let mut cube = Cube::new();
        cube.apply(mv!(B));
        let state = cube.state();
        assert!(cube.shuffle(0, &mut fastrand::Rng::with_seed(0)).is_empty());
        assert_eq!(cube.state(), state);
        assert!(cube.history().is_empty());
    }
}
