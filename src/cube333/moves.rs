use super::{Face, StickerCube};
use crate::error::UnknownMoveError;
use crate::moves::{Cancellation, MoveSequence};

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Which way a face is turned, as seen when looking straight at that face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Direction {
    /// A quarter turn clockwise, e.g. `R`
    Clockwise,
    /// A quarter turn anticlockwise, e.g. `R'`
    CounterClockwise,
}

impl Direction {
    /// The number of clockwise quarter turns this direction amounts to.
    pub fn count(self) -> u8 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => 3,
        }
    }

    /// The other direction.
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// One of the 12 quarter turn generators of the cube.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct Move333 {
    pub face: Face,
    pub dir: Direction,
}

impl crate::moves::Move for Move333 {
    fn inverse(self) -> Self {
        Self {
            face: self.face,
            dir: self.dir.inverse(),
        }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        self.face == b.face || self.face.opposite() == b.face
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.face == b.face && self.dir != b.dir {
            Cancellation::NoMove
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

// I don't want to have the default derive debug for this!
impl fmt::Debug for Move333 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Move333 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dir {
            Direction::Clockwise => write!(f, "{:?}", self.face),
            Direction::CounterClockwise => write!(f, "{:?}'", self.face),
        }
    }
}

impl FromStr for Move333 {
    type Err = UnknownMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || UnknownMoveError(s.to_owned());
        let (face, dir) = match s.strip_suffix('\'') {
            Some(face) => (face, Direction::CounterClockwise),
            None => (s, Direction::Clockwise),
        };
        let face = match face {
            "U" => Face::U,
            "D" => Face::D,
            "F" => Face::F,
            "B" => Face::B,
            "L" => Face::L,
            "R" => Face::R,
            _ => return Err(unknown()),
        };
        Ok(Move333 { face, dir })
    }
}

/// A fixed set of moves, such as the quarter turns [`Cube::shuffle`] draws its random moves
/// from.
///
/// [`Cube::shuffle`]: super::Cube::shuffle
pub trait MoveGenerator {
    /// The amount of moves that are available in the moveset.
    const SIZE: usize;
    /// A list of all valid moves.
    const MOVE_LIST: &'static [Move333];
}

impl From<Move333> for usize {
    fn from(mv: Move333) -> usize {
        (mv.dir as usize) * 6 + mv.face as usize
    }
}

/// Create a move by specifying a face, and `prime` for an anticlockwise turn. Note that you do
/// not need to specify for example Face::R, you only need to specify R.
#[macro_export]
macro_rules! mv {
    ($face:ident) => {
        $crate::cube333::moves::Move333 {
            face: $crate::cube333::Face::$face,
            dir: $crate::cube333::moves::Direction::Clockwise,
        }
    };
    ($face:ident, prime) => {
        $crate::cube333::moves::Move333 {
            face: $crate::cube333::Face::$face,
            dir: $crate::cube333::moves::Direction::CounterClockwise,
        }
    };
}

/// Type for Quarter Turn Metric. The list is ordered so that a move's index is `usize::from`
/// of that move.
pub struct Qtm;

impl MoveGenerator for Qtm {
    const SIZE: usize = 12;
    const MOVE_LIST: &'static [Move333] = &[
        mv!(U),
        mv!(L),
        mv!(F),
        mv!(R),
        mv!(B),
        mv!(D),
        mv!(U, prime),
        mv!(L, prime),
        mv!(F, prime),
        mv!(R, prime),
        mv!(B, prime),
        mv!(D, prime),
    ];
}

// For each face (in layout order), the four strips of neighbouring stickers a clockwise turn
// carries around. Sticker k of strip i moves to sticker k of strip i + 1, and strip 3 wraps
// back to strip 0.
const STRIPS: [[[usize; 3]; 4]; 6] = [
    // U: F top -> L top -> B top -> R top
    [[18, 19, 20], [9, 10, 11], [36, 37, 38], [27, 28, 29]],
    // L: U left -> F left -> D left -> B right
    [[0, 3, 6], [18, 21, 24], [45, 48, 51], [44, 41, 38]],
    // F: U bottom -> R left -> D top -> L right
    [[6, 7, 8], [27, 30, 33], [47, 46, 45], [17, 14, 11]],
    // R: U right -> B left -> D right -> F right
    [[2, 5, 8], [42, 39, 36], [47, 50, 53], [20, 23, 26]],
    // B: U top -> L left -> D bottom -> R right
    [[0, 1, 2], [15, 12, 9], [53, 52, 51], [29, 32, 35]],
    // D: F bottom -> R bottom -> B bottom -> L bottom
    [[24, 25, 26], [33, 34, 35], [42, 43, 44], [15, 16, 17]],
];

impl StickerCube {
    /// Apply an algorithm to a cube
    pub fn make_moves(self, mvs: &MoveSequence<Move333>) -> StickerCube {
        mvs.iter().fold(self, |c, &m| c.make_move(m))
    }

    /// Apply a move to a cube. An anticlockwise turn is three clockwise ones.
    pub fn make_move(self, mv: Move333) -> StickerCube {
        (0..mv.dir.count()).fold(self, |c, _| c.turn_clockwise(mv.face))
    }

    /// Make a single clockwise quarter turn of a face.
    pub fn turn_clockwise(self, face: Face) -> StickerCube {
        let old = self.stickers;
        let mut stickers = old;

        // (r, c) -> (c, 2 - r) on the turning face
        let o = face.offset();
        for r in 0..3 {
            for c in 0..3 {
                stickers[o + 3 * c + 2 - r] = old[o + 3 * r + c];
            }
        }

        let strips = &STRIPS[face as usize];
        for i in 0..4 {
            let (from, to) = (strips[i], strips[(i + 1) % 4]);
            for k in 0..3 {
                stickers[to[k]] = old[from[k]];
            }
        }

        StickerCube { stickers }
    }
}
