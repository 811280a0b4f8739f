//! The 3x3x3 Rubik's cube, represented sticker by sticker.

/// The cube state store, which tracks move history.
pub mod cube;
/// The 12 quarter turns and how they permute stickers.
pub mod moves;
/// Random scrambles.
pub mod scramble;

pub use cube::Cube;

use crate::error::{ImportError, InvalidLayoutSize, UnknownStickerError};

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// The colour of a single sticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub enum Sticker {
    White,
    Yellow,
    Green,
    Blue,
    Orange,
    Red,
}

impl Sticker {
    /// Every sticker colour, in the order used by `StickerCube::sticker_counts`.
    pub const ARRAY: [Sticker; 6] = [
        Sticker::White,
        Sticker::Yellow,
        Sticker::Green,
        Sticker::Blue,
        Sticker::Orange,
        Sticker::Red,
    ];

    /// The single letter used for this colour in layouts.
    pub fn letter(self) -> char {
        match self {
            Sticker::White => 'W',
            Sticker::Yellow => 'Y',
            Sticker::Green => 'G',
            Sticker::Blue => 'B',
            Sticker::Orange => 'O',
            Sticker::Red => 'R',
        }
    }
}

impl TryFrom<char> for Sticker {
    type Error = UnknownStickerError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'W' => Sticker::White,
            'Y' => Sticker::Yellow,
            'G' => Sticker::Green,
            'B' => Sticker::Blue,
            'O' => Sticker::Orange,
            'R' => Sticker::Red,
            _ => return Err(UnknownStickerError(c)),
        })
    }
}

impl fmt::Display for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A face of the cube. The declaration order is the order faces are laid out in a
/// `StickerCube`, and so also the order of a bulk import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Face {
    /// Up
    U,
    /// Left
    L,
    /// Front
    F,
    /// Right
    R,
    /// Back
    B,
    /// Down
    D,
}

impl Face {
    /// Every face, in layout order.
    pub const ARRAY: [Face; 6] = [Face::U, Face::L, Face::F, Face::R, Face::B, Face::D];

    /// The face on the other side of the cube.
    pub fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::L => Face::R,
            Face::R => Face::L,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }

    /// The colour this face has on a solved cube.
    pub const fn solved_sticker(self) -> Sticker {
        match self {
            Face::U => Sticker::White,
            Face::D => Sticker::Yellow,
            Face::F => Sticker::Green,
            Face::B => Sticker::Blue,
            Face::L => Sticker::Orange,
            Face::R => Sticker::Red,
        }
    }

    /// Index of the first sticker of this face in a `StickerCube`.
    pub(crate) const fn offset(self) -> usize {
        self as usize * 9
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Number of stickers on a cube.
pub const STICKER_COUNT: usize = 54;

/// The sticker grid of a single face, indexed `[row][col]`.
pub type FaceGrid = [[Sticker; 3]; 3];

/// A cube stored as its 54 stickers. The stickers are laid out face by face in the order of
/// `Face::ARRAY`, and each face is stored row by row.
///
/// Every face is read as if looking straight at it, in the usual net orientation: the side
/// faces (L F R B) have row 0 touching U, U has row 2 touching F, D has row 0 touching F, and
/// U/D have column 0 touching L.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StickerCube {
    pub(crate) stickers: [Sticker; STICKER_COUNT],
}

impl Default for StickerCube {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl StickerCube {
    /// The solved cube stored as a const.
    pub const SOLVED: StickerCube = {
        let mut stickers = [Sticker::White; STICKER_COUNT];
        let mut i = 0;
        while i < STICKER_COUNT {
            stickers[i] = Face::ARRAY[i / 9].solved_sticker();
            i += 1;
        }
        StickerCube { stickers }
    };

    /// Copy out the stickers of one face.
    pub fn face(&self, face: Face) -> FaceGrid {
        let o = face.offset();
        std::array::from_fn(|r| std::array::from_fn(|c| self.stickers[o + 3 * r + c]))
    }

    /// All 54 stickers, in the same order `TryFrom<&[Sticker]>` reads them.
    pub fn stickers(&self) -> [Sticker; STICKER_COUNT] {
        self.stickers
    }

    /// How many stickers of each colour the cube has, indexed like `Sticker::ARRAY`.
    pub fn sticker_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for s in self.stickers {
            counts[s as usize] += 1;
        }
        counts
    }

    /// Whether every face is a single colour. Faces are not required to have different colours
    /// from each other.
    pub fn is_solved(&self) -> bool {
        self.stickers
            .chunks_exact(9)
            .all(|face| face.iter().all(|&s| s == face[0]))
    }
}

/// Reads a layout of exactly 54 stickers. No check is made that the layout is reachable.
impl TryFrom<&[Sticker]> for StickerCube {
    type Error = InvalidLayoutSize;

    fn try_from(layout: &[Sticker]) -> Result<Self, Self::Error> {
        let stickers: [Sticker; STICKER_COUNT] = layout
            .try_into()
            .map_err(|_| InvalidLayoutSize { len: layout.len() })?;
        Ok(StickerCube { stickers })
    }
}

/// Parses a layout written with the letters `WYGBOR`. Whitespace is ignored so faces can be
/// written on separate lines.
impl FromStr for StickerCube {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let layout = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Sticker::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(StickerCube::try_from(layout.as_slice())?)
    }
}

impl fmt::Display for StickerCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in self.stickers.chunks_exact(9) {
            for s in face {
                write!(f, "{s}")?;
            }
        }
        Ok(())
    }
}
