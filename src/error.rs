//! This module defines general error types used throughout the crate.

use thiserror::Error;

/// Error for a bulk import that did not contain exactly 54 stickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a cube layout needs exactly 54 stickers, but {len} were given")]
pub struct InvalidLayoutSize {
    /// The number of stickers that were actually given
    pub len: usize,
}

/// Error for a move token that is not one of the 12 quarter turn generators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown move `{0}`")]
pub struct UnknownMoveError(pub String);

/// Error for a character that does not name a sticker colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown sticker `{0}`")]
pub struct UnknownStickerError(pub char);

/// Error for importing a layout from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImportError {
    /// one of the characters was not a sticker
    #[error(transparent)]
    Sticker(#[from] UnknownStickerError),
    /// the wrong number of stickers was given
    #[error(transparent)]
    Size(#[from] InvalidLayoutSize),
}
