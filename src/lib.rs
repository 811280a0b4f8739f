//! A library which models the facelets of a 3x3x3 Rubik's cube and the twelve quarter turns
//! acting on them, along with move sequences, scrambling and bulk layout import.

#![deny(missing_docs)]

pub mod cube333;
pub mod error;
pub mod moves;
