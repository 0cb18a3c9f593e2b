//! Line classification for the supported input formats.
//!
//! Classification is a pure function from one line of text to a tagged
//! variant describing the role that line plays. It never fails: lines that fit
//! no rule are tagged `Unknown`, and it is up to the reader to reject them.
//! Classifiers expect lines with trailing whitespace already removed; leading
//! whitespace is significant (EDL detail lines start with a space).

pub mod edl;
pub mod infowriter;

pub use edl::{EdlLine, classify_edl_line};
pub use infowriter::{EventLabel, InfoWriterLine, classify_infowriter_line};
