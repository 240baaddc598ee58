//! ASCII sentence protocol for the rover RC receiver.
//!
//! Some receiver firmware reports its channels as plain text, one sentence
//! per line:
//!
//! ```text
//! I <c0> <c1> <c2> <c3> <c4> <c5> <c6> <c7>\n
//! ```
//!
//! A literal `I` marker followed by eight signed decimal/float channel
//! values in the same PWM-equivalent units SBUS calibration produces. This
//! crate provides the sentence parser ([`parse_sentence`]) and the
//! [`AsciiDecoder`] that reads one line per cycle from a serial link.

pub mod decoder;
pub mod sentence;

pub use decoder::AsciiDecoder;
pub use sentence::{parse_sentence, MAX_LINE_LENGTH, SENTENCE_CHANNELS};
