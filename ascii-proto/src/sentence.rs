//! `I`-sentence parsing.

/// Channels carried by one sentence.
pub const SENTENCE_CHANNELS: usize = 8;

/// Longest line the reader will buffer, with slack beyond a nominal
/// sentence for trailing junk.
pub const MAX_LINE_LENGTH: usize = 128;

/// Parse an `I <c0> … <c7>` sentence into eight channel values.
///
/// The line must begin with the literal marker `I` and a space; the eight
/// values are signed decimal/float tokens separated by whitespace. Anything
/// after the eighth token is ignored, matching the transmitter firmware's
/// loose framing.
#[must_use]
pub fn parse_sentence(line: &[u8]) -> Option<[f64; SENTENCE_CHANNELS]> {
    let line = core::str::from_utf8(line).ok()?;
    let values = line.strip_prefix("I ")?;

    let mut tokens = values.split_ascii_whitespace();
    let mut channels = [0.0; SENTENCE_CHANNELS];
    for slot in &mut channels {
        *slot = tokens.next()?.parse().ok()?;
    }
    Some(channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nominal_sentence() {
        let line = b"I 1500 1500.5 1600 1500 1950 -1.25 0 42";
        let channels = parse_sentence(line).unwrap();
        assert_eq!(
            channels,
            [1500.0, 1500.5, 1600.0, 1500.0, 1950.0, -1.25, 0.0, 42.0]
        );
    }

    #[test]
    fn test_parse_tolerates_extra_spacing_and_trailing_junk() {
        let line = b"I 1500  1500   1600 1500 1950 0 0 42 junk that follows";
        let channels = parse_sentence(line).unwrap();
        assert_eq!(channels[7], 42.0);
    }

    #[test]
    fn test_parse_tolerates_carriage_return() {
        let line = b"I 1 2 3 4 5 6 7 8\r";
        let channels = parse_sentence(line).unwrap();
        assert_eq!(channels[7], 8.0);
    }

    #[test]
    fn test_rejects_wrong_marker() {
        assert!(parse_sentence(b"G 1 2 3 4 5 6 7 8").is_none());
        assert!(parse_sentence(b" I 1 2 3 4 5 6 7 8").is_none());
        assert!(parse_sentence(b"I1 2 3 4 5 6 7 8").is_none());
    }

    #[test]
    fn test_rejects_short_or_malformed_sentences() {
        assert!(parse_sentence(b"").is_none());
        assert!(parse_sentence(b"I").is_none());
        assert!(parse_sentence(b"I 1 2 3 4 5 6 7").is_none());
        assert!(parse_sentence(b"I 1 2 3 4 x 6 7 8").is_none());
    }

    #[test]
    fn test_rejects_non_utf8() {
        assert!(parse_sentence(&[b'I', b' ', 0xFF, 0xFE]).is_none());
    }
}
