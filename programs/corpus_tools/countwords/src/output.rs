use crate::error::CountError;
use crate::rank::WordCount;
use std::io::{BufWriter, Write};

/// Tokens are written as the raw bytes they were read as.
pub fn write_table<W: Write>(words: &[WordCount], out: W) -> Result<(), CountError> {
    let mut wtr = BufWriter::new(out);
    for WordCount { word, count } in words {
        write!(wtr, "{count:>16} ").map_err(CountError::Write)?;
        wtr.write_all(word).map_err(CountError::Write)?;
        wtr.write_all(b"\n").map_err(CountError::Write)?;
    }
    wtr.flush().map_err(CountError::Write)
}

/// Invalid UTF-8 in a token becomes U+FFFD here, and only here.
pub fn write_json<W: Write>(words: &[WordCount], out: W) -> Result<(), CountError> {
    let mut wtr = BufWriter::new(out);
    serde_json::to_writer_pretty(&mut wtr, words).map_err(CountError::Encode)?;
    wtr.write_all(b"\n").map_err(CountError::Write)?;
    wtr.flush().map_err(CountError::Write)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    const WORDS: [WordCount<'static>; 3] = [
        WordCount { word: b"a", count: 3 },
        WordCount { word: b"b", count: 2 },
        WordCount { word: b"c", count: 1 },
    ];

    struct Full;

    impl Write for Full {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn table(words: &[WordCount]) -> String {
        let mut out = Vec::new();
        write_table(words, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn json(words: &[WordCount]) -> String {
        let mut out = Vec::new();
        write_json(words, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn table_right_aligns_counts() {
        assert_eq!(
            table(&WORDS),
            concat!(
                "               3 a\n",
                "               2 b\n",
                "               1 c\n",
            )
        );
    }

    #[test]
    fn table_widens_for_huge_counts() {
        let words = [WordCount {
            word: b"many",
            count: 12_345_678_901_234_567,
        }];
        assert_eq!(table(&words), "12345678901234567 many\n");
    }

    #[test]
    fn empty_table_writes_nothing() {
        assert_eq!(table(&[]), "");
    }

    #[test]
    fn json_is_indented_with_two_spaces() {
        let words = [WordCount { word: b"x", count: 2 }];
        assert_eq!(
            json(&words),
            "[\n  {\n    \"word\": \"x\",\n    \"count\": 2\n  }\n]\n"
        );
    }

    #[test]
    fn json_round_trips_to_objects() {
        let value: serde_json::Value = serde_json::from_str(&json(&WORDS)).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"word": "a", "count": 3},
                {"word": "b", "count": 2},
                {"word": "c", "count": 1},
            ])
        );
    }

    #[test]
    fn table_keeps_raw_bytes() {
        let words = [WordCount { word: b"caf\xe9", count: 2 }];
        let mut out = Vec::new();
        write_table(&words, &mut out).unwrap();
        assert_eq!(out, b"               2 caf\xe9\n".to_vec());
    }

    #[test]
    fn json_replaces_invalid_utf8() {
        let words = [WordCount { word: b"caf\xe9", count: 2 }];
        let value: serde_json::Value = serde_json::from_str(&json(&words)).unwrap();
        assert_eq!(value, serde_json::json!([{"word": "caf\u{fffd}", "count": 2}]));
    }

    #[test]
    fn empty_json_is_an_empty_array() {
        assert_eq!(json(&[]), "[]\n");
    }

    #[test]
    fn write_failures_are_reported() {
        let err = write_table(&WORDS, Full).unwrap_err();
        assert!(matches!(err, CountError::Write(_)));

        let err = write_json(&WORDS, Full).unwrap_err();
        assert!(matches!(err, CountError::Encode(_) | CountError::Write(_)));
    }
}
