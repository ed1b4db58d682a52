//! End-to-end checks of the library surface against in-memory input.

use std::io::{self, Read};
use std::time::{Duration, Instant};

use poles_core::{Expected, InputFormatError, SurveyError, Tally, survey};
use pretty_assertions::assert_eq;

#[test]
fn documented_cases() {
    let cases = [
        ("0\n", "0 0"),
        ("3\n10 60 90\n", "1 1"),
        ("1\n50\n", "0 1"),
        ("1\n85\n", "0 0"),
        ("4\n-5 49 84 85\n", "2 1"),
    ];
    for (input, expected) in cases {
        let tally = survey(input.as_bytes()).expect("survey should succeed");
        assert_eq!(tally.to_string(), expected, "input {input:?}");
    }
}

#[test]
fn line_layout_does_not_change_the_tally() {
    let one_line = survey("6\n1 50 84 85 100 -7\n".as_bytes()).expect("one line");
    let many_lines = survey("6\n1\n50 84\n\n85\t100\r\n-7".as_bytes()).expect("many lines");
    let count_and_readings_together = survey("6 1 50 84 85 100 -7".as_bytes()).expect("same line");
    assert_eq!(one_line, Tally { replaced: 2, repaired: 2 });
    assert_eq!(many_lines, one_line);
    assert_eq!(count_and_readings_together, one_line);
}

#[test]
fn survey_matches_in_memory_tally() {
    let heights: Vec<i64> = (0..500).map(|i| (i * 37 % 211) - 60).collect();
    let input = format!(
        "{}\n{}\n",
        heights.len(),
        heights
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    );

    let streamed = survey(input.as_bytes()).expect("survey");
    let direct = Tally::from_heights(heights.iter().copied());
    assert_eq!(streamed, direct);

    let sound = heights.iter().filter(|h| **h >= 85).count() as u64;
    assert_eq!(streamed.flagged() + sound, heights.len() as u64);
}

#[test]
fn malformed_reading_reports_token_position() {
    let err = survey("3\n10 abc 90\n".as_bytes()).unwrap_err();
    let format = match err {
        SurveyError::Format(format) => format,
        other => panic!("expected a format error, got {other:?}"),
    };
    assert_eq!(format.ordinal(), 3);
    assert_eq!(format.expected(), Expected::Reading { index: 2, of: 3 });
    assert!(format.to_string().contains("line 2, column 4"));
}

#[test]
fn truncated_input_reports_missing_token() {
    let err = survey("5\n1 2 3".as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        SurveyError::Format(InputFormatError::MissingToken { ordinal: 5, .. })
    ));
}

/// Reader that fails after yielding its prefix.
struct FailingReader {
    prefix: io::Cursor<Vec<u8>>,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.prefix.read(buf)?;
        if n == 0 {
            return Err(io::Error::other("stdin went away"));
        }
        Ok(n)
    }
}

#[test]
fn read_failure_surfaces_as_io_error() {
    let reader = FailingReader {
        prefix: io::Cursor::new(b"2\n10 ".to_vec()),
    };
    let err = survey(io::BufReader::new(reader)).unwrap_err();
    assert!(matches!(err, SurveyError::Io(_)));
    assert!(err.to_string().starts_with("failed to read input"));
}

fn single_line_input(readings: usize) -> String {
    let mut input = format!("{readings}\n");
    input.push_str(&"60 ".repeat(readings));
    input.push('\n');
    input
}

fn fastest_survey(input: &str) -> Duration {
    (0..3)
        .map(|_| {
            let started = Instant::now();
            let tally = survey(input.as_bytes()).expect("survey");
            let elapsed = started.elapsed();
            assert_eq!(tally.replaced, 0);
            elapsed
        })
        .min()
        .unwrap_or_default()
}

#[test]
fn long_single_line_is_tallied() {
    let tally = survey(single_line_input(200_000).as_bytes()).expect("survey");
    assert_eq!(tally, Tally { replaced: 0, repaired: 200_000 });
}

#[test]
fn long_single_line_reports_late_column() {
    let readings = 100_000;
    let mut input = format!("{}\n", readings + 1);
    input.push_str(&"60 ".repeat(readings));
    input.push_str("oops\n");

    let err = survey(input.as_bytes()).unwrap_err();
    let SurveyError::Format(InputFormatError::InvalidInteger { position, .. }) = err else {
        panic!("expected an invalid reading");
    };
    assert_eq!(position.ordinal, readings + 2);
    assert_eq!(position.line, 2);
    assert_eq!(position.column, readings * 3 + 1);
}

#[test]
fn survey_time_grows_linearly_with_line_length() {
    let small = fastest_survey(&single_line_input(50_000));
    let large = fastest_survey(&single_line_input(200_000));
    // 4x the readings; a quadratic scan would take ~16x as long.
    assert!(
        large < small * 8 + Duration::from_millis(50),
        "50k readings took {small:?}, 200k took {large:?}"
    );
}
