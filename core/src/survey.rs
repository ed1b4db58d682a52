//! Single pass over the input: a pole count, then that many height readings.

use std::io::BufRead;
use std::str::FromStr;

use tracing::{debug, trace, warn};

use crate::condition::Condition;
use crate::error::{Expected, InputFormatError, Result};
use crate::tally::Tally;
use crate::tokens::TokenReader;

/// Reads the count and exactly that many readings, returning the tally.
///
/// Nothing past the last reading is read, so trailing input is ignored.
pub fn survey<R: BufRead>(input: R) -> Result<Tally> {
    let mut tokens = TokenReader::new(input);
    let result = run(&mut tokens);
    if let Err(err) = &result {
        warn!(consumed = tokens.consumed(), "survey aborted: {err}");
    }
    result
}

fn run<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<Tally> {
    let count: usize = next_integer(tokens, Expected::Count)?;
    debug!(count, "surveying poles");

    let mut tally = Tally::new();
    for index in 1..=count {
        let height: i64 = next_integer(tokens, Expected::Reading { index, of: count })?;
        let condition = Condition::classify(height);
        trace!(index, height, condition = condition.as_str(), "classified pole");
        tally.record(condition);
    }

    debug!(
        replaced = tally.replaced,
        repaired = tally.repaired,
        sound = count as u64 - tally.flagged(),
        "survey complete"
    );
    Ok(tally)
}

fn next_integer<R, T>(tokens: &mut TokenReader<R>, expected: Expected) -> Result<T>
where
    R: BufRead,
    T: FromStr,
{
    let Some(token) = tokens.next_token()? else {
        return Err(InputFormatError::MissingToken {
            expected,
            ordinal: tokens.consumed() + 1,
        }
        .into());
    };

    token.text.parse().map_err(|_| {
        InputFormatError::InvalidInteger {
            expected,
            token: token.text,
            position: token.position,
        }
        .into()
    })
}
