//! Root of the `poles-core` library.
//!
//! Reads a pole count followed by that many height readings from a token
//! stream and tallies how many poles must be replaced and how many repaired.
//!
//! ```
//! use poles_core::survey;
//!
//! let tally = survey("4\n-5 49 84 85\n".as_bytes()).unwrap();
//! assert_eq!(tally.to_string(), "2 1");
//! ```

// Library code never writes to stdout/stderr directly. Results go back to
// the caller and diagnostics go through tracing.
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod condition;
pub mod error;
pub mod survey;
pub mod tally;
pub mod tokens;

pub use condition::{Condition, REPAIR_BELOW, REPLACE_BELOW};
pub use error::{Expected, InputFormatError, Result, SurveyError};
pub use survey::survey;
pub use tally::Tally;
pub use tokens::{Position, Token, TokenReader};
