//! Line tokenizer for `.workstamps` logs.
//!
//! Every non-blank line becomes one [`Token`]:
//!
//! - `restarttotals` closes the current report.
//! - `YYYY-MM-DD HH:MM start` anchors a period without billable work.
//! - `YYYY-MM-DD HH:MM <customer> <description...>` records work up to that time.

use std::fmt;

use chrono::NaiveDateTime;

use crate::error::ParseError;

/// Marker line that separates reports.
pub const RESTART_MARKER: &str = "restarttotals";

/// Entry text that marks a period anchor.
const START_MARKER: &str = "start";

/// Layout of the timestamp prefix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Byte length of the timestamp prefix.
const TIMESTAMP_LEN: usize = 16;

/// A single parsed log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// 0-based index of the physical line, blank lines included.
    pub line: usize,
    pub kind: TokenKind,
}

/// What a log line says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Restart,
    Start {
        at: NaiveDateTime,
    },
    Work {
        at: NaiveDateTime,
        customer: String,
        description: String,
    },
}

impl Token {
    /// Parses one line. Surrounding whitespace is ignored.
    pub fn parse(line: usize, text: &str) -> Result<Self, ParseError> {
        let text = text.trim();
        if text == RESTART_MARKER {
            return Ok(Self {
                line,
                kind: TokenKind::Restart,
            });
        }

        let at = text
            .get(..TIMESTAMP_LEN)
            .and_then(|stamp| NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok())
            .ok_or_else(|| ParseError::Format {
                line,
                text: text.to_string(),
            })?;

        // The character right after the timestamp is the separator.
        let mut rest = text.get(TIMESTAMP_LEN..).unwrap_or_default().chars();
        rest.next();
        let info = rest.as_str();
        let kind = if info == START_MARKER {
            TokenKind::Start { at }
        } else {
            let (customer, description) = info.split_once(' ').unwrap_or((info, ""));
            TokenKind::Work {
                at,
                customer: customer.to_string(),
                description: description.to_string(),
            }
        };

        Ok(Self { line, kind })
    }

    /// The timestamp carried by start and work tokens.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        match &self.kind {
            TokenKind::Restart => None,
            TokenKind::Start { at } | TokenKind::Work { at, .. } => Some(*at),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line + 1)?;
        match &self.kind {
            TokenKind::Restart => f.write_str(RESTART_MARKER),
            TokenKind::Start { at } => write!(f, "{} {START_MARKER}", at.format(TIMESTAMP_FORMAT)),
            TokenKind::Work {
                at,
                customer,
                description,
            } => write!(
                f,
                "{} {customer} {description}",
                at.format(TIMESTAMP_FORMAT)
            ),
        }
    }
}

/// Lazily tokenizes log lines, skipping blank ones.
///
/// Line numbers count every input line, so diagnostics point at the
/// right place even when blank lines were skipped.
pub fn tokenize<I>(lines: I) -> impl Iterator<Item = Result<Token, ParseError>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, text)| !text.as_ref().trim().is_empty())
        .map(|(line, text)| Token::parse(line, text.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_restart_marker() {
        let token = Token::parse(12, "restarttotals").unwrap();
        assert_eq!(
            token,
            Token {
                line: 12,
                kind: TokenKind::Restart
            }
        );
        assert_eq!(token.timestamp(), None);
    }

    #[test]
    fn test_start_marker() {
        let token = Token::parse(12, "2001-02-03 15:34 start").unwrap();
        assert_eq!(
            token.kind,
            TokenKind::Start {
                at: dt(2001, 2, 3, 15, 34)
            }
        );
    }

    #[test]
    fn test_work_entry_keeps_full_description() {
        let token = Token::parse(12, "2001-02-03 15:34 customer my descrip tion").unwrap();
        assert_eq!(
            token.kind,
            TokenKind::Work {
                at: dt(2001, 2, 3, 15, 34),
                customer: "customer".to_string(),
                description: "my descrip tion".to_string(),
            }
        );
    }

    #[test]
    fn test_work_entry_without_description() {
        let token = Token::parse(0, "2001-02-03 15:34 customer").unwrap();
        assert_eq!(
            token.kind,
            TokenKind::Work {
                at: dt(2001, 2, 3, 15, 34),
                customer: "customer".to_string(),
                description: String::new(),
            }
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let token = Token::parse(3, "  2001-02-03 15:34 start \n").unwrap();
        assert!(matches!(token.kind, TokenKind::Start { .. }));
    }

    #[test]
    fn test_invalid_timestamps_are_format_errors() {
        for text in [
            "2001/02/03 15:34 start",
            "2001-02-30 15:34 start",
            "2001-02-03 25:00 start",
            "2001-02-03",
            "yesterday afternoon customer",
        ] {
            let err = Token::parse(7, text).unwrap_err();
            assert!(
                matches!(err, ParseError::Format { line: 7, .. }),
                "{text:?} should be a format error, got {err:?}"
            );
        }
    }

    #[test]
    fn test_multibyte_prefix_is_a_format_error_not_a_panic() {
        let err = Token::parse(0, "2001-02-03 15:3é start").unwrap_err();
        assert!(matches!(err, ParseError::Format { .. }));
    }

    #[test]
    fn test_multibyte_separator_is_skipped_as_one_character() {
        for text in ["2001-01-01 08:00\u{e9}acme desc", "2001-01-01 08:00\u{a0}acme desc"] {
            let token = Token::parse(0, text).unwrap();
            assert_eq!(
                token.kind,
                TokenKind::Work {
                    at: dt(2001, 1, 1, 8, 0),
                    customer: "acme".to_string(),
                    description: "desc".to_string(),
                },
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_multibyte_separator_before_start_marker() {
        let token = Token::parse(0, "2001-01-01 08:00\u{a0}start").unwrap();
        assert_eq!(
            token.kind,
            TokenKind::Start {
                at: dt(2001, 1, 1, 8, 0)
            }
        );
    }

    #[test]
    fn test_tokenize_skips_blank_lines_but_counts_them() {
        let lines = ["  ", "2001-02-03 15:34 start", "", "2001-02-03 16:00 acme fix"];
        let tokens: Vec<_> = tokenize(lines).collect::<Result<_, _>>().unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 3);
    }

    #[test]
    fn test_tokenize_is_lazy() {
        let lines = ["2001-02-03 15:34 start", "garbage"];
        let mut tokens = tokenize(lines);

        assert!(tokens.next().unwrap().is_ok());
        assert!(tokens.next().unwrap().is_err());
        assert!(tokens.next().is_none());
    }

    #[test]
    fn test_display() {
        let restart = Token::parse(23, "restarttotals").unwrap();
        assert_eq!(restart.to_string(), "line 24: restarttotals");

        let start = Token::parse(11, "2001-02-03 15:34 start").unwrap();
        assert_eq!(start.to_string(), "line 12: 2001-02-03 15:34 start");

        let work = Token::parse(11, "2001-02-03 15:34 cust desc").unwrap();
        assert_eq!(work.to_string(), "line 12: 2001-02-03 15:34 cust desc");
    }
}
