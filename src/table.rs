use std::str::FromStr;

use logos::Logos;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;
use time::{Date, Month};

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\r]+|%[^\n]*")] // Blanks, and comments up to the end of the line
enum Token {
    #[regex(r"[-+]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][-+]?[0-9]+)?")]
    Number,
    #[token("NaN")]
    #[token("nan")]
    NaN,

    #[token("\n")]
    Crlf,
}

/// Columns of a Berkeley Earth `*-Trend.txt` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Column {
    Year,
    Month,
    MonthlyAnomaly,
    MonthlyUncertainty,
    AnnualAnomaly,
    AnnualUncertainty,
    FiveYearAnomaly,
    FiveYearUncertainty,
    TenYearAnomaly,
    TenYearUncertainty,
    TwentyYearAnomaly,
    TwentyYearUncertainty,
}

/// A rectangular table of numbers, stored row by row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    width: usize,
    values: Vec<f64>,
}

#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("Unexpected token `{token}`")]
    #[diagnostic(code(tavg::table::unexpected_token))]
    UnexpectedToken {
        token: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a number")]
        span: SourceSpan,
    },
    #[error("Bad number `{token}`")]
    #[diagnostic(code(tavg::table::bad_number))]
    BadNumber {
        token: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },
    #[error("Row at line {line} has {found} columns, expected {expected}")]
    #[diagnostic(
        code(tavg::table::ragged_row),
        help("every data row must have as many values as the first one")
    )]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("this row")]
        span: SourceSpan,
    },
}

#[derive(Debug, Error)]
pub enum DateError {
    #[error("Table has {0} columns, need a year and a month")]
    MissingColumns(usize),
    #[error("Bad year: {0}")]
    BadYear(f64),
    #[error("Bad month: {0}")]
    BadMonth(f64),
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] time::error::ComponentRange),
}

// Accumulates values and checks that every row has the same width.
struct Rows<'a> {
    name: &'a str,
    input: &'a str,
    width: Option<usize>,
    values: Vec<f64>,
    // (byte offset, line) of the first value of the current row
    start: Option<(usize, usize)>,
    current: usize,
}

impl<'a> Rows<'a> {
    fn push(&mut self, value: f64, offset: usize, line: usize) {
        self.start.get_or_insert((offset, line));
        self.current += 1;
        self.values.push(value);
    }

    fn end_row(&mut self, end: usize) -> Result<(), ParseError> {
        let Some((start, line)) = self.start.take() else {
            // blank or comment-only line
            return Ok(());
        };
        let found = std::mem::take(&mut self.current);

        match self.width {
            None => self.width = Some(found),
            Some(expected) if expected != found => {
                return Err(ParseError::RaggedRow {
                    line,
                    expected,
                    found,
                    src: self.source(),
                    span: (start, end - start).into(),
                })
            }
            Some(_) => (),
        }
        Ok(())
    }

    fn source(&self) -> NamedSource<String> {
        NamedSource::new(self.name, self.input.to_string())
    }
}

impl Table {
    /// Parse whitespace separated numbers, one row per line.
    ///
    /// `%` starts a comment running to the end of the line, blank lines are
    /// ignored and `NaN` is accepted as a value. `name` is only used to label
    /// errors.
    pub fn parse(name: &str, s: &str) -> Result<Self, ParseError> {
        let mut rows = Rows {
            name,
            input: s,
            width: None,
            values: Vec::new(),
            start: None,
            current: 0,
        };
        let mut line = 1;
        let mut lexer = Token::lexer(s);

        while let Some(token) = lexer.next() {
            let span = lexer.span();
            match token {
                Ok(Token::Number) => {
                    let value = lexer.slice().parse().map_err(|_| ParseError::BadNumber {
                        token: lexer.slice().to_string(),
                        src: rows.source(),
                        span: span.clone().into(),
                    })?;
                    rows.push(value, span.start, line);
                }
                Ok(Token::NaN) => rows.push(f64::NAN, span.start, line),
                Ok(Token::Crlf) => {
                    rows.end_row(span.start)?;
                    line += 1;
                }
                Err(()) => {
                    return Err(ParseError::UnexpectedToken {
                        token: lexer.slice().to_string(),
                        src: rows.source(),
                        span: span.into(),
                    })
                }
            }
        }
        rows.end_row(s.len())?;

        Ok(Self {
            width: rows.width.unwrap_or(0),
            values: rows.values,
        })
    }

    /// Number of columns, 0 for an empty table.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.values.len() / self.width
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on 0
        self.values.chunks_exact(self.width.max(1))
    }

    pub fn column(&self, idx: usize) -> Option<Vec<f64>> {
        if idx >= self.width {
            return None;
        }
        Some(self.rows().map(|row| row[idx]).collect())
    }

    pub fn series(&self, column: Column) -> Option<Vec<f64>> {
        self.column(column as usize)
    }

    /// First day of the month of every row, read from the year and month columns.
    pub fn dates(&self) -> Result<Vec<Date>, DateError> {
        if self.width <= Column::Month as usize {
            return Err(DateError::MissingColumns(self.width));
        }

        self.rows()
            .map(|row| {
                let (year, month) = (row[Column::Year as usize], row[Column::Month as usize]);
                if year.fract() != 0.0 || year.abs() > 9999.0 {
                    return Err(DateError::BadYear(year));
                }
                if month.fract() != 0.0 || !(1.0..=12.0).contains(&month) {
                    return Err(DateError::BadMonth(month));
                }
                let month = Month::try_from(month as u8)?;
                Ok(Date::from_calendar_date(year as i32, month, 1)?)
            })
            .collect()
    }

    /// Dates as fractional years, centered on each month (`1850 + 0.5 / 12` for January 1850).
    pub fn date_fractions(&self) -> Result<Vec<f64>, DateError> {
        Ok(self.dates()?.into_iter().map(date_fraction).collect())
    }
}

pub fn date_fraction(date: Date) -> f64 {
    date.year() as f64 + (date.month() as u8 as f64 - 0.5) / 12.0
}

impl FromStr for Table {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("input", s)
    }
}
