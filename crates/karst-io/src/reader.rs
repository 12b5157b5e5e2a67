//! Batch playback reader.
//!
//! [`BatchReader`] decodes terrain cases from any `BufRead` source. The
//! case count header is validated on construction; cases are decoded
//! lazily as they are requested.

use std::io::BufRead;

use karst_engine::Terrain;

use crate::error::BatchError;

/// Reads a terrain batch from a line-oriented text stream.
///
/// Generic over `R: BufRead` so tests can use `&[u8]` and production
/// code can use `BufReader<File>`. Every line is trimmed before use,
/// and no line is skipped: a blank line inside a glyph block is a
/// zero-width row, not padding.
pub struct BatchReader<R: BufRead> {
    reader: R,
    case_count: usize,
    cases_read: usize,
    line: u64,
}

impl<R: BufRead> BatchReader<R> {
    /// Open a batch stream, reading and validating the case count.
    pub fn open(reader: R) -> Result<Self, BatchError> {
        let mut batch = Self {
            reader,
            case_count: 0,
            cases_read: 0,
            line: 0,
        };
        batch.case_count = batch.require_number("case count")?;
        Ok(batch)
    }

    /// Number of cases the header declared.
    pub fn case_count(&self) -> usize {
        self.case_count
    }

    /// Number of cases decoded so far.
    pub fn cases_read(&self) -> usize {
        self.cases_read
    }

    /// Decode the next case, or `None` once the declared count has
    /// been read.
    ///
    /// Anything in the stream past the final case is left unread.
    pub fn next_case(&mut self) -> Result<Option<Terrain>, BatchError> {
        if self.cases_read == self.case_count {
            return Ok(None);
        }
        let case = self.cases_read + 1;

        let rows = self.require_number("row count")?;
        let cols = self.require_number("column count")?;
        let mut glyph_rows = Vec::with_capacity(rows);
        for _ in 0..rows {
            glyph_rows.push(self.require_line("terrain row")?);
        }
        for row in &glyph_rows {
            let found = row.chars().count();
            if found != cols {
                return Err(BatchError::ShapeMismatch {
                    case,
                    declared: cols,
                    found,
                });
            }
        }

        let terrain = Terrain::from_rows(&glyph_rows)
            .map_err(|source| BatchError::Terrain { case, source })?;
        self.cases_read += 1;
        Ok(Some(terrain))
    }

    /// Decode every remaining case.
    pub fn read_all(mut self) -> Result<Vec<Terrain>, BatchError> {
        let mut terrains = Vec::with_capacity(self.case_count - self.cases_read);
        while let Some(terrain) = self.next_case()? {
            terrains.push(terrain);
        }
        Ok(terrains)
    }

    /// Convert into a case iterator.
    pub fn cases(self) -> CaseIter<R> {
        CaseIter {
            reader: self,
            done: false,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, BatchError> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some(buf.trim().to_string()))
    }

    fn require_line(&mut self, expected: &'static str) -> Result<String, BatchError> {
        self.next_line()?
            .ok_or(BatchError::UnexpectedEof { expected })
    }

    fn require_number(&mut self, expected: &'static str) -> Result<usize, BatchError> {
        let text = self.require_line(expected)?;
        text.parse().map_err(|_| BatchError::InvalidCount {
            line: self.line,
            text,
        })
    }
}

/// Iterator adapter over batch cases.
pub struct CaseIter<R: BufRead> {
    reader: BatchReader<R>,
    done: bool,
}

impl<R: BufRead> Iterator for CaseIter<R> {
    type Item = Result<Terrain, BatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.next_case() {
            Ok(Some(terrain)) => Some(Ok(terrain)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Read expected collapse steps from an outcome stream.
///
/// Each non-blank line holds a case index and that case's expected
/// collapse step; only the step is kept. Blank lines are ignored, but
/// still counted for error line numbers.
pub fn read_expected<R: BufRead>(reader: R) -> Result<Vec<u64>, BatchError> {
    let mut expected = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let step = text
            .split_whitespace()
            .nth(1)
            .and_then(|field| field.parse::<u64>().ok())
            .ok_or_else(|| BatchError::InvalidCount {
                line: idx as u64 + 1,
                text: text.to_string(),
            })?;
        expected.push(step);
    }
    Ok(expected)
}
