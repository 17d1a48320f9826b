//! Line producer for `default_type` files.
//!
//! Lines are read into one reusable growable buffer and handed out as
//! borrowed slices. Line endings are normalized here so the matching code
//! only ever sees line content.

use std::io::{BufRead, Read};

use super::DefaultTypeError;

/// Longest accepted line, in bytes, not counting the `\n` terminator.
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// One line of input, valid until the next call to [`ConfigLines::next_line`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigLine<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Line content without its terminator.
    pub bytes: &'a [u8],
}

/// Lazy, finite, non-restartable sequence of lines from a reader.
pub struct ConfigLines<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
    max_len: usize,
}

impl<R: BufRead> ConfigLines<R> {
    pub fn new(reader: R) -> Self {
        Self::with_max_len(reader, MAX_LINE_LEN)
    }

    pub fn with_max_len(reader: R, max_len: usize) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
            max_len,
        }
    }

    /// Number of lines handed out so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Read the next line, or `None` at end of stream.
    ///
    /// Exactly one trailing `\n` is stripped; anything before it (including
    /// a `\r`) is line content. A final line without terminator is returned
    /// whole.
    pub fn next_line(&mut self) -> Result<Option<ConfigLine<'_>>, DefaultTypeError> {
        self.buf.clear();
        let number = self.line + 1;

        // One byte of headroom for the terminator, one more to detect overflow.
        let limit = self.max_len as u64 + 1;
        let n = self
            .reader
            .by_ref()
            .take(limit)
            .read_until(b'\n', &mut self.buf)
            .map_err(|source| DefaultTypeError::Read {
                line: number,
                source,
            })?;
        if n == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.len() > self.max_len {
            return Err(DefaultTypeError::LineTooLong {
                line: number,
                max: self.max_len,
            });
        }

        self.line = number;
        Ok(Some(ConfigLine {
            number,
            bytes: &self.buf,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &[u8]) -> Vec<Vec<u8>> {
        let mut lines = ConfigLines::new(Cursor::new(input));
        let mut out = Vec::new();
        while let Some(line) = lines.next_line().unwrap() {
            out.push(line.bytes.to_vec());
        }
        out
    }

    #[test]
    fn strips_single_newline() {
        assert_eq!(collect(b"a:b\n\nc:d\n"), vec![b"a:b".to_vec(), vec![], b"c:d".to_vec()]);
    }

    #[test]
    fn keeps_last_line_without_newline() {
        assert_eq!(collect(b"a:b\nc:d"), vec![b"a:b".to_vec(), b"c:d".to_vec()]);
    }

    #[test]
    fn keeps_carriage_return() {
        assert_eq!(collect(b"a:b\r\n"), vec![b"a:b\r".to_vec()]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn line_numbers_count_from_one() {
        let mut lines = ConfigLines::new(Cursor::new(&b"x\ny\n"[..]));
        assert_eq!(lines.next_line().unwrap().unwrap().number, 1);
        assert_eq!(lines.next_line().unwrap().unwrap().number, 2);
        assert!(lines.next_line().unwrap().is_none());
        assert_eq!(lines.lines_read(), 2);
    }

    #[test]
    fn line_at_limit_is_accepted() {
        let mut lines = ConfigLines::with_max_len(Cursor::new(&b"abcd\nabcd"[..]), 4);
        assert_eq!(lines.next_line().unwrap().unwrap().bytes, b"abcd");
        assert_eq!(lines.next_line().unwrap().unwrap().bytes, b"abcd");
        assert!(lines.next_line().unwrap().is_none());
    }

    #[test]
    fn line_over_limit_is_rejected() {
        let mut lines = ConfigLines::with_max_len(Cursor::new(&b"ok\nabcde\n"[..]), 4);
        assert_eq!(lines.next_line().unwrap().unwrap().bytes, b"ok");
        match lines.next_line() {
            Err(DefaultTypeError::LineTooLong { line, max }) => {
                assert_eq!(line, 2);
                assert_eq!(max, 4);
            }
            other => panic!("expected LineTooLong, got {:?}", other.map(|l| l.map(|l| l.number))),
        }
    }
}
