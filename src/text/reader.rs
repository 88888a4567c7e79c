//! Growable line and word reader
//!
//! The buffer starts small and doubles whenever it is full, so lines of
//! any length are accepted. Growth goes through `Vec::try_reserve_exact`,
//! which reports allocation failure as `LineError::OutOfMemory` instead of
//! aborting; the partial buffer is dropped on that path.

use std::io::BufRead;

use super::LineError;

/// Default starting capacity of the line buffer, in bytes
pub const INITIAL_CAPACITY: usize = 16;

/// Reads lines or whitespace-separated words from a buffered stream
pub struct LineReader<R> {
    inner: R,
    initial_capacity: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Create a reader with the default starting capacity
    pub fn new(inner: R) -> Self {
        Self::with_capacity(inner, INITIAL_CAPACITY)
    }

    /// Create a reader whose buffers start at `capacity` bytes (at least 1)
    pub fn with_capacity(inner: R, capacity: usize) -> Self {
        Self {
            inner,
            initial_capacity: capacity.max(1),
        }
    }

    /// Read up to the next newline or end of input
    ///
    /// The newline is consumed but not returned; all other whitespace is
    /// kept verbatim.
    ///
    /// # Returns
    /// * `Ok(None)` - end of input before any character was read
    /// * `Ok(Some(line))` - a line, possibly empty
    pub fn read_line(&mut self) -> Result<Option<String>, LineError> {
        let mut buf = self.new_buffer()?;
        let mut saw_any = false;

        while let Some(b) = self.next_byte()? {
            saw_any = true;
            if b == b'\n' {
                break;
            }
            push_byte(&mut buf, b)?;
        }

        if !saw_any {
            return Ok(None);
        }
        log::debug!("Read line of {} bytes (capacity {})", buf.len(), buf.capacity());
        Ok(Some(into_string(buf)))
    }

    /// Read the next whitespace-separated word, `None` at end of input
    pub fn read_word(&mut self) -> Result<Option<String>, LineError> {
        // Skip leading whitespace
        let first = loop {
            match self.next_byte()? {
                None => return Ok(None),
                Some(b) if b.is_ascii_whitespace() => continue,
                Some(b) => break b,
            }
        };

        let mut buf = self.new_buffer()?;
        push_byte(&mut buf, first)?;
        while let Some(b) = self.next_byte()? {
            if b.is_ascii_whitespace() {
                break;
            }
            push_byte(&mut buf, b)?;
        }

        Ok(Some(into_string(buf)))
    }

    /// Read every remaining word until end of input
    pub fn read_words(&mut self) -> Result<Vec<String>, LineError> {
        let mut words = Vec::new();
        while let Some(word) = self.read_word()? {
            words.push(word);
        }
        Ok(words)
    }

    fn new_buffer(&self) -> Result<Vec<u8>, LineError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(self.initial_capacity)
            .map_err(|_| LineError::OutOfMemory(self.initial_capacity))?;
        Ok(buf)
    }

    fn next_byte(&mut self) -> Result<Option<u8>, LineError> {
        let available = self.inner.fill_buf()?;
        let Some(&b) = available.first() else {
            return Ok(None);
        };
        self.inner.consume(1);
        Ok(Some(b))
    }
}

/// Append one byte, doubling the capacity when the buffer is full
fn push_byte(buf: &mut Vec<u8>, b: u8) -> Result<(), LineError> {
    if buf.len() == buf.capacity() {
        let grow_by = buf.capacity().max(1);
        buf.try_reserve_exact(grow_by)
            .map_err(|_| LineError::OutOfMemory(buf.capacity().saturating_mul(2)))?;
    }
    buf.push(b);
    Ok(())
}

fn into_string(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
