//! Shared output sink handed to commands by a builder.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// A cloneable, shared writable stream.
///
/// Clones write to the same underlying sink, so a builder can hand the
/// same `Output` to every command it builds.
#[derive(Clone)]
pub struct Output {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
    stdout: bool,
}

impl Output {
    /// An output writing to the process's standard output
    pub fn stdout() -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(io::stdout()))),
            stdout: true,
        }
    }

    /// An output writing to `writer`
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(writer))),
            stdout: false,
        }
    }

    /// Whether this output is the process's standard output
    pub fn is_stdout(&self) -> bool {
        self.stdout
    }

    /// Whether `self` and `other` write to the same sink
    pub fn same_sink(&self, other: &Output) -> bool {
        Arc::ptr_eq(&self.sink, &other.sink)
    }

    /// Write `line` followed by a newline
    pub fn line(&self, line: &str) -> io::Result<()> {
        let mut out = self.clone();
        writeln!(out, "{}", line)?;
        out.flush()
    }

    fn with_sink<T>(
        &self,
        f: impl FnOnce(&mut (dyn Write + Send)) -> io::Result<T>,
    ) -> io::Result<T> {
        let mut guard = self
            .sink
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "output lock poisoned"))?;
        f(&mut **guard)
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_sink(|w| w.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.with_sink(|w| w.flush())
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("stdout", &self.stdout)
            .finish_non_exhaustive()
    }
}

/// In-memory sink whose contents can be read back, for capturing output
#[derive(Clone, Default, Debug)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        self.bytes
            .lock()
            .map(|b| String::from_utf8_lossy(&b).into_owned())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().map(|b| b.is_empty()).unwrap_or(true)
    }

    /// An [`Output`] writing into this buffer
    pub fn output(&self) -> Output {
        Output::from_writer(self.clone())
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self
            .bytes
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "buffer lock poisoned"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_sink() {
        let buffer = SharedBuffer::new();
        let out = buffer.output();
        let copy = out.clone();

        out.line("first").unwrap();
        copy.line("second").unwrap();

        assert!(out.same_sink(&copy));
        assert_eq!(buffer.contents(), "first\nsecond\n");
    }

    #[test]
    fn test_distinct_outputs_are_not_same_sink() {
        let a = Output::stdout();
        let b = Output::stdout();
        assert!(a.is_stdout());
        assert!(!a.same_sink(&b));
        assert!(!SharedBuffer::new().output().is_stdout());
    }
}
