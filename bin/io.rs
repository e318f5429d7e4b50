use std::fmt::Display;
use std::io::{self, BufRead, BufReader, ErrorKind, Lines, Read, Write};
use tracing::instrument;

/// A line oriented text console.
#[derive(Debug)]
pub struct Console<W: Write, R: Read> {
    writer: W,
    reader: Lines<BufReader<R>>,
}

impl<W: Write, R: Read> Console<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Console {
            writer,
            reader: BufReader::new(reader).lines(),
        }
    }

    /// Receive a line.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn recv(&mut self) -> io::Result<String> {
        self.reader.next().ok_or(ErrorKind::UnexpectedEof)?
    }

    /// Send a line.
    #[instrument(level = "trace", skip(self, msg), err, fields(%msg))]
    pub fn send<T: Display>(&mut self, msg: T) -> io::Result<()> {
        writeln!(&mut self.writer, "{}", msg)
    }

    /// Send a prompt and wait for the answer.
    pub fn ask<T: Display>(&mut self, prompt: T) -> io::Result<String> {
        write!(&mut self.writer, "{} ", prompt)?;
        self.flush()?;
        self.recv()
    }

    /// Flush the internal buffers.
    #[instrument(level = "trace", skip(self), err)]
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
