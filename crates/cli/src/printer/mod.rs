use std::io::{self, BufWriter, Write};

/// Sink for listing output and user-facing messages.
pub trait ListingPrinter {
    /// Write one listing line; the newline is added here.
    fn print_line(&mut self, line: &str) -> io::Result<()>;

    /// Write a user-facing message such as the usage text.
    fn print_message(&mut self, msg: &str) -> io::Result<()>;

    /// Flush anything buffered.
    fn finish(&mut self) -> io::Result<()>;
}

/// Plain-text printer over any writer.
pub struct TextPrinter<W: Write> {
    out: W,
}

impl<W: Write> TextPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextPrinter<BufWriter<io::Stdout>> {
    /// Buffered stdout printer; `finish` must run before exit.
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(io::stdout()))
    }
}

impl<W: Write> ListingPrinter for TextPrinter<W> {
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    fn print_message(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{msg}")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
