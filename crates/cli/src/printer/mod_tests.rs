use super::*;

/// Writer that rejects everything, like a closed pipe.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

#[test]
fn text_printer_writes_newline_terminated_lines() {
    let mut printer = TextPrinter::new(Vec::new());
    printer.print_line("-rw-r--r-- 1 root root 0 Jan  1 00:00 a").unwrap();
    printer.print_message("Directory not found").unwrap();
    printer.finish().unwrap();

    let out = String::from_utf8(printer.into_inner()).unwrap();
    assert_eq!(
        out,
        "-rw-r--r-- 1 root root 0 Jan  1 00:00 a\nDirectory not found\n"
    );
}

#[test]
fn text_printer_surfaces_write_errors() {
    let mut printer = TextPrinter::new(ClosedPipe);
    assert!(printer.print_line("x").is_err());
    assert!(printer.finish().is_err());
}
