use std::process::ExitCode;

mod commands;
mod printer;

use lsl_runtime::logging;
use printer::TextPrinter;

fn main() -> ExitCode {
    logging::init().ok();

    let mut printer = TextPrinter::stdout();
    commands::list::run(std::env::args_os(), &mut printer).into()
}
