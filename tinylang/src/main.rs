use std::process::ExitCode;

use tinylang_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    tinylang_driver::run(argument)
}
