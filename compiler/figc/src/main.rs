//! The `fig` command.

use std::process::ExitCode;

use figc::{init_tracing, parse_args, write_output, Command, Session, USAGE};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let mut session = Session::new();
    let mut failed = false;

    for path in &options.programs {
        if let Err(err) = session.run_file(path) {
            eprintln!("ERROR\n  {err}");
            failed = true;
        }
    }

    let data = session.export();
    for (format, path) in &options.outputs {
        if let Err(err) = write_output(*format, &data, path) {
            eprintln!("error: {err}");
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
