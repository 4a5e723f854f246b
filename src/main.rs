use std::env;
use std::process::ExitCode;

use unish::error::ShellError;
use unish::flags::Flags;
use unish::logging;
use unish::shell::Shell;

fn main() -> Result<ExitCode, ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if flags.is_set("version") {
        println!("unish {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    logging::init_tracing(flags.is_set("debug"), flags.is_set("quiet"));

    let mut shell = Shell::new(&flags)?;

    if let Some(line) = flags.get_value("command") {
        let succeeded = shell.accept(line)?;
        return Ok(if succeeded {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    Shell::install_interrupt_handler()?;
    shell.run()?;
    Ok(ExitCode::SUCCESS)
}
