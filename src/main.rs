use std::process::ExitCode;

use patchbump::ui::output;

fn main() -> ExitCode {
    match patchbump::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(output::format_error_chain(&err));
            ExitCode::FAILURE
        }
    }
}
