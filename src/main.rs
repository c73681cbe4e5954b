use std::process::ExitCode;

fn main() -> ExitCode {
    match viewer_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
