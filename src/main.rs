use std::process::ExitCode;

fn main() -> ExitCode {
    match loadgauge::entry::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
