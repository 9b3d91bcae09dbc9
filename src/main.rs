use std::process::ExitCode;

fn main() -> ExitCode {
    tagdex::cli::run()
}
