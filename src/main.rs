use std::process::ExitCode;

fn main() -> ExitCode {
    ExitCode::from(file_gzip::run(std::env::args_os().skip(1)))
}
