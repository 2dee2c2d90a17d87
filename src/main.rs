//! coursework CLI binary
//!
//! All logic is in the library; main.rs only invokes cli::run().

fn main() {
    // cli::run() handles ALL output including errors
    let code = match coursework::cli::run() {
        Ok(()) => coursework::ExitCode::SUCCESS,
        Err(code) => code,
    };
    std::process::exit(code.as_i32());
}
