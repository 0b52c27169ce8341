mod cli;
mod error;
mod manifest;
mod report;
mod validate;

fn main() {
    if let Err(error) = cli::execute() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
