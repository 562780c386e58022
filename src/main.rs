use gencerts::cli::Cli;

fn main() {
    Cli::run();
}
