use protoroute::cli::run_cli;
use protoroute::logging::init_logging;

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: {e:#}");
    }

    if let Err(e) = run_cli() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
