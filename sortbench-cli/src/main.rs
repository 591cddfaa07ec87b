fn main() {
    if let Err(e) = sortbench_cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
