fn main() {
    if let Err(e) = cfpb_complaint_analyser::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
