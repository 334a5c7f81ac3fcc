fn main() {
    if let Err(err) = pipevis_layout::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
