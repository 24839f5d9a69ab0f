fn main() {
    if let Err(err) = path_matrix::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
