fn main() {
    if let Err(err) = incident_timeline::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
