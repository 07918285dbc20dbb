fn main() {
    if let Err(err) = iotagen::cli::run_cli() {
        eprintln!("❌ {err:#}");
        std::process::exit(1);
    }
}
