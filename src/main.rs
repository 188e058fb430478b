fn main() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .try_init();

    let args: Vec<String> = std::env::args().collect();
    if let Err(err) = rgb565_hex::run(&args) {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}
