use log::LevelFilter;

/// Sets up `env_logger`. An explicit filter wins over `RUST_LOG`, `info` is
/// the fallback.
pub fn init_logging(filter: Option<&str>) {
    let mut builder = env_logger::Builder::new();

    match filter.map(str::to_owned).or_else(|| std::env::var("RUST_LOG").ok()) {
        Some(filter) => {
            builder.parse_filters(&filter);
        }
        None => {
            builder.filter_level(LevelFilter::Info);
        }
    }

    builder.init();

    log::debug!("logging initialized");
}
