/// Initialize the logger with the specified verbosity level
///
/// # Arguments
/// * `verbose` - Verbosity level (0=warn, 1=info, 2=debug, 3+=trace)
///
/// `RUST_LOG`, when set, takes precedence over the verbosity flag.
pub fn setup_logger(verbose: u8) {
    let env_filter = filter_for(verbose);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(env_filter))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}

fn filter_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "semv=warn",
        1 => "semv=info",
        2 => "semv=debug",
        _ => "semv=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_verbosity() {
        assert_eq!(filter_for(0), "semv=warn");
        assert_eq!(filter_for(1), "semv=info");
        assert_eq!(filter_for(2), "semv=debug");
        assert_eq!(filter_for(3), "semv=trace");
        assert_eq!(filter_for(u8::MAX), "semv=trace");
    }
}
