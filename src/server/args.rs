use clap::Parser;
use std::path::PathBuf;

/// Service configuration, from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Serve hand-gesture predictions over HTTP", long_about = None)]
pub struct Args {
    /// Port to listen on, on all interfaces.
    #[arg(long, env = "PORT", default_value_t = crate::DEFAULT_PORT)]
    pub port: u16,
    /// Directory holding the three forest artifacts.
    #[arg(long, env = "MODELS_DIR", default_value = ".")]
    pub models: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from(["server", "--port", "8080", "--models", "artifacts"])
            .expect("parse");
        assert_eq!(args.port, 8080);
        assert_eq!(args.models, PathBuf::from("artifacts"));
    }

    #[test]
    fn rejects_bad_port() {
        assert!(Args::try_parse_from(["server", "--port", "eighty"]).is_err());
    }
}
