use clap::Parser;
use log::LevelFilter;

/// Configuration for the humanizer HTTP server
#[derive(Debug, Clone, Parser)]
#[command(name = "rs-humanize-server")]
#[command(about = "HTTP endpoint for the text humanizer")]
pub struct Config {
	/// Address to bind (default: 127.0.0.1)
	#[arg(long, env = "HUMANIZE_HOST", default_value = "127.0.0.1")]
	pub host: String,

	/// Port to listen on (default: 5000)
	#[arg(short, long, env = "PORT", default_value = "5000")]
	pub port: u16,

	/// Log level (trace, debug, info, warn, error)
	#[arg(long, env = "HUMANIZE_LOG", default_value = "info")]
	pub log_level: String,
}

impl Config {
	/// Parsed log level, `Info` when the configured value is not a level.
	pub fn level_filter(&self) -> LevelFilter {
		self.log_level.parse().unwrap_or(LevelFilter::Info)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_explicit_flags() {
		let config = Config::try_parse_from([
			"rs-humanize-server",
			"--host",
			"0.0.0.0",
			"--port",
			"8080",
			"--log-level",
			"debug",
		])
		.unwrap();

		assert_eq!(config.host, "0.0.0.0");
		assert_eq!(config.port, 8080);
		assert_eq!(config.level_filter(), LevelFilter::Debug);
	}

	#[test]
	fn unknown_log_level_falls_back_to_info() {
		let config = Config::try_parse_from(["rs-humanize-server", "--log-level", "chatty"]).unwrap();
		assert_eq!(config.level_filter(), LevelFilter::Info);
	}

	#[test]
	fn rejects_invalid_port() {
		assert!(Config::try_parse_from(["rs-humanize-server", "--port", "99999"]).is_err());
	}
}
