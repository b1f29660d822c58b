mod config;
mod routes;

use std::io;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use log::info;

use config::Config;
use rs_humanize_core::Humanizer;

/// Main entry point for the server.
///
/// Builds the humanizer once, shares it read-only across workers,
/// and starts an Actix-web HTTP server with a single `POST /humanize` endpoint.
///
/// # Notes
/// - Binds to `--host`/`--port` (defaults 127.0.0.1:5000, `PORT` env honoured).
/// - CORS is permissive so a browser front-end on another origin can call it.
#[actix_web::main]
async fn main() -> io::Result<()> {
	let config = Config::parse();

	env_logger::Builder::from_default_env()
		.filter_level(config.level_filter())
		.init();

	let humanizer = Humanizer::english().map_err(io::Error::other)?;
	let shared_humanizer = web::Data::new(humanizer);

	info!("Server running on http://{}:{}", config.host, config.port);

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.wrap(Logger::default())
			.app_data(shared_humanizer.clone())
			.configure(routes::configure)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
