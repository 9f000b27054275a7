use crate::app::App;
use crate::auth::oauth::OAuthClient;
use crate::config::Config;
use crate::store::rest::RestStore;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod app;
mod auth;
mod bookings;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod store;
mod templates;


fn main() {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let store = RestStore::new(config.store_url.clone(), config.store_key.clone());
    let app = Arc::new(App::new(store, OAuthClient::new(config.oauth.clone())));

    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Invalid BIND_ADDR {:?}: {e}", config.bind_addr);
            std::process::exit(1);
        }
    };
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match router::handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
