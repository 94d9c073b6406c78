use crate::catalog::{load_catalog, Catalog};
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod catalog;
mod discovery;
mod errors;
mod onboarding;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Load the catalog snapshot — complete or not at all, before
    // the server accepts a single request
    let catalog: Arc<Catalog> = match load_catalog() {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("❌ Catalog load failed: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "✅ Catalog loaded: {} artists, {} categories, {} submissions",
        catalog.artists.len(),
        catalog.categories.len(),
        catalog.submissions.len()
    );

    // 2️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests, sharing the read-only catalog across workers
    let result = server.serve(move |req, _info| match handle(req, &catalog) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
