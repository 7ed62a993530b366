//! Minimal embedding example: a ping endpoint plus filesystem fallback.
//!
//! Run with `cargo run --example file_server`, then try:
//!   curl http://127.0.0.1:8080/ping
//!   curl http://127.0.0.1:8080/anything-else   (serves ./html/404.html)

use pathserve::{build_text_response, handler_fn, logger, App, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    logger::init(&config)?;

    let app = App::start(config, None, None)?;

    app.add_resolver(
        "/ping",
        handler_fn(|_req| async { build_text_response(200, "pong") }),
    );

    println!("Try: curl http://{}/ping", app.local_addr());

    tokio::signal::ctrl_c().await?;
    Ok(())
}
