//! Greeter target: `GET /` answers `Hi`.

use scrapetarget_core::error::Result;
use scrapetarget_server::{config, serve, services};

#[tokio::main]
async fn main() -> Result<()> {
    serve::init_tracing();

    let cfg = config::load_or_default(&config::config_path())?;
    let listen = cfg.greeter.listen_addr()?;

    serve::serve(listen, services::greeter::app()?, "greeter").await
}
