use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};

use entrygate::api::EntryApi;
use entrygate::conf::Config;
use entrygate::core::{CliArgs, setup_logging};
use entrygate::store::RestConnector;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();
    let args = CliArgs::parse();
    info!(args = args; "Entrygate started.");

    let config = Config::load(args.config.as_deref()).context("loading configuration")?;
    if !config.store.is_configured() {
        warn!("store url or key is not set; every store query will fail");
    }

    let addr = config.server.addr();
    let api = EntryApi::new(Arc::new(RestConnector::new(config.store)));
    api.serve(&addr).await.context("running http server")?;
    Ok(())
}
