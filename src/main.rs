use std::sync::Arc;

use spa_server::config::Config;
use spa_server::server::{create_reusable_listener, run_server, AppState};
use spa_server::logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    logger::init(&cfg)?;

    let addr = cfg.get_socket_addr()?;
    let listener = create_reusable_listener(addr)?;

    logger::log_server_start(&addr, &cfg);

    let state = Arc::new(AppState::new(cfg));
    run_server(listener, state).await
}
