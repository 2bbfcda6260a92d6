use std::path::Path;
use std::process::ExitCode;

use swapi_proxy::config::load_env_file;
use swapi_proxy::{AppState, Config, Server, app, logger};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let env_file = Path::new(".env");
    let loaded = load_env_file(env_file);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    logger::init(config.log_format);

    match loaded {
        Ok(true) => info!(path = %env_file.display(), "loaded environment file"),
        Ok(false) => {}
        Err(e) => warn!(path = %env_file.display(), "failed to load environment file: {e}"),
    }
    if config.swapi_url.is_none() {
        warn!("SWAPI_URL is not set, /people will answer 500 until it is");
    }

    let addr = config.bind_addr;
    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            error!("startup failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    match Server::bind(addr).serve(app(state)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("server error: {e}");
            ExitCode::FAILURE
        }
    }
}
