use fareway::config::Config;
use fareway::engine::Engine;
use fareway::error::Error;
use fareway::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let engine = Engine::from_config(&config);

    serve(engine, config.listen_addr).await
}
