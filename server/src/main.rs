use lostark_siblings_web::config::Config;
use lostark_siblings_web::{init_tracing, start_server, BoxError};

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    init_tracing();

    let config = Config::load()?;
    start_server(config).await
}
