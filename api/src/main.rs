use std::{net::SocketAddr, sync::Arc};

use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use pantry_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app_state = state(args.clone()).await?;
    let router = router(app_state)?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;

    match (&args.server.tls_cert_path, &args.server.tls_key_path) {
        (Some(cert), Some(key)) => {
            let tls_config = RustlsConfig::from_pem_file(cert, key).await?;
            info!("listening on https://{}", addr);
            axum_server::bind_rustls(addr, tls_config)
                .serve(router.into_make_service())
                .await?;
        }
        _ => {
            info!("listening on http://{}", addr);
            axum_server::bind(addr)
                .serve(router.into_make_service())
                .await?;
        }
    }

    Ok(())
}
