#[macro_use]
extern crate tracing;

use std::net::SocketAddr;

use clap::Parser;
use identity_stubs::{cli::Cli, serve, telemetry, StubError};

#[tokio::main]
pub async fn main() -> Result<(), StubError> {
    telemetry::init_pretty()?;

    let cli = Cli::parse();
    let socket_address = SocketAddr::new(cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(socket_address).await?;

    info!("Server listening on {}", socket_address);

    serve(listener).await?;

    Ok(())
}
