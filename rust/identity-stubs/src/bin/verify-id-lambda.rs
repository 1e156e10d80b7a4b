use identity_stubs::{handlers::verify_id, lambda, telemetry};
use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init_lambda()?;
    lambda::run(verify_id).await
}
