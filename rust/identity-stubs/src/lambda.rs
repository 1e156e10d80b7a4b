//! Glue between the handlers and the AWS Lambda runtime.

use lambda_runtime::{service_fn, Error, LambdaEvent};

use crate::{InvocationEvent, InvocationResponse, StubError};

pub type Handler = fn(&InvocationEvent) -> Result<InvocationResponse, StubError>;

/// Run `handler` against a single Lambda event.
///
/// A handler error becomes an invocation error; the runtime reports it back
/// to the host.
pub async fn invoke(
    handler: Handler,
    event: LambdaEvent<InvocationEvent>,
) -> Result<InvocationResponse, Error> {
    let (payload, context) = event.into_parts();
    debug!("Handling invocation {}", context.request_id);

    Ok(handler(&payload)?)
}

/// Poll the Lambda runtime API for events and dispatch each to `handler`.
pub async fn run(handler: Handler) -> Result<(), Error> {
    lambda_runtime::run(service_fn(move |event| invoke(handler, event))).await
}
