//! "Bare" version of the Poisson function.
//!
//! This executable takes the plain event record that Netlify-style function
//! hosts deliver (`{"body": "...", ...}`) and answers with a
//! `{"statusCode": ..., "body": "..."}` record. For API Gateway, use the
//! "proxy event" version instead.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

use poisson_lambda::{Reply, Services};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let svcs = Services::init()?;
    let ref_svcs = &svcs;

    run(service_fn(|event: LambdaEvent<Value>| async move {
        // The context is of no interest to us.
        let (payload, _context) = event.into_parts();
        Ok::<Reply, Error>(ref_svcs.handle_event(&payload).await)
    }))
    .await?;
    Ok(())
}
