//! "Proxy event" version of the Poisson function.
//!
//! This executable defines a server that expects to be interacted with
//! according to AWS API Gateway's "proxy event" protocol. `lambda_http`
//! takes care of unwrapping the request body (including base64-encoded
//! ones), so all we do here is map our reply onto an HTTP response.

use anyhow::anyhow;
use lambda_http::{run, service_fn, Body, Error, Request, Response};

use poisson_lambda::{event::body_text, Services};

fn request_body(req: &Request) -> anyhow::Result<String> {
    match req.body() {
        Body::Empty => Err(anyhow!("invocation event has no body")),
        Body::Text(text) => Ok(text.clone()),
        Body::Binary(bytes) => body_text(bytes),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let svcs = Services::init()?;
    let ref_svcs = &svcs;

    run(service_fn(|req: Request| async move {
        let reply = ref_svcs.handle_body(request_body(&req)).await;

        Response::builder()
            .status(reply.status_code)
            .header("content-type", "application/json")
            .body(reply.body)
            .map_err(Error::from)
    }))
    .await?;
    Ok(())
}
