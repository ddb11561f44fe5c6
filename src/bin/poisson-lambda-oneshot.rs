//! "Oneshot" version of the Poisson function.
//!
//! This executable runs one request, given as JSON text on the command line,
//! and prints the response record.

use lambda_runtime::Error;
use std::env;

use poisson_lambda::Services;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let mut args = env::args();
    args.next(); // skip argv[0]

    let json_text = args.next().ok_or_else(|| -> Error {
        "first argument should be JSON request body text, e.g. '{\"sport\": \"mlb\"}'".into()
    })?;

    let svcs = Services::init()?;
    let reply = svcs.handle_body(Ok(json_text)).await;

    serde_json::to_writer(std::io::stdout().lock(), &reply)?;
    println!();
    Ok(())
}
