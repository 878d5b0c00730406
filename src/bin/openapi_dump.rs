//! Print the OpenAPI document as JSON.

use cart_service::docs::ApiDoc;
use std::process::ExitCode;
use utoipa::OpenApi;

fn main() -> ExitCode {
    match ApiDoc::openapi().to_pretty_json() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("openapi-dump: {e}");
            ExitCode::FAILURE
        }
    }
}
