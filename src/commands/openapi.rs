//! Openapi command - Prints the generated OpenAPI document.

use utoipa::OpenApi;

use crate::api::ApiDoc;
use crate::cli::args::OpenapiArgs;
use crate::errors::{AppError, AppResult};

/// Render the OpenAPI document as JSON
pub fn render(pretty: bool) -> AppResult<String> {
    let doc = ApiDoc::openapi();
    let rendered = if pretty {
        doc.to_pretty_json()
    } else {
        doc.to_json()
    };

    rendered.map_err(|e| AppError::internal(format!("Failed to serialize OpenAPI: {}", e)))
}

/// Execute the openapi command
pub fn execute(args: OpenapiArgs) -> AppResult<()> {
    println!("{}", render(args.pretty)?);
    Ok(())
}
