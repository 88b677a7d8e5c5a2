use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use html_escape::encode_text;

const PROJECT_NAME: &str = "Linked Data Service";

/// Renders the HTML page sent along with 404 responses.
pub fn render_error_page(
    status: StatusCode,
    message: &str,
    uri: Option<&str>,
) -> impl IntoResponse {
    let title = format!(
        "{} {}",
        status.as_str(),
        status.canonical_reason().unwrap_or_default()
    );
    let uri = uri
        .map(|uri| format!("\n<p><code>{}</code></p>", encode_text(uri)))
        .unwrap_or_default();
    let page = format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>{title} | {PROJECT_NAME}</title></head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         <p>{}</p>{uri}\n\
         </body>\n\
         </html>\n",
        encode_text(message)
    );
    (status, Html(page))
}
