use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::Response;
use viewcount_core::{RequestMethod, ViewRequest};

use crate::error::Result;
use crate::response::json_response;
use crate::state::AppState;

/// Reads, and on `POST` or `increment=1` bumps, the counter for `slug`.
pub async fn views_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response> {
    let query = uri.query();
    let slug = first_param(query, "slug");
    let increment = first_param(query, "increment");

    let request = ViewRequest {
        method: request_method(&method),
        slug: slug.as_deref(),
        increment: increment.as_deref(),
    };

    let snapshot = state.counter().handle(request).await?;
    Ok(json_response(StatusCode::OK, &snapshot))
}

fn request_method(method: &Method) -> RequestMethod {
    if *method == Method::GET {
        RequestMethod::Get
    } else if *method == Method::POST {
        RequestMethod::Post
    } else {
        RequestMethod::Other
    }
}

/// Decoded value of the first `name` parameter in `query`.
fn first_param(query: Option<&str>, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
