use axum::extract::Request;
use axum::http::Uri;
use axum::http::uri::PathAndQuery;

const LIST_PATH: &str = "/api/entries";

/// Path the route table sees for a request path.
///
/// Empty segments are dropped and `api/entries/{id}/{css|keywords}` is matched
/// on its first four segments, so trailing slashes and extra segments still
/// reach the entry routes. Anything else under `/api/entries/` is sent to the
/// usage fallback, which keeps an empty id from reaching a handler.
pub fn route_path(path: &str) -> Option<String> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        ["api", "entries", id, kind @ ("css" | "keywords"), ..] => {
            let canonical = format!("{LIST_PATH}/{id}/{kind}");
            (canonical != path).then_some(canonical)
        }
        _ if path == LIST_PATH => None,
        _ if path.starts_with("/api/entries/") => Some(String::from("/")),
        _ => None,
    }
}

pub fn normalize(mut request: Request) -> Request {
    let Some(path) = route_path(request.uri().path()) else {
        return request;
    };
    let path_and_query = match request.uri().query() {
        Some(query) => format!("{path}?{query}"),
        None => path,
    };
    let mut parts = request.uri().clone().into_parts();
    parts.path_and_query = PathAndQuery::try_from(path_and_query).ok();
    if let Ok(uri) = Uri::from_parts(parts) {
        *request.uri_mut() = uri;
    }
    request
}
