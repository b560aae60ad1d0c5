use axum::{
    body::Body,
    http::{Request, Response, StatusCode, header},
    middleware::Next,
};

/// Where a `www.`-prefixed request should be sent, if anywhere.
pub fn apex_location(host: &str, path_and_query: &str) -> Option<String> {
    let apex = host.strip_prefix("www.")?;
    if apex.is_empty() {
        return None;
    }
    Some(format!("https://{apex}{path_and_query}"))
}

/// Permanently redirects `www.` hosts to the apex domain.
pub async fn redirect_www(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    let location = req
        .headers()
        .get(header::HOST)
        .and_then(|host| host.to_str().ok())
        .zip(req.uri().path_and_query())
        .and_then(|(host, path_and_query)| apex_location(host, path_and_query.as_str()));

    let Some(location) = location else {
        return Ok(next.run(req).await);
    };

    tracing::debug!(%location, "redirecting www host");
    Response::builder()
        .status(StatusCode::MOVED_PERMANENTLY)
        .header(header::LOCATION, location)
        .body(Body::empty())
        .map_err(|err| {
            tracing::error!(?err, "Failed to build redirect response");
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
