use crate::server::ServerRouter;
use axum::{http::Uri, response::Redirect, routing::any};

mod comments;
mod posts;

/// Resource paths that are also reachable without their trailing slash.
const SLASHLESS_PATHS: [&str; 4] = [
    "/api/posts",
    "/api/posts/{post_id}",
    "/api/posts/{post_id}/comments",
    "/api/posts/{post_id}/comments/{comment_id}",
];

pub fn routes() -> ServerRouter {
    SLASHLESS_PATHS
        .into_iter()
        .fold(ServerRouter::new(), |router, path| {
            router.route(path, any(append_slash))
        })
        .merge(posts::routes())
        .merge(comments::routes())
}

/// Permanently redirects to the same path with a trailing slash, keeping the
/// method, body and query.
async fn append_slash(uri: Uri) -> Redirect {
    let location = match uri.query() {
        Some(query) => format!("{}/?{query}", uri.path()),
        None => format!("{}/", uri.path()),
    };

    Redirect::permanent(&location)
}
