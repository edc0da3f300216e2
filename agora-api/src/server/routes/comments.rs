use crate::server::{Result, ServerError, ServerRouter, json::Json};
use agora_common::model::{
    Id,
    comment::{Comment, CommentContent, CommentEdit, CommentList, CommentMarker},
    post::PostMarker,
};
use agora_store::ForumStore;
use axum::{extract::State, http::StatusCode};
use axum_extra::routing::{RouterExt, TypedPath};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(list_comments)
        .typed_post(create_comment)
        .typed_post(edit_comment)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/posts/{post_id}/comments/", rejection(ServerError))]
struct CommentsPath {
    post_id: Id<PostMarker>,
}

async fn list_comments(
    CommentsPath { post_id }: CommentsPath,
    State(store): State<Arc<ForumStore>>,
) -> Result<Json<CommentList>> {
    let comments = store.list_comments(post_id)?;

    Ok(Json(CommentList { comments }))
}

// The body is extracted before the store is consulted, so a bad body wins over
// a missing post.
async fn create_comment(
    CommentsPath { post_id }: CommentsPath,
    State(store): State<Arc<ForumStore>>,
    Json(content): Json<CommentContent>,
) -> Result<(StatusCode, Json<Comment>)> {
    let comment = store.create_comment(post_id, content)?;

    Ok((StatusCode::CREATED, Json(comment)))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/posts/{post_id}/comments/{comment_id}/", rejection(ServerError))]
struct CommentPath {
    post_id: Id<PostMarker>,
    comment_id: Id<CommentMarker>,
}

async fn edit_comment(
    CommentPath {
        post_id,
        comment_id,
    }: CommentPath,
    State(store): State<Arc<ForumStore>>,
    Json(CommentEdit { text }): Json<CommentEdit>,
) -> Result<Json<Comment>> {
    let comment = store.update_comment_text(post_id, comment_id, text)?;

    Ok(Json(comment))
}
