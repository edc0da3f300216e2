use crate::server::{Result, ServerError, ServerRouter, json::Json};
use agora_common::model::{
    Id,
    post::{Post, PostContent, PostList, PostMarker},
};
use agora_store::ForumStore;
use axum::{extract::State, http::StatusCode};
use axum_extra::routing::{RouterExt, TypedPath};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(list_posts)
        .typed_post(create_post)
        .typed_get(get_post)
        .typed_delete(delete_post)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/posts/", rejection(ServerError))]
struct PostsPath();

async fn list_posts(
    PostsPath(): PostsPath,
    State(store): State<Arc<ForumStore>>,
) -> Json<PostList> {
    Json(PostList {
        posts: store.list_posts(),
    })
}

async fn create_post(
    PostsPath(): PostsPath,
    State(store): State<Arc<ForumStore>>,
    Json(content): Json<PostContent>,
) -> (StatusCode, Json<Post>) {
    let post = store.create_post(content);

    (StatusCode::CREATED, Json(post))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/posts/{id}/", rejection(ServerError))]
struct PostPath {
    id: Id<PostMarker>,
}

async fn get_post(
    PostPath { id }: PostPath,
    State(store): State<Arc<ForumStore>>,
) -> Result<Json<Post>> {
    let post = store.fetch_post(id)?;

    Ok(Json(post))
}

async fn delete_post(
    PostPath { id }: PostPath,
    State(store): State<Arc<ForumStore>>,
) -> Result<Json<Post>> {
    let post = store.delete_post(id)?;

    Ok(Json(post))
}
