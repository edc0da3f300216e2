use crate::record::PostRecord;
use agora_common::model::Id;
use agora_common::model::comment::{Comment, CommentContent, CommentMarker};
use agora_common::model::post::{Post, PostContent, PostMarker};
use agora_common::sequence::IdSequence;
use agora_common::util::NonEmptyString;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Error)]
pub enum StoreError {
    #[error("Post with id {0} was not found.")]
    PostNotFound(Id<PostMarker>),
    #[error("Comment with id {comment_id} on post {post_id} was not found.")]
    CommentNotFound {
        post_id: Id<PostMarker>,
        comment_id: Id<CommentMarker>,
    },
}

/// In-memory state of the whole forum.
///
/// Every method locks the state exactly once, so each operation is atomic with
/// respect to every other one.
#[derive(Debug, Default)]
pub struct ForumStore {
    state: Mutex<ForumState>,
}

#[derive(Debug, Default)]
struct ForumState {
    post_ids: IdSequence<PostMarker>,
    posts: BTreeMap<Id<PostMarker>, PostRecord>,
}

impl ForumState {
    fn record(&self, post_id: Id<PostMarker>) -> Result<&PostRecord> {
        self.posts
            .get(&post_id)
            .ok_or(StoreError::PostNotFound(post_id))
    }

    fn record_mut(&mut self, post_id: Id<PostMarker>) -> Result<&mut PostRecord> {
        self.posts
            .get_mut(&post_id)
            .ok_or(StoreError::PostNotFound(post_id))
    }
}

impl ForumStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All posts in creation order.
    #[must_use]
    pub fn list_posts(&self) -> Vec<Post> {
        self.state
            .lock()
            .posts
            .values()
            .map(|record| record.post.clone())
            .collect()
    }

    #[must_use]
    pub fn post_count(&self) -> usize {
        self.state.lock().posts.len()
    }

    pub fn create_post(&self, content: PostContent) -> Post {
        let mut state = self.state.lock();

        let post_id = state.post_ids.generate();
        let post = Post::new(post_id, content);
        state.posts.insert(post_id, PostRecord::new(post.clone()));

        debug!(%post_id, username = %post.username, "Created post");
        post
    }

    pub fn fetch_post(&self, post_id: Id<PostMarker>) -> Result<Post> {
        let state = self.state.lock();
        Ok(state.record(post_id)?.post.clone())
    }

    /// Removes the post together with all of its comments.
    pub fn delete_post(&self, post_id: Id<PostMarker>) -> Result<Post> {
        let record = self
            .state
            .lock()
            .posts
            .remove(&post_id)
            .ok_or(StoreError::PostNotFound(post_id))?;

        debug!(%post_id, comments = record.comments.len(), "Deleted post");
        Ok(record.post)
    }

    /// All comments of a post in creation order.
    pub fn list_comments(&self, post_id: Id<PostMarker>) -> Result<Vec<Comment>> {
        let state = self.state.lock();
        Ok(state.record(post_id)?.comments.iter().cloned().collect())
    }

    pub fn create_comment(
        &self,
        post_id: Id<PostMarker>,
        content: CommentContent,
    ) -> Result<Comment> {
        let mut state = self.state.lock();

        let comment = state.record_mut(post_id)?.comments.insert(content).clone();

        debug!(%post_id, comment_id = %comment.id, "Created comment");
        Ok(comment)
    }

    /// Replaces the text of a comment and leaves every other field untouched.
    pub fn update_comment_text(
        &self,
        post_id: Id<PostMarker>,
        comment_id: Id<CommentMarker>,
        text: NonEmptyString,
    ) -> Result<Comment> {
        let mut state = self.state.lock();

        let comment = state
            .record_mut(post_id)?
            .comments
            .get_mut(comment_id)
            .ok_or(StoreError::CommentNotFound {
                post_id,
                comment_id,
            })?;
        comment.text = text;

        debug!(%post_id, %comment_id, "Edited comment");
        Ok(comment.clone())
    }
}
