use crate::{
    model::{INITIAL_UPVOTES, Id},
    util::NonEmptyString,
};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct CommentMarker;

/// A reply on a post. Its id is only unique among the comments of that post.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct Comment {
    pub id: Id<CommentMarker>,
    pub upvotes: u64,
    pub text: NonEmptyString,
    pub username: NonEmptyString,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct CommentContent {
    pub text: NonEmptyString,
    pub username: NonEmptyString,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct CommentEdit {
    pub text: NonEmptyString,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct CommentList {
    pub comments: Vec<Comment>,
}

impl Comment {
    #[must_use]
    pub fn new(id: Id<CommentMarker>, content: CommentContent) -> Self {
        Self {
            id,
            upvotes: INITIAL_UPVOTES,
            text: content.text,
            username: content.username,
        }
    }
}
