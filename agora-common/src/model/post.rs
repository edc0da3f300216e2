use crate::{
    model::{INITIAL_UPVOTES, Id},
    util::NonEmptyString,
};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct Post {
    pub id: Id<PostMarker>,
    pub upvotes: u64,
    pub title: NonEmptyString,
    pub link: NonEmptyString,
    pub username: NonEmptyString,
}

/// Body of a post creation request.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct PostContent {
    pub title: NonEmptyString,
    pub link: NonEmptyString,
    pub username: NonEmptyString,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct PostList {
    pub posts: Vec<Post>,
}

impl Post {
    #[must_use]
    pub fn new(id: Id<PostMarker>, content: PostContent) -> Self {
        let PostContent {
            title,
            link,
            username,
        } = content;

        Self {
            id,
            upvotes: INITIAL_UPVOTES,
            title,
            link,
            username,
        }
    }
}
