use agora_common::{
    model::{
        Id,
        comment::{Comment, CommentContent, CommentMarker},
        post::Post,
    },
    sequence::IdSequence,
};
use std::collections::{BTreeMap, btree_map};

/// Everything the store keeps for one post.
///
/// A post and its comment bucket live and die together, so there is never a
/// post without a bucket or a bucket without a post.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub(crate) struct PostRecord {
    pub post: Post,
    pub comments: CommentBucket,
}

/// The comments of a single post together with the post's own comment id
/// sequence.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash)]
pub(crate) struct CommentBucket {
    comment_ids: IdSequence<CommentMarker>,
    comments: BTreeMap<Id<CommentMarker>, Comment>,
}

impl PostRecord {
    #[must_use]
    pub(crate) fn new(post: Post) -> Self {
        Self {
            post,
            comments: CommentBucket::new(),
        }
    }
}

impl CommentBucket {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, content: CommentContent) -> &Comment {
        let id = self.comment_ids.generate();
        self.comments
            .entry(id)
            .or_insert_with(|| Comment::new(id, content))
    }

    pub(crate) fn get_mut(&mut self, id: Id<CommentMarker>) -> Option<&mut Comment> {
        self.comments.get_mut(&id)
    }

    /// Comments in the order they were created.
    pub(crate) fn iter(&self) -> btree_map::Values<'_, Id<CommentMarker>, Comment> {
        self.comments.values()
    }

    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.comments.len()
    }
}
