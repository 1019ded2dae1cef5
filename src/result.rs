//! Result types for extraction output.
//!
//! Every entity is plain owned data produced fresh by one extraction call.
//! Comment trees own their children by value; counts are computed by
//! traversal and never stored.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::action::{Actions, Votable};

/// Body of a story or job: a link or a self-post, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Content {
    Url(Url),
    /// Inner markup of the self-post.
    Text(String),
}

impl Content {
    #[must_use]
    pub fn url(&self) -> Option<&Url> {
        match self {
            Self::Url(url) => Some(url),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Url(_) => None,
        }
    }
}

/// One comment and its replies.
///
/// Depth is implied by position in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub author_name: String,
    pub age_description: String,
    /// Rendered inline markup.
    pub text: String,
    pub children: Vec<Comment>,
    pub actions: Actions,
}

impl Comment {
    /// This comment plus all of its descendants.
    #[must_use]
    pub fn comment_count(&self) -> usize {
        1 + total_comment_count(&self.children)
    }
}

/// Sum of `comment_count` over a forest.
#[must_use]
pub fn total_comment_count(comments: &[Comment]) -> usize {
    comments.iter().map(Comment::comment_count).sum()
}

/// Kind of a listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListableKind {
    Story,
    Job,
    Poll,
}

/// Summary of one entry on a listing page.
///
/// Optional fields are `None` exactly when the markup omits them; jobs have
/// no author and no score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListableItem {
    pub kind: ListableKind,
    pub id: u64,
    /// Set only for absolute links; self-posts link relatively.
    pub url: Option<Url>,
    pub author_name: Option<String>,
    pub age_description: String,
    pub score: Option<u64>,
    pub title: String,
    pub actions: Actions,
    /// `Some(0)` for "discuss"; `None` when there is no comment link at all.
    pub comment_count: Option<u64>,
}

/// A story from its item page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: u64,
    pub author_name: String,
    pub age_description: String,
    pub score: u64,
    pub title: String,
    pub content: Content,
    pub comments: Vec<Comment>,
    pub actions: Actions,
    pub is_commentable: bool,
}

impl Story {
    /// Number of comments in the whole thread.
    #[must_use]
    pub fn comment_count(&self) -> usize {
        total_comment_count(&self.comments)
    }
}

/// A job posting from its item page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    pub age_description: String,
    pub title: String,
    /// Some jobs have neither an external link nor text.
    pub content: Option<Content>,
}

/// One choice of a poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: u64,
    /// Author of the poll the option belongs to.
    pub author_name: String,
    pub score: u64,
    pub text: String,
    pub actions: Actions,
}

/// A poll from its item page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    pub id: u64,
    pub author_name: String,
    pub age_description: String,
    pub score: u64,
    pub title: String,
    pub text: Option<String>,
    pub options: Vec<PollOption>,
    pub comments: Vec<Comment>,
    pub actions: Actions,
    pub is_commentable: bool,
}

impl Poll {
    #[must_use]
    pub fn comment_count(&self) -> usize {
        total_comment_count(&self.comments)
    }
}

/// Whatever an item page turned out to hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    Story(Story),
    Job(Job),
    Poll(Poll),
}

impl Item {
    #[must_use]
    pub fn id(&self) -> u64 {
        match self {
            Self::Story(story) => story.id,
            Self::Job(job) => job.id,
            Self::Poll(poll) => poll.id,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Story(story) => &story.title,
            Self::Job(job) => &job.title,
            Self::Poll(poll) => &poll.title,
        }
    }
}

macro_rules! impl_votable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Votable for $ty {
                fn actions(&self) -> &Actions {
                    &self.actions
                }

                fn actions_mut(&mut self) -> &mut Actions {
                    &mut self.actions
                }
            }
        )+
    };
}

impl_votable!(Comment, ListableItem, Story, Poll, PollOption);
