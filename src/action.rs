//! Vote actions.
//!
//! An `Action` is one available vote-state transition plus the URL that
//! performs it. The kind is the identity: two actions of the same kind are
//! equal whatever their URLs (auth tokens differ between page loads).
//! `Actions` is the per-item set, keyed by kind.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::selectors;
use crate::url_utils;

/// Direction of a vote transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Upvote,
    Downvote,
    Unvote,
    Undown,
}

impl ActionKind {
    /// The transition that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Upvote => Self::Unvote,
            Self::Unvote => Self::Upvote,
            Self::Downvote => Self::Undown,
            Self::Undown => Self::Downvote,
        }
    }

    /// Value of the direction query parameter that performs this transition.
    ///
    /// Both undo kinds share `un`.
    #[must_use]
    pub const fn direction_code(self) -> &'static str {
        match self {
            Self::Upvote => "up",
            Self::Downvote => "down",
            Self::Unvote | Self::Undown => "un",
        }
    }

    /// Label the site renders on the control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upvote => selectors::LABEL_UPVOTE,
            Self::Downvote => selectors::LABEL_DOWNVOTE,
            Self::Unvote => selectors::LABEL_UNVOTE,
            Self::Undown => selectors::LABEL_UNDOWN,
        }
    }

    /// Kind for a control label, if it is one of the four known labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            selectors::LABEL_UPVOTE => Some(Self::Upvote),
            selectors::LABEL_DOWNVOTE => Some(Self::Downvote),
            selectors::LABEL_UNVOTE => Some(Self::Unvote),
            selectors::LABEL_UNDOWN => Some(Self::Undown),
            _ => None,
        }
    }
}

/// One available vote transition and the URL that performs it.
///
/// Equality and hashing use `kind` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub url: Url,
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Action {}

impl Hash for Action {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
    }
}

impl Action {
    #[must_use]
    pub fn new(kind: ActionKind, url: Url) -> Self {
        Self { kind, url }
    }

    #[must_use]
    pub fn upvote(url: Url) -> Self {
        Self::new(ActionKind::Upvote, url)
    }

    #[must_use]
    pub fn downvote(url: Url) -> Self {
        Self::new(ActionKind::Downvote, url)
    }

    #[must_use]
    pub fn unvote(url: Url) -> Self {
        Self::new(ActionKind::Unvote, url)
    }

    #[must_use]
    pub fn undown(url: Url) -> Self {
        Self::new(ActionKind::Undown, url)
    }

    /// The inverse action, see [`inverse`].
    #[must_use]
    pub fn inverse(&self) -> Self {
        inverse(self)
    }
}

/// The action that undoes `action`.
///
/// Upvote and Unvote swap, as do Downvote and Undown. The URL keeps every
/// component except the direction parameter, which is replaced by the
/// inverse kind's code.
///
/// # Example
///
/// ```rust
/// use rs_hackernews::{inverse, Action, ActionKind};
/// use url::Url;
///
/// let url = Url::parse("https://news.ycombinator.com/vote?id=1&how=up&auth=t").unwrap();
/// let undo = inverse(&Action::upvote(url));
///
/// assert_eq!(undo.kind, ActionKind::Unvote);
/// assert_eq!(undo.url.as_str(), "https://news.ycombinator.com/vote?id=1&auth=t&how=un");
/// ```
#[must_use]
pub fn inverse(action: &Action) -> Action {
    let kind = action.kind.inverse();
    let url = url_utils::replace_query_param(
        &action.url,
        selectors::PARAM_DIRECTION,
        kind.direction_code(),
    );
    Action { kind, url }
}

/// The set of vote actions available on one item, keyed by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Action>", into = "Vec<Action>")]
pub struct Actions(BTreeMap<ActionKind, Action>);

impl Actions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `action`, replacing any action of the same kind.
    ///
    /// Returns the replaced action.
    pub fn insert(&mut self, action: Action) -> Option<Action> {
        self.0.insert(action.kind, action)
    }

    pub fn remove(&mut self, kind: ActionKind) -> Option<Action> {
        self.0.remove(&kind)
    }

    #[must_use]
    pub fn contains(&self, kind: ActionKind) -> bool {
        self.0.contains_key(&kind)
    }

    #[must_use]
    pub fn get(&self, kind: ActionKind) -> Option<&Action> {
        self.0.get(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Actions ordered by kind.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.0.values()
    }

    /// Kinds present, ordered.
    pub fn kinds(&self) -> impl Iterator<Item = ActionKind> + '_ {
        self.0.keys().copied()
    }

    /// Record that `action` just succeeded: drop it and offer its inverse.
    pub fn apply_vote(&mut self, action: &Action) {
        self.remove(action.kind);
        self.insert(inverse(action));
    }
}

impl FromIterator<Action> for Actions {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut actions = Self::new();
        actions.extend(iter);
        actions
    }
}

impl Extend<Action> for Actions {
    fn extend<I: IntoIterator<Item = Action>>(&mut self, iter: I) {
        for action in iter {
            self.insert(action);
        }
    }
}

impl<'a> IntoIterator for &'a Actions {
    type Item = &'a Action;
    type IntoIter = std::collections::btree_map::Values<'a, ActionKind, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.values()
    }
}

impl From<Vec<Action>> for Actions {
    fn from(actions: Vec<Action>) -> Self {
        actions.into_iter().collect()
    }
}

impl From<Actions> for Vec<Action> {
    fn from(actions: Actions) -> Self {
        actions.0.into_values().collect()
    }
}

/// An entity that carries a set of vote actions.
pub trait Votable {
    fn actions(&self) -> &Actions;
    fn actions_mut(&mut self) -> &mut Actions;
}

/// Update `item` after `action` succeeded over the network.
///
/// Removes `action` from the item's set and inserts its inverse. The set is
/// not re-derived from markup, so call this once per successful vote.
#[must_use]
pub fn apply_vote_result<T: Votable>(mut item: T, action: &Action) -> T {
    tracing::debug!(kind = ?action.kind, "applying vote result");
    item.actions_mut().apply_vote(action);
    item
}
