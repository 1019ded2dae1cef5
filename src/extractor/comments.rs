//! Comment thread extraction.
//!
//! The site renders a thread as a flat list of rows in document order, each
//! indented by a spacer image whose width encodes its depth. `CommentTreeBuilder`
//! folds that sequence back into a forest in one pass.

use dom_query::{Document, Selection};

use crate::dom;
use crate::error::{Error, Result};
use crate::extractor::{actions, fields};
use crate::result::Comment;
use crate::selectors;
use crate::Options;

/// One comment row with its depth, before it is placed in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRow {
    pub depth: usize,
    pub comment: Comment,
}

/// Rebuilds a comment forest from rows in document order.
///
/// Keeps one open sibling list per depth along the current ancestor path.
/// A row one level deeper than the deepest open list opens a new list under
/// the last comment of that list; a shallower row first closes every deeper
/// list, attaching each as the children of the last comment one level up.
///
/// # Example
///
/// ```rust
/// use rs_hackernews::extractor::comments::CommentTreeBuilder;
/// # use rs_hackernews::{Actions, Comment};
/// # fn comment(id: u64) -> Comment {
/// #     Comment {
/// #         id,
/// #         author_name: String::new(),
/// #         age_description: String::new(),
/// #         text: String::new(),
/// #         children: Vec::new(),
/// #         actions: Actions::new(),
/// #     }
/// # }
///
/// let mut builder = CommentTreeBuilder::new();
/// builder.push(0, comment(1))?;
/// builder.push(1, comment(2))?;
/// builder.push(0, comment(3))?;
/// let forest = builder.finish()?;
///
/// assert_eq!(forest.len(), 2);
/// assert_eq!(forest[0].children[0].id, 2);
/// # Ok::<(), rs_hackernews::Error>(())
/// ```
#[derive(Debug)]
pub struct CommentTreeBuilder {
    levels: Vec<Vec<Comment>>,
}

impl Default for CommentTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentTreeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            levels: vec![Vec::new()],
        }
    }

    /// Deepest depth that currently accepts a row without closing lists.
    fn max_depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Place the next row of the document.
    ///
    /// Fails with `StructuralMismatch` if `depth` skips a level, or if it
    /// opens a level under a list that has no comment to be the parent.
    pub fn push(&mut self, depth: usize, comment: Comment) -> Result<()> {
        let max_depth = self.max_depth();

        if depth > max_depth + 1 {
            return Err(Error::mismatch(format!(
                "comment {} at depth {depth} follows depth {max_depth}",
                comment.id
            )));
        }

        if depth == max_depth + 1 {
            if self.levels[max_depth].is_empty() {
                return Err(Error::mismatch(format!(
                    "comment {} at depth {depth} has no parent",
                    comment.id
                )));
            }
            self.levels.push(vec![comment]);
        } else {
            self.close_to(depth)?;
            self.levels[depth].push(comment);
        }
        Ok(())
    }

    /// Close every list deeper than `depth`.
    fn close_to(&mut self, depth: usize) -> Result<()> {
        while self.levels.len() > depth + 1 {
            let children = self
                .levels
                .pop()
                .ok_or_else(|| Error::mismatch("comment level stack underflow"))?;
            let parent = self
                .levels
                .last_mut()
                .and_then(|siblings| siblings.last_mut())
                .ok_or_else(|| Error::mismatch("comment replies without a parent"))?;
            parent.children = children;
        }
        Ok(())
    }

    /// Close all open lists and return the top-level comments.
    pub fn finish(mut self) -> Result<Vec<Comment>> {
        self.close_to(0)?;
        let roots = self
            .levels
            .pop()
            .ok_or_else(|| Error::mismatch("comment level stack underflow"))?;
        if !self.levels.is_empty() {
            return Err(Error::mismatch("unclosed comment levels"));
        }
        Ok(roots)
    }
}

/// Build a forest from rows in document order.
pub fn build_comment_tree<I>(rows: I) -> Result<Vec<Comment>>
where
    I: IntoIterator<Item = CommentRow>,
{
    let mut builder = CommentTreeBuilder::new();
    for row in rows {
        builder.push(row.depth, row.comment)?;
    }
    builder.finish()
}

/// Nesting depth of a comment row, from its indentation image width.
pub fn indentation(row: &Selection, opts: &Options) -> Result<usize> {
    let img = fields::element(row, selectors::COMMENT_INDENT)?;
    let width = fields::attribute(&img, selectors::COMMENT_INDENT, selectors::ATTR_WIDTH)?;
    let width = fields::parsed(&width, fields::parse_number)?;

    let depth = width
        .checked_div(u64::from(opts.indent_unit))
        .ok_or_else(|| Error::mismatch("indent unit is zero"))?;
    usize::try_from(depth).map_err(|_| Error::malformed_number(&width.to_string()))
}

/// Read one comment row. Its children are filled in by the tree builder.
pub fn read_comment_row(row: &Selection, opts: &Options) -> Result<CommentRow> {
    let depth = indentation(row, opts)?;
    let comment = Comment {
        id: fields::id_of(row, selectors::COMMENT_ROW)?,
        author_name: fields::text_of(row, selectors::AUTHOR)?,
        age_description: fields::text_of(row, selectors::AGE)?,
        text: fields::markup_of(row, selectors::COMMENT_TEXT)?,
        children: Vec::new(),
        actions: actions::extract_actions(row, row, opts)?,
    };
    Ok(CommentRow { depth, comment })
}

/// Extract the whole comment thread of an item page.
///
/// A page without comment rows yields an empty forest.
pub fn extract_comments(doc: &Document, opts: &Options) -> Result<Vec<Comment>> {
    let rows = dom::select_all_in_document(doc, selectors::COMMENT_ROW);
    let row_count = rows.len();

    let mut builder = CommentTreeBuilder::new();
    for row in &rows {
        let CommentRow { depth, comment } = read_comment_row(row, opts)?;
        builder.push(depth, comment)?;
    }
    let forest = builder.finish()?;

    tracing::debug!(rows = row_count, top_level = forest.len(), "built comment tree");
    Ok(forest)
}
