//! Item page extraction.
//!
//! An item page holds one story, job, or poll in a `table.fatitem`, followed
//! by its comment thread. The number of top-level rows in that table,
//! together with the presence of a comment form and of poll options, fixes
//! where the content lives.
//!
//! | rows | comment form | poll options | shape |
//! |------|--------------|--------------|-------|
//! | 2 | no | no | link |
//! | 4 | yes | no | link, commentable |
//! | 4 | no | no | text |
//! | 6 | yes | no | text, commentable |
//! | 6 | no | yes | poll |
//! | 8 | yes | yes | poll, commentable |
//!
//! Every other combination is a `StructuralMismatch`.

use dom_query::{Document, Selection};

use crate::dom;
use crate::error::{Error, Result};
use crate::extractor::{actions, comments, fields};
use crate::result::{Content, Item, Job, Poll, PollOption, Story};
use crate::selectors;
use crate::url_utils;
use crate::Options;

/// Row holding the self-post text, for text and poll shapes.
const TEXT_ROW: usize = 3;

/// Row holding the nested poll option table.
const POLL_OPTIONS_ROW: usize = 5;

/// Where the body of an item page lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    /// Title anchor href.
    Link,
    /// Second cell of the text row.
    Text,
    /// Text row plus a nested table of options.
    Poll,
}

/// Shape of an item page's primary content table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageShape {
    pub body: Body,
    pub is_commentable: bool,
}

impl PageShape {
    /// Classify from the top-level row count and the two presence signals.
    pub fn classify(row_count: usize, is_commentable: bool, has_poll_options: bool) -> Result<Self> {
        let body = match (row_count, is_commentable, has_poll_options) {
            (2, false, false) | (4, true, false) => Body::Link,
            (4, false, false) | (6, true, false) => Body::Text,
            (6, false, true) | (8, true, true) => Body::Poll,
            _ => {
                return Err(Error::mismatch(format!(
                    "item table with {row_count} rows (comment form: {is_commentable}, poll options: {has_poll_options})"
                )));
            }
        };
        Ok(Self {
            body,
            is_commentable,
        })
    }
}

/// The primary content table, split into the rows the extractors need.
struct FatItem<'a> {
    rows: Vec<Selection<'a>>,
    shape: PageShape,
}

impl<'a> FatItem<'a> {
    fn locate(doc: &'a Document) -> Result<Self> {
        let table = fields::required(
            dom::select_in_document(doc, selectors::FAT_ITEM),
            selectors::FAT_ITEM,
        )?;
        let rows = dom::select_all_in_document(doc, selectors::FAT_ITEM_ROWS);
        let is_commentable = dom::select_first(&table, selectors::COMMENT_FORM).is_some();
        let has_poll_options = rows
            .get(POLL_OPTIONS_ROW)
            .is_some_and(|row| !dom::select(row, selectors::POLL_OPTION_ROW).is_empty());

        let shape = PageShape::classify(rows.len(), is_commentable, has_poll_options)?;
        tracing::debug!(rows = rows.len(), ?shape, "classified item page");

        Ok(Self { rows, shape })
    }

    /// Title row. Present for every valid shape.
    fn item_row(&self) -> &Selection<'a> {
        &self.rows[0]
    }

    /// Metadata row. Present for every valid shape.
    fn meta_row(&self) -> &Selection<'a> {
        &self.rows[1]
    }

    fn title_href(&self) -> Result<String> {
        let anchor = fields::element(self.item_row(), selectors::TITLE_LINK)?;
        fields::attribute(&anchor, selectors::TITLE_LINK, selectors::ATTR_HREF)
    }

    /// Inner markup of the text cell. Only meaningful for text and poll shapes.
    fn text(&self) -> Result<String> {
        let row = fields::required(self.rows.get(TEXT_ROW), "item text row")?;
        let cell = fields::required(dom::children(row).get(1).cloned(), "item text cell")?;
        Ok(dom::inner_html(&cell))
    }

    fn poll_option_rows(&self) -> Vec<Selection<'a>> {
        self.rows
            .get(POLL_OPTIONS_ROW)
            .map(|row| dom::select(row, selectors::POLL_OPTION_ROW))
            .unwrap_or_default()
    }
}

/// Extract the item with `id` from its item page.
///
/// Fails with `StructuralMismatch` if the page shows a different item.
pub fn extract_item(doc: &Document, id: u64, opts: &Options) -> Result<Item> {
    let fat_item = FatItem::locate(doc)?;

    let page_id = fields::id_of(fat_item.item_row(), selectors::ITEM_ROW)?;
    if page_id != id {
        return Err(Error::mismatch(format!(
            "requested item {id}, page shows item {page_id}"
        )));
    }

    let has_author = dom::select_first(fat_item.meta_row(), selectors::AUTHOR).is_some();
    let item = match (has_author, fat_item.shape.body) {
        (false, Body::Poll) => return Err(Error::mismatch("poll without an author")),
        (false, _) => Item::Job(job(&fat_item, id)?),
        (true, Body::Poll) => Item::Poll(poll(doc, &fat_item, id, opts)?),
        (true, _) => Item::Story(story(doc, &fat_item, id, opts)?),
    };
    Ok(item)
}

fn story(doc: &Document, fat_item: &FatItem, id: u64, opts: &Options) -> Result<Story> {
    let content = match fat_item.shape.body {
        Body::Link => Content::Url(fields::parse_url(&fat_item.title_href()?, &opts.base_url)?),
        Body::Text | Body::Poll => Content::Text(fat_item.text()?),
    };

    Ok(Story {
        id,
        author_name: fields::text_of(fat_item.meta_row(), selectors::AUTHOR)?,
        age_description: fields::text_of(fat_item.meta_row(), selectors::AGE)?,
        score: fields::score_of(fat_item.meta_row())?,
        title: fields::text_of(fat_item.item_row(), selectors::TITLE_LINK)?,
        content,
        comments: comments::extract_comments(doc, opts)?,
        actions: actions::extract_actions(fat_item.item_row(), fat_item.meta_row(), opts)?,
        is_commentable: fat_item.shape.is_commentable,
    })
}

fn job(fat_item: &FatItem, id: u64) -> Result<Job> {
    let content = match fat_item.shape.body {
        Body::Link => url_utils::absolute_url(&fat_item.title_href()?)?.map(Content::Url),
        Body::Text | Body::Poll => Some(fat_item.text()?)
            .filter(|text| !text.is_empty())
            .map(Content::Text),
    };

    Ok(Job {
        id,
        age_description: fields::text_of(fat_item.meta_row(), selectors::AGE)?,
        title: fields::text_of(fat_item.item_row(), selectors::TITLE_LINK)?,
        content,
    })
}

fn poll(doc: &Document, fat_item: &FatItem, id: u64, opts: &Options) -> Result<Poll> {
    let author_name = fields::text_of(fat_item.meta_row(), selectors::AUTHOR)?;
    let options = fat_item
        .poll_option_rows()
        .iter()
        .map(|row| poll_option(row, &author_name, opts))
        .collect::<Result<Vec<_>>>()?;
    let text = fat_item.text()?;

    Ok(Poll {
        id,
        age_description: fields::text_of(fat_item.meta_row(), selectors::AGE)?,
        score: fields::score_of(fat_item.meta_row())?,
        title: fields::text_of(fat_item.item_row(), selectors::TITLE_LINK)?,
        text: Some(text).filter(|text| !text.is_empty()),
        options,
        comments: comments::extract_comments(doc, opts)?,
        actions: actions::extract_actions(fat_item.item_row(), fat_item.meta_row(), opts)?,
        is_commentable: fat_item.shape.is_commentable,
        author_name,
    })
}

/// One poll option row and the score row after it.
fn poll_option(row: &Selection, author_name: &str, opts: &Options) -> Result<PollOption> {
    let meta_row = fields::required(
        dom::next_element_sibling(row),
        "score row after poll option",
    )?;

    Ok(PollOption {
        id: fields::id_of(row, selectors::POLL_OPTION_ROW)?,
        author_name: author_name.to_string(),
        score: fields::score_of(&meta_row)?,
        text: fields::markup_of(row, selectors::COMMENT_TEXT)?,
        actions: actions::extract_actions(row, &meta_row, opts)?,
    })
}
