//! Item page integration tests
//!
//! A commentable text story with a nested thread, viewed by a user who may
//! downvote and has already voted on one comment.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use rs_hackernews::{
    apply_vote_result, extract_comment_hmac, extract_item, total_comment_count, ActionKind,
    Comment, Content, Item, Story, DEFAULT_BASE_URL,
};
use url::Url;

fn comment(id: u64, depth: u32, author: &str, age: &str, body: &str, voted: bool) -> String {
    let width = depth * 40;
    let up_class = if voted { "clicky nosee" } else { "clicky" };
    let undo = if voted {
        format!(r#" | <a id="un_{id}" class="clicky" href="vote?id={id}&amp;how=un&amp;auth=c{id}&amp;goto=item%3Fid%3D39900000">unvote</a>"#)
    } else {
        String::new()
    };
    format!(
        r##"<tr class="athing comtr" id="{id}"><td><table border="0"><tr>
  <td class="ind" indent="{depth}"><img src="s.gif" height="1" width="{width}"></td>
  <td valign="top" class="votelinks"><center>
    <a id="up_{id}" class="{up_class}" href="vote?id={id}&amp;how=up&amp;auth=c{id}&amp;goto=item%3Fid%3D39900000#{id}"><div class="votearrow" title="upvote"></div></a>
    <a id="down_{id}" class="clicky" href="vote?id={id}&amp;how=down&amp;auth=c{id}&amp;goto=item%3Fid%3D39900000#{id}"><div class="votearrow rotate180" title="downvote"></div></a>
  </center></td>
  <td class="default"><div style="margin-top:2px; margin-bottom:-10px;"><span class="comhead">
    <a href="user?id={author}" class="hnuser">{author}</a>
    <span class="age" title="2024-04-30T12:00:00"><a href="item?id={id}">{age}</a></span>
    <span id="unv_{id}">{undo}</span>
    <span class="navs"> | <a href="#39900000" class="clicky" aria-hidden="true">root</a></span>
    <a class="togg clicky" id="{id}" n="1" href="javascript:void(0)">[&ndash;]</a>
  </span></div><br>
  <div class="comment"><div class="commtext c00">{body}</div>
    <div class="reply"><p><font size="1"><u><a href="reply?id={id}&amp;goto=item%3Fid%3D39900000%23{id}" rel="nofollow">reply</a></u></font></p></div>
  </div></td>
</tr></table></td></tr>"##
    )
}

fn item_page() -> String {
    let thread = [
        comment(39_900_101, 0, "dana", "9 hours ago", "Great write-up.<p>One question though.</p>", false),
        comment(39_900_102, 1, "eve", "8 hours ago", "Same question here.", true),
        comment(39_900_103, 2, "dana", "8 hours ago", r#"Answered in <a href="https://example.com/faq" rel="nofollow">the FAQ</a>."#, false),
        comment(39_900_104, 1, "finn", "7 hours ago", "Thanks!", false),
        comment(39_900_105, 0, "gus", "2 hours ago", "<i>Late</i> to the party.", false),
    ]
    .concat();

    format!(
        r##"<html lang="en" op="item"><head><title>Ask HN: How do you parse HTML in production? | Hacker News</title></head>
<body><center><table id="hnmain" border="0" cellpadding="0" cellspacing="0" width="85%">
<tr><td bgcolor="#ff6600"><span class="pagetop"><b class="hnname"><a href="news">Hacker News</a></b></span></td></tr>
<tr id="pagespace" title="Ask HN: How do you parse HTML in production?" style="height:10px"></tr>
<tr id="bigbox"><td>
<table class="fatitem" border="0">
  <tr class="athing submission" id="39900000">
    <td align="right" valign="top" class="title"><span class="rank"></span></td>
    <td valign="top" class="votelinks"><center><a id="up_39900000" class="clicky" href="vote?id=39900000&amp;how=up&amp;auth=s1&amp;goto=item%3Fid%3D39900000"><div class="votearrow" title="upvote"></div></a></center></td>
    <td class="title"><span class="titleline"><a href="item?id=39900000">Ask HN: How do you parse HTML in production?</a></span></td>
  </tr>
  <tr><td colspan="2"></td><td class="subtext"><span class="subline">
    <span class="score" id="score_39900000">88 points</span> by <a href="user?id=hal" class="hnuser">hal</a>
    <span class="age" title="2024-04-30T10:00:00"><a href="item?id=39900000">10 hours ago</a></span>
    <span id="unv_39900000"></span> | <a href="hide?id=39900000&amp;goto=item%3Fid%3D39900000" class="clicky hider">hide</a> |
    <a href="https://hn.algolia.com/?query=parse%20HTML">past</a> |
    <a href="fave?id=39900000&amp;auth=f1">favorite</a> | <a href="item?id=39900000">5&nbsp;comments</a>
  </span></td></tr>
  <tr style="height:2px"></tr>
  <tr><td colspan="2"></td><td><div class="toptext">We scrape a few thousand pages a day.<p>What libraries hold up?</p></div></td></tr>
  <tr style="height:10px"></tr>
  <tr><td colspan="2"></td><td><form action="comment" method="post">
    <input type="hidden" name="parent" value="39900000">
    <input type="hidden" name="goto" value="item?id=39900000">
    <input type="hidden" name="hmac" value="5c0ffee5">
    <textarea name="text" rows="8" cols="80" wrap="virtual"></textarea><br><br>
    <input type="submit" value="add comment">
  </form></td></tr>
</table><br><br>
<table border="0" class="comment-tree">
{thread}
</table>
<br><br></td></tr></table></center></body></html>"##
    )
}

fn story() -> Story {
    let base = Url::parse(DEFAULT_BASE_URL).expect("default base URL");
    match extract_item(&item_page(), 39_900_000, &base).expect("item page should extract") {
        Item::Story(story) => story,
        other => panic!("expected a story, got {other:?}"),
    }
}

fn find(comments: &[Comment], id: u64) -> Option<&Comment> {
    comments.iter().find_map(|comment| {
        if comment.id == id {
            Some(comment)
        } else {
            find(&comment.children, id)
        }
    })
}

#[test]
fn test_story_header() {
    let story = story();

    assert_eq!(story.title, "Ask HN: How do you parse HTML in production?");
    assert_eq!(story.author_name, "hal");
    assert_eq!(story.score, 88);
    assert_eq!(story.age_description, "10 hours ago");
    assert!(story.is_commentable);
}

#[test]
fn test_story_text_content() {
    let story = story();

    let Content::Text(text) = &story.content else {
        panic!("expected text content, got {:?}", story.content);
    };
    assert!(text.contains("We scrape a few thousand pages a day."));
    assert!(text.contains("<p>What libraries hold up?</p>"));
}

#[test]
fn test_thread_shape() {
    let story = story();

    let roots: Vec<_> = story.comments.iter().map(|c| c.id).collect();
    assert_eq!(roots, vec![39_900_101, 39_900_105]);

    let replies: Vec<_> = story.comments[0].children.iter().map(|c| c.id).collect();
    assert_eq!(replies, vec![39_900_102, 39_900_104]);

    assert_eq!(story.comments[0].children[0].children[0].id, 39_900_103);
    assert_eq!(story.comment_count(), 5);
    assert_eq!(total_comment_count(&story.comments), 5);
}

#[test]
fn test_comment_bodies_keep_markup() {
    let story = story();

    let answer = find(&story.comments, 39_900_103).expect("comment present");
    assert_eq!(answer.author_name, "dana");
    assert!(answer.text.contains(r#"<a href="https://example.com/faq" rel="nofollow">the FAQ</a>"#));
    assert!(!answer.text.contains("reply"));

    let late = find(&story.comments, 39_900_105).expect("comment present");
    assert_eq!(late.text, "<i>Late</i> to the party.");
}

#[test]
fn test_comment_vote_state() {
    let story = story();

    let fresh = find(&story.comments, 39_900_101).expect("comment present");
    assert_eq!(
        fresh.actions.kinds().collect::<Vec<_>>(),
        vec![ActionKind::Upvote, ActionKind::Downvote]
    );

    let voted = find(&story.comments, 39_900_102).expect("comment present");
    assert_eq!(
        voted.actions.kinds().collect::<Vec<_>>(),
        vec![ActionKind::Downvote, ActionKind::Unvote]
    );
}

#[test]
fn test_vote_on_comment_then_undo() {
    let story = story();
    let target = story.comments[1].clone();
    let downvote = target.actions.get(ActionKind::Downvote).cloned().expect("downvote action");

    let after = apply_vote_result(target, &downvote);

    assert_eq!(
        after.actions.kinds().collect::<Vec<_>>(),
        vec![ActionKind::Upvote, ActionKind::Undown]
    );
    let undown = after.actions.get(ActionKind::Undown).expect("undown action");
    assert!(undown.url.query_pairs().any(|(k, v)| k == "how" && v == "un"));
}

#[test]
fn test_comment_form_token() {
    assert_eq!(extract_comment_hmac(&item_page()).expect("form present"), "5c0ffee5");
}
