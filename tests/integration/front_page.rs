//! Front page integration tests
//!
//! A logged-in front page with a voted story, a job, an Ask HN post, and a
//! freshly submitted story.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use rs_hackernews::{extract_listing, ActionKind, ListableKind, DEFAULT_BASE_URL};
use url::Url;

const FRONT_PAGE: &str = r##"<html lang="en" op="news"><head>
<meta name="referrer" content="origin"><meta name="viewport" content="width=device-width, initial-scale=1.0">
<link rel="stylesheet" type="text/css" href="news.css?abc">
<title>Hacker News</title></head>
<body><center><table id="hnmain" border="0" cellpadding="0" cellspacing="0" width="85%" bgcolor="#f6f6ef">
<tr><td bgcolor="#ff6600"><table border="0" cellpadding="0" cellspacing="0" width="100%" style="padding:2px"><tr>
  <td style="width:18px;padding-right:4px"><a href="https://news.ycombinator.com"><img src="y18.svg" width="18" height="18"></a></td>
  <td style="line-height:12pt; height:10px;"><span class="pagetop"><b class="hnname"><a href="news">Hacker News</a></b>
    <a href="newest">new</a> | <a href="front">past</a> | <a href="newcomments">comments</a> | <a href="ask">ask</a> |
    <a href="show">show</a> | <a href="jobs">jobs</a> | <a href="submit">submit</a></span></td>
  <td style="text-align:right;padding-right:4px;"><span class="pagetop"><a id="me" href="user?id=reader">reader</a> (1234) |
    <a id="logout" href="logout?auth=zz&amp;goto=news">logout</a></span></td>
</tr></table></td></tr>
<tr id="pagespace" title="" style="height:10px"></tr>
<tr><td><table border="0" cellpadding="0" cellspacing="0">

<tr class="athing submission" id="40100001">
  <td align="right" valign="top" class="title"><span class="rank">1.</span></td>
  <td valign="top" class="votelinks"><center><a id="up_40100001" class="clicky nosee" href="vote?id=40100001&amp;how=up&amp;auth=aa1&amp;goto=news"><div class="votearrow" title="upvote"></div></a></center></td>
  <td class="title"><span class="titleline"><a href="https://blog.example.org/rust-parsers">Writing parsers in Rust</a><span class="sitebit comhead"> (<a href="from?site=example.org"><span class="sitestr">example.org</span></a>)</span></span></td>
</tr>
<tr><td colspan="2"></td><td class="subtext"><span class="subline">
  <span class="score" id="score_40100001">312 points</span> by <a href="user?id=alice" class="hnuser">alice</a>
  <span class="age" title="2024-05-01T08:12:00 1714551120"><a href="item?id=40100001">4 hours ago</a></span>
  <span id="unv_40100001"> | <a id="un_40100001" class="clicky" href="vote?id=40100001&amp;how=un&amp;auth=aa1&amp;goto=news">unvote</a></span> |
  <a href="hide?id=40100001&amp;auth=aa1&amp;goto=news" class="clicky hider">hide</a> |
  <a href="item?id=40100001">128&nbsp;comments</a>
</span></td></tr>
<tr class="spacer" style="height:5px"></tr>

<tr class="athing submission" id="40100002">
  <td align="right" valign="top" class="title"><span class="rank">2.</span></td>
  <td></td>
  <td class="title"><span class="titleline"><a href="https://www.workatastartup.com/jobs/1" rel="nofollow">Acme (YC W22) Is Hiring Backend Engineers</a><span class="sitebit comhead"> (<a href="from?site=workatastartup.com"><span class="sitestr">workatastartup.com</span></a>)</span></span></td>
</tr>
<tr><td colspan="2"></td><td class="subtext">
  <span class="age" title="2024-05-01T07:00:00 1714546800"><a href="item?id=40100002">5 hours ago</a></span> |
  <a href="hide?id=40100002&amp;auth=aa2&amp;goto=news" class="clicky hider">hide</a>
</td></tr>
<tr class="spacer" style="height:5px"></tr>

<tr class="athing submission" id="40100003">
  <td align="right" valign="top" class="title"><span class="rank">3.</span></td>
  <td valign="top" class="votelinks"><center><a id="up_40100003" class="clicky" href="vote?id=40100003&amp;how=up&amp;auth=aa3&amp;goto=news"><div class="votearrow" title="upvote"></div></a></center></td>
  <td class="title"><span class="titleline"><a href="item?id=40100003">Ask HN: What is your favorite HTML parser?</a></span></td>
</tr>
<tr><td colspan="2"></td><td class="subtext"><span class="subline">
  <span class="score" id="score_40100003">57 points</span> by <a href="user?id=bob" class="hnuser">bob</a>
  <span class="age" title="2024-05-01T10:30:00 1714559400"><a href="item?id=40100003">2 hours ago</a></span>
  <span id="unv_40100003"></span> |
  <a href="hide?id=40100003&amp;auth=aa3&amp;goto=news" class="clicky hider">hide</a> |
  <a href="item?id=40100003">1&nbsp;comment</a>
</span></td></tr>
<tr class="spacer" style="height:5px"></tr>

<tr class="athing submission" id="40100004">
  <td align="right" valign="top" class="title"><span class="rank">4.</span></td>
  <td valign="top" class="votelinks"><center><a id="up_40100004" class="clicky" href="vote?id=40100004&amp;how=up&amp;auth=aa4&amp;goto=news"><div class="votearrow" title="upvote"></div></a></center></td>
  <td class="title"><span class="titleline"><a href="https://example.net/show">Show HN: A tiny scraper</a></span></td>
</tr>
<tr><td colspan="2"></td><td class="subtext"><span class="subline">
  <span class="score" id="score_40100004">1 point</span> by <a href="user?id=carol" class="hnuser">carol</a>
  <span class="age" title="2024-05-01T12:00:00 1714564800"><a href="item?id=40100004">just now</a></span>
  <span id="unv_40100004"></span> |
  <a href="hide?id=40100004&amp;auth=aa4&amp;goto=news" class="clicky hider">hide</a> |
  <a href="item?id=40100004">discuss</a>
</span></td></tr>
<tr class="spacer" style="height:5px"></tr>

<tr class="morespace" style="height:10px"></tr>
<tr><td colspan="2"></td><td class="title"><a href="?p=2" class="morelink" rel="next">More</a></td></tr>
</table></td></tr>
<tr><td><img src="s.gif" height="10" width="0"><table width="100%" cellspacing="0" cellpadding="1"><tr><td bgcolor="#ff6600"></td></tr></table><br>
<center><span class="yclinks"><a href="newsguidelines.html">Guidelines</a> | <a href="newsfaq.html">FAQ</a></span><br><br>
<form method="get" action="//hn.algolia.com/">Search: <input type="text" name="q" size="17" autocorrect="off" spellcheck="false" autocapitalize="off" autocomplete="off"></form></center></td></tr>
</table></center></body></html>"##;

fn base() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL")
}

#[test]
fn test_front_page_items_in_order() {
    let items = extract_listing(FRONT_PAGE, &base()).expect("front page should extract");

    let ids: Vec<_> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![40_100_001, 40_100_002, 40_100_003, 40_100_004]);

    let kinds: Vec<_> = items.iter().map(|item| item.kind).collect();
    assert_eq!(
        kinds,
        vec![ListableKind::Story, ListableKind::Job, ListableKind::Story, ListableKind::Story]
    );
}

#[test]
fn test_front_page_story_fields() {
    let items = extract_listing(FRONT_PAGE, &base()).expect("front page should extract");
    let story = &items[0];

    assert_eq!(story.title, "Writing parsers in Rust");
    assert_eq!(story.author_name.as_deref(), Some("alice"));
    assert_eq!(story.score, Some(312));
    assert_eq!(story.age_description, "4 hours ago");
    assert_eq!(story.comment_count, Some(128));
    assert_eq!(
        story.url.as_ref().map(Url::as_str),
        Some("https://blog.example.org/rust-parsers")
    );
}

#[test]
fn test_front_page_vote_state() {
    let items = extract_listing(FRONT_PAGE, &base()).expect("front page should extract");

    let voted: Vec<_> = items[0].actions.kinds().collect();
    assert_eq!(voted, vec![ActionKind::Unvote]);
    let unvote = items[0].actions.get(ActionKind::Unvote).expect("unvote action");
    assert_eq!(
        unvote.url.as_str(),
        "https://news.ycombinator.com/vote?id=40100001&how=un&auth=aa1&goto=news"
    );

    assert!(items[1].actions.is_empty());
    assert_eq!(items[2].actions.kinds().collect::<Vec<_>>(), vec![ActionKind::Upvote]);
}

#[test]
fn test_front_page_comment_counts() {
    let items = extract_listing(FRONT_PAGE, &base()).expect("front page should extract");

    let counts: Vec<_> = items.iter().map(|item| item.comment_count).collect();
    assert_eq!(counts, vec![Some(128), None, Some(1), Some(0)]);
}

#[test]
fn test_front_page_relative_ask_link() {
    let items = extract_listing(FRONT_PAGE, &base()).expect("front page should extract");

    assert_eq!(items[2].url, None);
    assert_eq!(items[3].url.as_ref().map(Url::as_str), Some("https://example.net/show"));
}

#[test]
fn test_front_page_serializes_to_json() {
    let items = extract_listing(FRONT_PAGE, &base()).expect("front page should extract");

    let json = serde_json::to_value(&items).expect("serialize");

    assert_eq!(json[0]["kind"], "story");
    assert_eq!(json[1]["kind"], "job");
    assert_eq!(json[1]["author_name"], serde_json::Value::Null);
    assert_eq!(json[0]["actions"][0]["kind"], "unvote");
}
