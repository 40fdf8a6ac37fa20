//! Integration tests for splitting text around a tag.

use pretty_assertions::assert_eq;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use stoffe_utils::{Fragment, FragmentKind, TagTextError, split, try_split};

const OPEN: &str = "<a>";
const CLOSE: &str = "</a>";

/// Helper to flatten fragments into (kind, value) pairs.
fn pairs<'a>(fragments: &[Fragment<'a>]) -> Vec<(&'static str, &'a str)> {
    fragments
        .iter()
        .map(|f| {
            let kind = match f.kind {
                FragmentKind::Text => "text",
                FragmentKind::Tag => "tag",
            };
            (kind, f.value)
        })
        .collect()
}

fn joined(fragments: &[Fragment<'_>]) -> String {
    fragments.iter().map(|f| f.value).collect()
}

/// Helper to map arbitrary bytes onto a three-letter alphabet, so markers
/// actually occur in generated text. One letter is multi-byte.
fn small_alphabet(bytes: &[u8]) -> String {
    bytes.iter().map(|b| ['a', 'b', 'é'][usize::from(b % 3)]).collect()
}

/// Helper to check the partition invariants for one input.
fn partition_holds(text: &str, open: &str, close: &str) -> bool {
    let fragments = split(text, open, close);
    let alternates = fragments
        .iter()
        .enumerate()
        .all(|(i, f)| f.is_tag() == (i % 2 == 1));
    let tags_delimited = fragments.iter().filter(|f| f.is_tag()).all(|f| {
        f.value.ends_with(close) && (f.value.starts_with(open) || open.starts_with(f.value))
    });
    joined(&fragments) == text && alternates && tags_delimited
}

#[test]
fn test_text_without_markers_is_one_fragment() {
    let fragments = split("hello world", OPEN, CLOSE);
    assert_eq!(pairs(&fragments), vec![("text", "hello world")]);
}

#[test]
fn test_tag_in_the_middle() {
    let fragments = split("see <a>link</a> here", OPEN, CLOSE);
    assert_eq!(
        pairs(&fragments),
        vec![("text", "see "), ("tag", "<a>link</a>"), ("text", " here")]
    );
}

#[test]
fn test_adjacent_tags_get_empty_text_before_each() {
    let fragments = split("<a>x</a><a>y</a>", OPEN, CLOSE);
    assert_eq!(
        pairs(&fragments),
        vec![("text", ""), ("tag", "<a>x</a>"), ("text", ""), ("tag", "<a>y</a>")]
    );
}

#[test]
fn test_empty_input_yields_nothing() {
    assert!(split("", OPEN, CLOSE).is_empty());
    assert_eq!(try_split("", OPEN, CLOSE), Ok(Vec::new()));
}

#[test]
fn test_partition_is_lossless() {
    let inputs = [
        "",
        "plain",
        "<a>only</a>",
        "a<a>b</a>c<a>d</a>e",
        "</a> close before open <a>x</a>",
        "<a>unterminated",
        "before <a>ok</a> after <a>unterminated",
        "<a></a>",
        "<a><a>nested</a></a>",
        "ünïcödé <a>länk</a> ✓",
    ];
    for input in inputs {
        let fragments = split(input, OPEN, CLOSE);
        assert_eq!(joined(&fragments), input, "input: {input:?}");
    }
}

#[allow(clippy::needless_pass_by_value)]
#[quickcheck]
fn test_partition_is_lossless_for_any_text(
    text: String,
    open: String,
    close: String,
) -> TestResult {
    if open.is_empty() || close.is_empty() {
        return TestResult::discard();
    }
    TestResult::from_bool(partition_holds(&text, &open, &close))
}

#[allow(clippy::needless_pass_by_value)]
#[quickcheck]
fn test_partition_is_lossless_when_markers_occur(
    text: Vec<u8>,
    open: Vec<u8>,
    close: Vec<u8>,
) -> TestResult {
    let open = small_alphabet(&open[..open.len().min(3)]);
    let close = small_alphabet(&close[..close.len().min(3)]);
    if open.is_empty() || close.is_empty() {
        return TestResult::discard();
    }
    TestResult::from_bool(partition_holds(&small_alphabet(&text), &open, &close))
}

#[test]
fn test_close_marker_inside_open_marker() {
    // The close marker is searched from the open marker's start, so it can
    // match inside the open marker itself.
    let fragments = split("xaay", "aa", "a");
    assert_eq!(
        pairs(&fragments),
        vec![("text", "x"), ("tag", "a"), ("text", "ay")]
    );
    assert!(partition_holds("aaaa", "aa", "a"));
    assert!(partition_holds("baab<aa", "aa", "a"));
}

#[test]
fn test_tags_start_and_end_with_markers() {
    let input = "x <a href=\"/1\">one</a> y <a>two</a><a></a> z";
    for fragment in split(input, "<a", CLOSE).iter().filter(|f| f.is_tag()) {
        assert!(fragment.value.starts_with("<a"), "{fragment:?}");
        assert!(fragment.value.ends_with(CLOSE), "{fragment:?}");
    }
}

#[test]
fn test_longer_open_marker_selects_links() {
    let input = r#"<a href="/plain">no</a> and <a class="text-link" href="/x">yes</a>"#;
    let fragments = split(input, r#"<a class="text-link" "#, CLOSE);
    assert_eq!(
        pairs(&fragments),
        vec![
            ("text", r#"<a href="/plain">no</a> and "#),
            ("tag", r#"<a class="text-link" href="/x">yes</a>"#),
        ]
    );
}

#[test]
fn test_tag_ends_at_first_close_marker() {
    let fragments = split("<a><a>nested</a></a>", OPEN, CLOSE);
    assert_eq!(
        pairs(&fragments),
        vec![("text", ""), ("tag", "<a><a>nested</a>"), ("text", "</a>")]
    );
}

#[test]
fn test_unterminated_tag_is_kept_as_text() {
    let fragments = split("before <a>ok</a> after <a>dangling", OPEN, CLOSE);
    assert_eq!(
        pairs(&fragments),
        vec![
            ("text", "before "),
            ("tag", "<a>ok</a>"),
            ("text", " after <a>dangling"),
        ]
    );
}

#[test]
fn test_try_split_reports_unterminated_tag() {
    assert_eq!(
        try_split("before <a>ok</a> after <a>dangling", OPEN, CLOSE),
        Err(TagTextError::UnterminatedTag { offset: 23 })
    );
}

#[test]
fn test_empty_markers() {
    let fragments = split("keep <a>all</a>", "", CLOSE);
    assert_eq!(pairs(&fragments), vec![("text", "keep <a>all</a>")]);
    assert_eq!(try_split("keep", OPEN, ""), Err(TagTextError::EmptyMarker));
}

#[test]
fn test_try_split_matches_split_on_clean_input() {
    let input = "see <a>link</a> here";
    assert_eq!(try_split(input, OPEN, CLOSE), Ok(split(input, OPEN, CLOSE)));
}

#[test]
fn test_fragments_serialize_with_type_field() {
    let fragments = split("see <a>x</a>", OPEN, CLOSE);
    let json = serde_json::to_string(&fragments).unwrap();
    assert_eq!(
        json,
        r#"[{"value":"see ","type":"text"},{"value":"<a>x</a>","type":"tag"}]"#
    );
    assert_eq!(FragmentKind::Tag.to_string(), "tag");
}
