//! End-to-end behaviour of `compute_diff` across granularities and options

use textdiff_core::{
    compute_diff, render_patch, DiffConfig, DiffEngine, DiffError, DiffStats, DiffTag, Granularity,
    Side,
};

fn tagged(result: &textdiff_core::DiffResult) -> Vec<(DiffTag, String)> {
    result.iter().map(|s| (s.tag, s.value.clone())).collect()
}

fn seg(tag: DiffTag, value: &str) -> (DiffTag, String) {
    (tag, value.to_string())
}

#[test]
fn character_substitution() {
    let (result, stats) = compute_diff("cat", "cot", None).unwrap();

    assert_eq!(
        tagged(&result),
        vec![
            seg(DiffTag::Equal, "c"),
            seg(DiffTag::Removed, "a"),
            seg(DiffTag::Added, "o"),
            seg(DiffTag::Equal, "t"),
        ]
    );
    assert_eq!(
        stats,
        DiffStats {
            additions: 1,
            deletions: 1,
            modifications: 0,
            unchanged: 2,
        }
    );
}

#[test]
fn word_mode_ignoring_case() {
    let config = DiffConfig::new()
        .with_granularity(Granularity::Word)
        .with_ignore_case(true);

    let (result, stats) = compute_diff("Hello World", "hello there world", Some(config)).unwrap();

    assert_eq!(
        tagged(&result),
        vec![
            seg(DiffTag::Equal, "hello"),
            seg(DiffTag::Added, "there"),
            seg(DiffTag::Equal, "world"),
        ]
    );
    assert_eq!(stats.additions, 1);
    assert_eq!(stats.deletions, 0);
}

#[test]
fn word_mode_is_case_sensitive_by_default() {
    let config = DiffConfig::new().with_granularity(Granularity::Word);

    let (_, stats) = compute_diff("Hello World", "hello world", Some(config)).unwrap();

    assert_eq!(stats.unchanged, 0);
    assert_eq!(stats.deletions, 2);
    assert_eq!(stats.additions, 2);
}

#[test]
fn line_mode_removal() {
    let config = DiffConfig::new().with_granularity(Granularity::Line);

    let (result, stats) = compute_diff("a\nb\nc", "a\nc", Some(config)).unwrap();

    assert_eq!(
        tagged(&result),
        vec![
            seg(DiffTag::Equal, "a"),
            seg(DiffTag::Removed, "b"),
            seg(DiffTag::Equal, "c"),
        ]
    );
    assert_eq!(stats.additions, 0);
    assert_eq!(stats.deletions, 1);
    assert_eq!(stats.unchanged, 2);
    assert!(result.iter().all(|s| s.separator == "\n"));
}

#[test]
fn empty_inputs_give_empty_result() {
    for granularity in Granularity::all() {
        let config = DiffConfig::new().with_granularity(granularity);
        let (result, stats) = compute_diff("", "", Some(config)).unwrap();

        assert!(result.is_empty(), "{granularity} produced segments");
        assert_eq!(stats, DiffStats::default());
    }
}

#[test]
fn one_side_empty() {
    let (result, stats) = compute_diff("", "new", None).unwrap();
    assert!(result.iter().all(|s| s.tag == DiffTag::Added));
    assert_eq!(stats.additions, 3);

    let (result, stats) = compute_diff("old", "", None).unwrap();
    assert!(result.iter().all(|s| s.tag == DiffTag::Removed));
    assert_eq!(stats.deletions, 3);
}

#[test]
fn disjoint_inputs_interleave_substitutions() {
    let (result, _) = compute_diff("ab", "xy", None).unwrap();

    assert_eq!(
        tagged(&result),
        vec![
            seg(DiffTag::Removed, "a"),
            seg(DiffTag::Added, "x"),
            seg(DiffTag::Removed, "b"),
            seg(DiffTag::Added, "y"),
        ]
    );
}

#[test]
fn modifications_stay_zero() {
    let samples = [
        ("The quick brown fox", "The quick red fox"),
        ("alpha\nbeta", "gamma\ndelta\nepsilon"),
        ("", "x"),
    ];

    for granularity in Granularity::all() {
        for (left, right) in samples {
            let config = DiffConfig::new().with_granularity(granularity);
            let (_, stats) = compute_diff(left, right, Some(config)).unwrap();
            assert_eq!(stats.modifications, 0);
        }
    }
}

#[test]
fn sample_texts_word_diff() {
    let left = "The quick brown fox jumps over the lazy dog.\n\
                This is the first version of the text.";
    let right = "The quick brown fox leaps over the lazy cat.\n\
                 This is the second version of the text.";
    let config = DiffConfig::new().with_granularity(Granularity::Word);

    let (result, stats) = compute_diff(left, right, Some(config)).unwrap();

    let removed: Vec<&str> = result
        .iter()
        .filter(|s| s.tag == DiffTag::Removed)
        .map(|s| s.value.as_str())
        .collect();
    let added: Vec<&str> = result
        .iter()
        .filter(|s| s.tag == DiffTag::Added)
        .map(|s| s.value.as_str())
        .collect();

    assert_eq!(removed, vec!["jumps", "dog.", "first"]);
    assert_eq!(added, vec!["leaps", "cat.", "second"]);
    assert_eq!(stats.unchanged, 14);
}

#[test]
fn word_split_treats_next_line_as_text() {
    // U+0085 is not whitespace, so it stays inside the word
    let config = DiffConfig::new().with_granularity(Granularity::Word);
    let (result, stats) = compute_diff("a\u{85}b", "a\u{85}b", Some(config)).unwrap();

    assert_eq!(tagged(&result), vec![seg(DiffTag::Equal, "a\u{85}b")]);
    assert_eq!(stats.unchanged, 1);
}

#[test]
fn word_split_treats_byte_order_mark_as_whitespace() {
    let config = DiffConfig::new().with_granularity(Granularity::Word);
    let (result, stats) = compute_diff("x\u{feff}y", "x y", Some(config)).unwrap();

    assert_eq!(
        tagged(&result),
        vec![seg(DiffTag::Equal, "x"), seg(DiffTag::Equal, "y")]
    );
    assert!(!stats.has_changes());
}

#[test]
fn ignore_whitespace_trims_byte_order_mark() {
    let config = DiffConfig::new().with_ignore_whitespace(true);
    let (result, _) = compute_diff("\u{feff}ab\u{85}", "ab\u{85}", Some(config)).unwrap();

    assert!(result.is_identical());
    assert_eq!(result.left_text(), "ab\u{85}");
}

#[test]
fn astral_characters_are_single_tokens() {
    let (result, stats) = compute_diff("\u{1F600}", "\u{1F603}", None).unwrap();

    assert_eq!(
        tagged(&result),
        vec![
            seg(DiffTag::Removed, "\u{1F600}"),
            seg(DiffTag::Added, "\u{1F603}"),
        ]
    );
    assert_eq!(stats.unchanged, 0);
}

#[test]
fn text_reconstruction_needs_no_separator_argument() {
    let config = DiffConfig::new().with_granularity(Granularity::Line);
    let (result, _) = compute_diff("a\nb\n", "a\nc\n", Some(config)).unwrap();

    assert_eq!(result.left_text(), "a\nb\n");
    assert_eq!(result.right_text(), "a\nc\n");
}

#[test]
fn patch_rendering_matches_segments() {
    let config = DiffConfig::new().with_granularity(Granularity::Line);
    let (result, _) = compute_diff("keep\ndrop", "keep\nadd", Some(config)).unwrap();

    assert_eq!(render_patch(&result), "  keep\n- drop\n+ add\n");
}

#[test]
fn oversized_input_is_rejected() {
    let config = DiffConfig::new().with_max_input_len(Some(8));

    let err = compute_diff("short", "much too long", Some(config)).unwrap_err();

    assert_eq!(
        err,
        DiffError::InputTooLarge {
            side: Side::Right,
            len: 13,
            limit: 8,
        }
    );
}

#[test]
fn config_from_json_drives_engine() {
    let config =
        DiffConfig::from_json(r#"{"diffType": "line", "ignoreWhitespace": true}"#).unwrap();
    let engine = DiffEngine::new(config);

    // whitespace collapsing turns the newline into a space, leaving one line
    let (result, stats) = engine.diff("a\n b", "a b").unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(stats.unchanged, 1);
}

#[test]
fn unknown_granularity_is_rejected() {
    let err = "paragraph".parse::<Granularity>().unwrap_err();
    assert_eq!(err, DiffError::InvalidGranularity("paragraph".to_string()));
}

#[test]
fn segments_serialize_as_value_tag_records() {
    let (result, stats) = compute_diff("ab", "b", None).unwrap();

    let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
    assert_eq!(json[0]["value"], "a");
    assert_eq!(json[0]["tag"], "removed");
    assert_eq!(json[1]["tag"], "equal");

    let stats_json = serde_json::to_value(stats).unwrap();
    assert_eq!(stats_json["deletions"], 1);
    assert_eq!(stats_json["modifications"], 0);
}
