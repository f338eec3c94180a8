//! Discovery scenarios over realistic corpora.

mod common;

use common::{batch, context, filler, ItemBuilder};
use vantage_analysis::discovery::PatternDiscovery;
use vantage_core::config::VantageConfig;
use vantage_core::types::{FormatType, PatternType};

#[test]
fn rare_phrase_is_rejected_for_insufficient_evidence() {
    let mut items = batch("dt", 12, "Day Trading for Beginners", 3.0);
    items.extend(filler(60));

    let discovery = PatternDiscovery::new(&VantageConfig::default());
    let result = discovery.discover_from_items(items, &context());

    assert!(result.is_clean());
    assert!(result
        .data
        .candidates
        .iter()
        .all(|c| !c.name.contains("day trading")));
    let diagnostics = &result.data.diagnostics;
    assert!(diagnostics.raw_candidates["title_ngram"] > 0);
    assert!(diagnostics.rejected["insufficient_evidence"] > 0);
}

#[test]
fn weak_format_lift_is_not_a_pattern() {
    let mut items: Vec<_> = (0..40)
        .map(|i| {
            ItemBuilder::new(&format!("s{i}"), "quick clip")
                .ratio(1.2)
                .format(FormatType::Shorts)
                .duration(120)
                .build()
        })
        .collect();
    items.extend((0..200).map(|i| {
        ItemBuilder::new(&format!("v{i}"), &format!("vlog entry {i}"))
            .ratio(1.0)
            .format(FormatType::Vlog)
            .day((i % 7) as i64)
            .build()
    }));

    let discovery = PatternDiscovery::new(&VantageConfig::default());
    let result = discovery.discover_from_items(items, &context());
    assert!(result
        .data
        .candidates
        .iter()
        .all(|c| c.pattern_type != PatternType::Format));
}

#[test]
fn strong_phrase_survives_validation() {
    let mut items = batch("dt", 40, "Day Trading Secrets Revealed", 3.0);
    items.extend(filler(60));

    let discovery = PatternDiscovery::new(&VantageConfig::default());
    let result = discovery.discover_from_items(items, &context());

    let ids: Vec<&str> = result.data.candidates.iter().map(|c| c.id.as_str()).collect();
    assert!(ids.contains(&"title_ngram:day trading"));
    assert!(ids.contains(&"timing:monday"));
    for c in &result.data.candidates {
        assert!(c.evidence_count >= 30);
        assert!(c.confidence >= 0.8);
        assert!(c.is_consistent());
    }
    assert_eq!(result.data.diagnostics.items_qualifying, 100);
}

#[test]
fn short_form_and_unnormalized_items_are_excluded() {
    let mut items = filler(45);
    items.extend((0..10).map(|i| ItemBuilder::new(&format!("s{i}"), "clip").duration(30).build()));
    items.extend((0..10).map(|i| {
        let mut item = ItemBuilder::new(&format!("n{i}"), "raw").build();
        item.baseline_views = None;
        item
    }));

    let discovery = PatternDiscovery::new(&VantageConfig::default());
    let result = discovery.discover_from_items(items, &context());

    let d = &result.data.diagnostics;
    assert_eq!(d.items_fetched, 65);
    assert_eq!(d.excluded_short_form, 10);
    assert_eq!(d.excluded_missing_normalization, 10);
    assert!(d.insufficient_data);
    assert!(result.data.candidates.is_empty());
}
