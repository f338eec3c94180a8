//! End-to-end pipeline runs with in-memory collaborators.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use common::{batch, context, filler, MemorySource, MemoryStore};
use vantage_analysis::pipeline::PatternPipeline;
use vantage_core::config::VantageConfig;
use vantage_core::errors::{InterpreterError, PipelineError};
use vantage_core::traits::SemanticInterpreter;
use vantage_core::types::{Interpretation, InterpretationRequest};

fn corpus() -> Vec<vantage_core::types::Item> {
    let mut items = batch("dt", 40, "Day Trading Secrets Revealed", 3.0);
    items.extend(filler(60));
    items
}

/// Judges timing patterns as artifacts, everything else meaningful.
struct SkepticalInterpreter;

#[async_trait]
impl SemanticInterpreter for SkepticalInterpreter {
    async fn interpret_batch(
        &self,
        request: &InterpretationRequest,
    ) -> Result<Vec<Interpretation>, InterpreterError> {
        Ok(request
            .patterns
            .iter()
            .map(|p| Interpretation {
                is_meaningful: !p.template.starts_with("publish:"),
                actionability_score: 7,
                semantic_category: "test".to_string(),
                why_it_works: String::new(),
                best_use_cases: vec![],
                warnings: vec![],
                interpretation_confidence: 0.9,
            })
            .collect())
    }

    fn name(&self) -> &str {
        "skeptical"
    }
}

struct BrokenInterpreter;

#[async_trait]
impl SemanticInterpreter for BrokenInterpreter {
    async fn interpret_batch(
        &self,
        _request: &InterpretationRequest,
    ) -> Result<Vec<Interpretation>, InterpreterError> {
        Err(InterpreterError::MalformedResponse {
            reason: "truncated".to_string(),
        })
    }

    fn name(&self) -> &str {
        "broken"
    }
}

#[tokio::test]
async fn selects_and_persists_deduplicated_patterns() {
    vantage_core::tracing::init_tracing();
    let source = MemorySource::new(corpus());
    let store = Arc::new(MemoryStore::default());
    let pipeline = PatternPipeline::new(VantageConfig::default()).with_store(store.clone());

    let result = pipeline.run(&source, &context()).await.unwrap();
    assert!(result.is_clean());

    let out = &result.data;
    // Every phrase/length candidate over the same 40 items collapses into one.
    assert_eq!(out.selected.len(), 2);
    assert!(out.dedup.merges > 0);
    assert!(out
        .selected
        .iter()
        .any(|s| s.pattern.id == "timing:monday"));
    let phrase = out
        .selected
        .iter()
        .find(|s| s.pattern.id != "timing:monday")
        .unwrap();
    // Merged item ids are capped.
    assert_eq!(phrase.pattern.evidence_count, 30);
    assert!(phrase.pattern.is_consistent());
    assert!(phrase.pattern.associated_item_ids.iter().all(|id| id.starts_with("dt")));
    assert!(phrase.interpretation.is_none());

    assert_eq!(out.persisted, 2);
    assert_eq!(store.saved.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn interpreter_filters_non_meaningful_patterns() {
    let source = MemorySource::new(corpus());
    let pipeline = PatternPipeline::new(VantageConfig::default())
        .with_interpreter(Arc::new(SkepticalInterpreter));

    let result = pipeline.run(&source, &context()).await.unwrap();
    let out = &result.data;
    assert_eq!(out.interpreted, 2);
    assert_eq!(out.meaningful, 1);
    assert_eq!(out.selected.len(), 1);
    assert!(out.selected[0].interpretation.as_ref().unwrap().is_meaningful);
    assert!(!out.selected[0].pattern.template.starts_with("publish:"));
}

#[tokio::test]
async fn failed_interpretation_degrades_instead_of_aborting() {
    let mut config = VantageConfig::default();
    config.interpreter.max_retries = 0;
    let source = MemorySource::new(corpus());
    let pipeline = PatternPipeline::new(config).with_interpreter(Arc::new(BrokenInterpreter));

    let result = pipeline.run(&source, &context()).await.unwrap();
    assert_eq!(result.error_count(), 1);
    assert!(matches!(result.errors[0], PipelineError::Interpreter(_)));
    assert!(result.data.selected.is_empty());
}

#[tokio::test]
async fn disabled_interpreter_is_skipped() {
    let mut config = VantageConfig::default();
    config.interpreter.enabled = false;
    let source = MemorySource::new(corpus());
    let pipeline = PatternPipeline::new(config).with_interpreter(Arc::new(BrokenInterpreter));

    let result = pipeline.run(&source, &context()).await.unwrap();
    assert!(result.is_clean());
    assert_eq!(result.data.interpreted, 0);
    assert_eq!(result.data.selected.len(), 2);
}

#[tokio::test]
async fn store_failures_are_collected() {
    let source = MemorySource::new(corpus());
    let store = Arc::new(MemoryStore {
        reject: vec!["timing:monday".to_string()],
        ..Default::default()
    });
    let pipeline = PatternPipeline::new(VantageConfig::default()).with_store(store);

    let result = pipeline.run(&source, &context()).await.unwrap();
    assert_eq!(result.data.persisted, 1);
    assert_eq!(result.error_count(), 1);
    assert!(matches!(result.errors[0], PipelineError::Store(_)));
    assert_eq!(result.data.selected.len(), 2);
}

#[tokio::test]
async fn source_failure_is_fatal() {
    let source = MemorySource {
        fail: true,
        ..Default::default()
    };
    let pipeline = PatternPipeline::new(VantageConfig::default());
    let err = pipeline.run(&source, &context()).await.unwrap_err();
    assert!(matches!(err, PipelineError::Source(_)));
}

#[tokio::test]
async fn too_little_data_returns_empty() {
    let source = MemorySource::new(filler(20));
    let pipeline = PatternPipeline::new(VantageConfig::default());
    let result = pipeline.run(&source, &context()).await.unwrap();
    assert!(result.is_clean());
    assert!(result.data.selected.is_empty());
    assert!(result.data.discovery.insufficient_data);
}
