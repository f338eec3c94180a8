//! Batched, bounded-concurrency interpretation with retry and fail-safe.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};
use vantage_core::config::InterpreterConfig;
use vantage_core::errors::{InterpreterError, PipelineResult};
use vantage_core::traits::SemanticInterpreter;
use vantage_core::types::{
    Interpretation, InterpretationRequest, InterpretedPattern, PatternCandidate,
};

/// Optional corpus context forwarded with every batch.
#[derive(Debug, Clone, Default)]
pub struct InterpretationContext {
    pub topic: Option<String>,
    pub item_count: Option<usize>,
    pub baseline_performance: Option<f64>,
}

/// Drives a [`SemanticInterpreter`] over any number of patterns.
///
/// Patterns are split into batches of `batch_size`; at most
/// `max_concurrent_batches` are in flight. Transient failures are retried with
/// exponential backoff. A batch that still fails is degraded to
/// [`Interpretation::fail_safe`] for every member and its error is reported
/// in the result, never raised.
pub struct InterpretationRunner {
    interpreter: Arc<dyn SemanticInterpreter>,
    config: InterpreterConfig,
}

impl InterpretationRunner {
    pub fn new(interpreter: Arc<dyn SemanticInterpreter>, config: InterpreterConfig) -> Self {
        Self {
            interpreter,
            config,
        }
    }

    pub fn interpreter_name(&self) -> &str {
        self.interpreter.name()
    }

    /// One [`InterpretedPattern`] per input, in input order.
    pub async fn interpret_all(
        &self,
        patterns: Vec<PatternCandidate>,
        context: &InterpretationContext,
    ) -> PipelineResult<Vec<InterpretedPattern>> {
        if patterns.is_empty() {
            return PipelineResult::default();
        }

        let batch_size = self.config.batch_size.max(1);
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_batches.max(1)));

        let mut handles = Vec::new();
        for (index, chunk) in patterns.chunks(batch_size).enumerate() {
            let request = InterpretationRequest {
                patterns: chunk.to_vec(),
                topic: context.topic.clone(),
                item_count: context.item_count,
                baseline_performance: context.baseline_performance,
            };
            let interpreter = Arc::clone(&self.interpreter);
            let config = self.config.clone();
            let semaphore = Arc::clone(&semaphore);
            handles.push(tokio::spawn(async move {
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return Err(InterpreterError::Rejected {
                        reason: "interpreter pool closed".to_string(),
                    });
                };
                interpret_with_retry(interpreter.as_ref(), &request, &config, index).await
            }));
        }

        let mut result = PipelineResult::new(Vec::with_capacity(patterns.len()));
        let mut chunks = patterns.chunks(batch_size);
        for (index, handle) in handles.into_iter().enumerate() {
            let Some(chunk) = chunks.next() else {
                break;
            };
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => Err(InterpreterError::Rejected {
                    reason: format!("batch task aborted: {e}"),
                }),
            };
            match outcome {
                Ok(interpretations) => {
                    result.data.extend(chunk.iter().cloned().zip(interpretations).map(
                        |(pattern, interpretation)| InterpretedPattern {
                            pattern,
                            interpretation,
                        },
                    ));
                }
                Err(e) => {
                    warn!(batch = index, size = chunk.len(), error = %e, "interpretation batch degraded to fail-safe");
                    let reason = e.to_string();
                    result.data.extend(chunk.iter().cloned().map(|pattern| InterpretedPattern {
                        pattern,
                        interpretation: Interpretation::fail_safe(&reason),
                    }));
                    result.add_error(e);
                }
            }
        }

        let meaningful = result.data.iter().filter(|p| p.is_meaningful()).count();
        info!(
            interpreter = self.interpreter.name(),
            patterns = result.data.len(),
            meaningful,
            failed_batches = result.error_count(),
            "interpretation complete"
        );
        result
    }
}

/// One batch with per-attempt timeout and retry of transient errors.
async fn interpret_with_retry(
    interpreter: &dyn SemanticInterpreter,
    request: &InterpretationRequest,
    config: &InterpreterConfig,
    batch: usize,
) -> Result<Vec<Interpretation>, InterpreterError> {
    let expected = request.patterns.len();
    let mut attempt: u32 = 0;
    loop {
        attempt += 1;
        let outcome = match timeout(config.timeout(), interpreter.interpret_batch(request)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(InterpreterError::Timeout {
                timeout_ms: config.timeout_ms,
            }),
        };
        let outcome = outcome.and_then(|interpretations| {
            if interpretations.len() == expected {
                Ok(interpretations)
            } else {
                Err(InterpreterError::CountMismatch {
                    expected,
                    actual: interpretations.len(),
                })
            }
        });

        match outcome {
            Ok(interpretations) => {
                debug!(batch, attempt, "interpretation batch succeeded");
                return Ok(interpretations
                    .into_iter()
                    .map(Interpretation::normalized)
                    .collect());
            }
            Err(e) if e.is_transient() && attempt <= config.max_retries => {
                let mut delay = config.backoff_for(attempt);
                if let InterpreterError::RateLimited {
                    retry_after_ms: Some(ms),
                } = e
                {
                    delay = delay.max(std::time::Duration::from_millis(ms));
                }
                warn!(batch, attempt, error = %e, delay_ms = delay.as_millis() as u64, "retrying interpretation batch");
                sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}
