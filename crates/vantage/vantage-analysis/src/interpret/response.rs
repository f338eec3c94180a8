//! Adapter from free text to positional interpretation arrays.

use serde::Deserialize;
use vantage_core::errors::InterpreterError;
use vantage_core::types::Interpretation;

#[derive(Deserialize)]
struct Wrapped {
    interpretations: Vec<Interpretation>,
}

/// Parse a completion into exactly `expected` interpretations.
///
/// Accepts a bare JSON array, optionally surrounded by prose or a code fence,
/// or an object with an `interpretations` array. Anything else, including a
/// wrong entry count, is a total batch failure.
pub fn parse_interpretation_response(
    raw: &str,
    expected: usize,
) -> Result<Vec<Interpretation>, InterpreterError> {
    let trimmed = raw.trim();
    let parsed = if trimmed.starts_with('{') {
        serde_json::from_str::<Wrapped>(trimmed)
            .map(|w| w.interpretations)
            .map_err(|e| malformed(e.to_string()))?
    } else {
        let start = trimmed
            .find('[')
            .ok_or_else(|| malformed("no JSON array in response".to_string()))?;
        let end = trimmed
            .rfind(']')
            .filter(|end| *end > start)
            .ok_or_else(|| malformed("unterminated JSON array".to_string()))?;
        serde_json::from_str::<Vec<Interpretation>>(&trimmed[start..=end])
            .map_err(|e| malformed(e.to_string()))?
    };

    if parsed.len() != expected {
        return Err(InterpreterError::CountMismatch {
            expected,
            actual: parsed.len(),
        });
    }
    Ok(parsed.into_iter().map(Interpretation::normalized).collect())
}

fn malformed(reason: String) -> InterpreterError {
    InterpreterError::MalformedResponse { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: &str = r#"{"is_meaningful": true, "actionability_score": 8, "semantic_category": "curiosity", "why_it_works": "Opens a loop", "best_use_cases": ["explainers"], "interpretation_confidence": 0.9}"#;

    #[test]
    fn parses_fenced_array() {
        let raw = format!("Here you go:\n```json\n[{ONE}, {ONE}]\n```");
        let out = parse_interpretation_response(&raw, 2).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out[0].is_meaningful);
        assert_eq!(out[0].actionability_score, 8);
        assert!(out[1].warnings.is_empty());
    }

    #[test]
    fn parses_wrapped_object() {
        let raw = format!(r#"{{"interpretations": [{ONE}]}}"#);
        assert_eq!(parse_interpretation_response(&raw, 1).unwrap().len(), 1);
    }

    #[test]
    fn count_mismatch_fails_batch() {
        let raw = format!("[{ONE}]");
        assert_eq!(
            parse_interpretation_response(&raw, 3),
            Err(InterpreterError::CountMismatch {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(
            parse_interpretation_response("I cannot help with that.", 1),
            Err(InterpreterError::MalformedResponse { .. })
        ));
        assert!(matches!(
            parse_interpretation_response("[{\"is_meaningful\": \"maybe\"}]", 1),
            Err(InterpreterError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn scores_are_clamped() {
        let raw = r#"[{"is_meaningful": true, "actionability_score": 0, "interpretation_confidence": 3.0}]"#;
        let out = parse_interpretation_response(raw, 1).unwrap();
        assert_eq!(out[0].actionability_score, 1);
        assert_eq!(out[0].interpretation_confidence, 1.0);
    }
}
