use crate::schema::SchemaError;
use std::fmt;
use std::future::Future;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure taxonomy for the ingestion pipeline. Every fallible function in
/// this crate returns `ApiResult` — errors are values, never panics, on the
/// public surface.
#[derive(Debug)]
pub enum ApiError {
    /// Non-2xx response or network-level failure. Network and body-decode
    /// failures use status code 500 by convention.
    Transport { status_code: u16, message: String },
    /// A raw record failed schema validation against the expected CFBD shape.
    Shape(SchemaError),
    /// A `play_type` label outside the known CFBD vocabulary.
    UnknownPlayType(String),
    /// A failure annotated with the context it occurred in. The inner error
    /// stays reachable through `Error::source` for programmatic handling.
    Context { message: String, source: Box<ApiError> },
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport { status_code, message } => {
                write!(f, "HTTP {status_code}: {message}")
            }
            ApiError::Shape(e) => write!(f, "{e}"),
            ApiError::UnknownPlayType(label) => {
                write!(f, "Unknown game event type from CFBD: {label}")
            }
            ApiError::Context { message, source } => write!(f, "{message}: {source}"),
            ApiError::Other(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Context { source, .. } => Some(source.as_ref()),
            ApiError::Shape(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SchemaError> for ApiError {
    fn from(e: SchemaError) -> Self {
        ApiError::Shape(e)
    }
}

/// Prefixing combinator used by every layer that forwards a failure, so
/// failures accumulate a readable causal chain on their way up.
pub trait ResultExt<T> {
    /// On failure, wraps the error with a human-readable prefix. Successes
    /// pass through untouched.
    fn context(self, prefix: impl Into<String>) -> ApiResult<T>;
}

impl<T> ResultExt<T> for ApiResult<T> {
    fn context(self, prefix: impl Into<String>) -> ApiResult<T> {
        self.map_err(|e| ApiError::Context { message: prefix.into(), source: Box::new(e) })
    }
}

/// Ordered fail-fast join: all values on success, otherwise the first
/// failure. Remaining elements are not consumed once a failure is seen.
pub fn collect_all<T>(results: impl IntoIterator<Item = ApiResult<T>>) -> ApiResult<Vec<T>> {
    let iter = results.into_iter();
    let mut values = Vec::with_capacity(iter.size_hint().0);
    for result in iter {
        values.push(result?);
    }
    Ok(values)
}

/// Outcome of [`join_settled`]: one result per input future, in input order,
/// plus an aggregate flag.
#[derive(Debug)]
pub struct Settled<T> {
    pub results: Vec<ApiResult<T>>,
    pub any_failed: bool,
}

/// Drives all futures to completion and records each outcome. An element
/// failure is data here, not an error: the join itself always completes with
/// every per-element result, and callers check `any_failed` to see whether
/// anything went wrong.
pub async fn join_settled<T>(
    futures: impl IntoIterator<Item = impl Future<Output = ApiResult<T>>>,
) -> Settled<T> {
    let results = futures_util::future::join_all(futures).await;
    let any_failed = results.iter().any(|r| r.is_err());
    Settled { results, any_failed }
}

/// Best-effort extraction of a human-readable message from an arbitrary JSON
/// error body. Nested `message`/`error` fields are unwrapped recursively
/// until a terminal string is found; unrecognized shapes fall back to the
/// stringified value.
pub fn message_from_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => s.clone(),
        serde_json::Value::Object(map) => {
            if let Some(message) = map.get("message") {
                return message_from_value(message);
            }
            if let Some(error) = map.get("error") {
                return message_from_value(error);
            }
            value.to_string()
        }
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn context_prefixes_chain_in_display() {
        let inner: ApiResult<()> = Err(ApiError::Other("boom".into()));
        let outer = inner.context("While fetching").context("While starting up");
        let err = outer.unwrap_err();
        assert_eq!(err.to_string(), "While starting up: While fetching: boom");
    }

    #[test]
    fn context_preserves_source_for_inspection() {
        let inner: ApiResult<()> = Err(ApiError::UnknownPlayType("JUMP BALL".into()));
        let err = inner.context("Classifying").unwrap_err();

        let source = std::error::Error::source(&err).expect("source should be preserved");
        let source = source.downcast_ref::<ApiError>().expect("source should be an ApiError");
        assert!(matches!(source, ApiError::UnknownPlayType(label) if label == "JUMP BALL"));
    }

    #[test]
    fn context_passes_success_through() {
        let ok: ApiResult<u8> = Ok(7);
        assert_eq!(ok.context("unused").unwrap(), 7);
    }

    #[test]
    fn collect_all_returns_every_value_when_all_succeed() {
        let values = collect_all([Ok(1), Ok(2), Ok(3)]).unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn collect_all_surfaces_the_first_failure_only() {
        let results: Vec<ApiResult<u8>> = vec![
            Ok(1),
            Err(ApiError::Other("first".into())),
            Err(ApiError::Other("second".into())),
        ];
        let err = collect_all(results).unwrap_err();
        assert_eq!(err.to_string(), "first");
    }

    #[test]
    fn collect_all_stops_consuming_after_a_failure() {
        let mut pulled = 0;
        let results = (0..5).map(|i| {
            pulled += 1;
            if i == 1 { Err(ApiError::Other("stop".into())) } else { Ok(i) }
        });
        assert!(collect_all(results).is_err());
        assert_eq!(pulled, 2);
    }

    async fn outcome(result: ApiResult<i32>) -> ApiResult<i32> {
        result
    }

    #[tokio::test]
    async fn join_settled_records_element_failures_without_failing_itself() {
        let settled = join_settled(vec![
            outcome(Ok(1)),
            outcome(Err(ApiError::Other("bad".into()))),
            outcome(Ok(3)),
        ])
        .await;

        assert!(settled.any_failed);
        assert_eq!(settled.results.len(), 3);
        assert_eq!(settled.results.iter().filter(|r| r.is_err()).count(), 1);
        assert!(settled.results[0].is_ok());
        assert!(settled.results[1].is_err());
        assert!(settled.results[2].is_ok());
    }

    #[tokio::test]
    async fn join_settled_reports_no_failures_when_all_succeed() {
        let settled = join_settled((0..3).map(|i| async move { Ok::<_, ApiError>(i) })).await;
        assert!(!settled.any_failed);
        assert_eq!(settled.results.len(), 3);
    }

    #[test]
    fn message_from_value_takes_plain_strings() {
        assert_eq!(message_from_value(&json!("token expired")), "token expired");
    }

    #[test]
    fn message_from_value_unwraps_nested_message_and_error_fields() {
        let body = json!({"error": {"message": "Unauthorized"}});
        assert_eq!(message_from_value(&body), "Unauthorized");
    }

    #[test]
    fn message_from_value_stringifies_unrecognized_shapes() {
        assert_eq!(message_from_value(&json!({"status": 503})), r#"{"status":503}"#);
        assert_eq!(message_from_value(&json!(42)), "42");
    }
}
