use crate::error::Error;

/// An untyped failure, discriminated once at the entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureSignal {
    /// A bare string was raised.
    Text(String),
    /// Exception-shaped: carries a textual message and maybe a stack.
    Failure {
        message: String,
        stack: Option<String>,
    },
    /// Anything else (null, numbers, arrays, objects without a message).
    Opaque,
}

impl FailureSignal {
    pub fn failure(message: impl Into<String>, stack: Option<String>) -> Self {
        Self::Failure {
            message: message.into(),
            stack,
        }
    }

    /// Wrap a Rust error. The source chain, if any, becomes the stack.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(format!("Caused by: {cause}"));
            source = cause.source();
        }
        let stack = if causes.is_empty() {
            None
        } else {
            Some(causes.join("\n"))
        };
        Self::Failure {
            message: err.to_string(),
            stack,
        }
    }

    /// Discriminate an untyped JSON value.
    ///
    /// Strings are text; objects whose `message` is a string are failures;
    /// everything else is opaque. A non-string `stack` is ignored.
    pub fn from_json(value: &serde_json::Value) -> Self {
        if let Some(text) = value.as_str() {
            return Self::Text(text.to_string());
        }
        if let Some(obj) = value.as_object()
            && let Some(message) = obj.get("message").and_then(|m| m.as_str())
        {
            let stack = obj.get("stack").and_then(|s| s.as_str()).map(String::from);
            return Self::Failure {
                message: message.to_string(),
                stack,
            };
        }
        Self::Opaque
    }

    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Ok(Self::from_json(&value))
    }
}

impl From<&str> for FailureSignal {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FailureSignal {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&serde_json::Value> for FailureSignal {
    fn from(value: &serde_json::Value) -> Self {
        Self::from_json(value)
    }
}

impl<T> From<Option<T>> for FailureSignal
where
    T: Into<FailureSignal>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Opaque, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(thiserror::Error, Debug)]
    #[error("rpc unavailable")]
    struct RpcDown;

    #[derive(thiserror::Error, Debug)]
    #[error("submit failed")]
    struct SubmitFailed(#[source] RpcDown);

    #[test]
    fn json_strings_are_text() {
        assert_eq!(
            FailureSignal::from_json(&serde_json::json!("tx_bad_seq")),
            FailureSignal::Text("tx_bad_seq".to_string())
        );
    }

    #[test]
    fn json_objects_with_message_are_failures() {
        let value = serde_json::json!({"message": "Failed to fetch", "stack": "at x"});
        assert_eq!(
            FailureSignal::from_json(&value),
            FailureSignal::failure("Failed to fetch", Some("at x".to_string()))
        );

        let no_stack = serde_json::json!({"message": "boom", "stack": 7});
        assert_eq!(
            FailureSignal::from_json(&no_stack),
            FailureSignal::failure("boom", None)
        );
    }

    #[test]
    fn malformed_shapes_are_opaque() {
        for value in [
            serde_json::Value::Null,
            serde_json::json!(42),
            serde_json::json!(true),
            serde_json::json!([1, 2]),
            serde_json::json!({}),
            serde_json::json!({"message": 5}),
            serde_json::json!({"msg": "nope"}),
        ] {
            assert_eq!(FailureSignal::from_json(&value), FailureSignal::Opaque);
        }
    }

    #[test]
    fn invalid_json_text_is_an_error() {
        assert!(matches!(
            FailureSignal::from_json_str("{not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn rust_errors_carry_their_source_chain() {
        let err = SubmitFailed(RpcDown);
        assert_eq!(
            FailureSignal::from_error(&err),
            FailureSignal::failure("submit failed", Some("Caused by: rpc unavailable".to_string()))
        );
        assert_eq!(
            FailureSignal::from_error(&RpcDown),
            FailureSignal::failure("rpc unavailable", None)
        );
    }

    #[test]
    fn missing_values_are_opaque() {
        assert_eq!(FailureSignal::from(None::<&str>), FailureSignal::Opaque);
        assert_eq!(
            FailureSignal::from(Some("oops")),
            FailureSignal::Text("oops".to_string())
        );
    }
}
