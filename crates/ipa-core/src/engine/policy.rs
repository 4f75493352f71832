use std::fmt;

/// Error returned by a custom unknown-token transform.
pub type TransformError = Box<dyn std::error::Error + Send + Sync>;

/// What to emit for a token that has no dictionary entry.
#[derive(Clone, Copy, Default)]
pub enum UnknownPolicy<'a> {
    /// Emit nothing and report the token to the engine's diagnostic sink.
    #[default]
    Drop,
    /// Emit the token unchanged.
    KeepLiteral,
    /// Emit whatever the callback returns. Its errors abort translation.
    Transform(&'a dyn Fn(&str) -> Result<String, TransformError>),
}

impl fmt::Debug for UnknownPolicy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownPolicy::Drop => f.write_str("Drop"),
            UnknownPolicy::KeepLiteral => f.write_str("KeepLiteral"),
            UnknownPolicy::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("transform failed for token {token:?}: {source}")]
    Transform {
        token: String,
        #[source]
        source: TransformError,
    },
}

/// Wrap an unknown token in brackets, e.g. `xyz` → `[xyz]`.
pub fn bracket_unknown(token: &str) -> Result<String, TransformError> {
    Ok(format!("[{token}]"))
}

pub(crate) fn not_found_message(token: &str) -> String {
    format!("Word '{token}' not found in the IPA dictionary.")
}
