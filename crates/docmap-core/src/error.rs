use thiserror::Error as ThisError;

///
/// MappingError
///
/// Structured failures raised while compiling a model into a mapping.
/// Errors raised beneath a field are wrapped in `Context` carrying the dotted
/// path of that field through every enclosing model.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MappingError {
    #[error("unsupported type '{declared}'")]
    UnsupportedType { declared: String },

    #[error("unsupported shape: {reason}")]
    UnsupportedShape { reason: String },

    #[error("invalid attribute '{key}': {reason}")]
    InvalidAttribute { key: String, reason: String },

    #[error("duplicate field '{field}'")]
    DuplicateField { field: String },

    #[error("model '{model}' contains itself")]
    RecursiveModel { model: String },

    #[error("nesting depth exceeds limit of {limit}")]
    DepthExceeded { limit: usize },

    #[error("mapped field count exceeds limit of {limit}")]
    FieldLimitExceeded { limit: usize },

    #[error("mapping failed at {path}: {source}")]
    Context {
        path: String,
        #[source]
        source: Box<Self>,
    },
}

impl MappingError {
    pub(crate) fn unsupported_type(declared: impl ToString) -> Self {
        Self::UnsupportedType {
            declared: declared.to_string(),
        }
    }

    pub(crate) fn unsupported_shape(reason: impl Into<String>) -> Self {
        Self::UnsupportedShape {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_attribute(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Prepend a field segment to the error path.
    #[must_use]
    pub fn with_field(self, field: impl AsRef<str>) -> Self {
        let segment = field.as_ref();
        match self {
            Self::Context { path, source } => Self::Context {
                path: format!("{segment}.{path}"),
                source,
            },
            source => Self::Context {
                path: segment.to_string(),
                source: Box::new(source),
            },
        }
    }

    /// Return the full dotted field path, if available.
    #[must_use]
    pub const fn path(&self) -> Option<&str> {
        match self {
            Self::Context { path, .. } => Some(path.as_str()),
            _ => None,
        }
    }

    /// Return the innermost, non-context error variant.
    #[must_use]
    pub fn leaf(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.leaf(),
            _ => self,
        }
    }
}
