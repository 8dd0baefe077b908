use crate::VisualError;

/// Outcome of a derivation that must never fail past its boundary.
///
/// `Degraded` still carries a usable value (an empty list, zeroed
/// coordinates) together with the reason the real value could not be built.
#[derive(Debug, Clone, PartialEq)]
pub enum Derived<T> {
    Ok(T),
    Degraded { value: T, reason: VisualError },
}

impl<T> Derived<T> {
    /// Wrap a checked result, substituting `fallback()` on error.
    pub fn from_result(result: Result<T, VisualError>, fallback: impl FnOnce() -> T) -> Self {
        match result {
            Ok(value) => Derived::Ok(value),
            Err(reason) => Derived::Degraded {
                value: fallback(),
                reason,
            },
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Derived::Ok(value) | Derived::Degraded { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Derived::Ok(value) | Derived::Degraded { value, .. } => value,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Derived::Degraded { .. })
    }

    pub fn reason(&self) -> Option<&VisualError> {
        match self {
            Derived::Ok(_) => None,
            Derived::Degraded { reason, .. } => Some(reason),
        }
    }
}

impl<T: Default> Derived<T> {
    pub fn or_default(result: Result<T, VisualError>) -> Self {
        Self::from_result(result, T::default)
    }
}
