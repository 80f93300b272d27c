//! Boundary token generation for multipart bodies.

/// Source of multipart boundary tokens.
///
/// A fresh token is requested for every encode call. Implementations must be
/// safe to call from several threads at once.
///
/// Closures returning a `String` are generators too:
///
/// ```
/// use satchel_core::BoundaryGenerator;
///
/// let generator = || "fixed".to_string();
/// assert_eq!(generator.generate(), "fixed");
/// ```
pub trait BoundaryGenerator: Send + Sync {
    /// Produce a boundary token.
    fn generate(&self) -> String;
}

impl<F> BoundaryGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}

/// Default generator: `Boundary-` followed by a random v4 UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidBoundary;

impl BoundaryGenerator for UuidBoundary {
    fn generate(&self) -> String {
        format!("Boundary-{}", uuid::Uuid::new_v4())
    }
}

/// Generator that always returns the same token.
///
/// Useful in tests that compare exact byte output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBoundary(String);

impl FixedBoundary {
    /// Create a generator that always yields `boundary`.
    #[must_use]
    pub fn new(boundary: impl Into<String>) -> Self {
        Self(boundary.into())
    }
}

impl BoundaryGenerator for FixedBoundary {
    fn generate(&self) -> String {
        self.0.clone()
    }
}
