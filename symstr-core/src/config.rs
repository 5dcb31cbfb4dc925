//! Session configuration.

/// Configuration for a [`Session`](crate::session::Session).
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Evaluate operations on concrete operands on the host instead of
    /// building nodes
    pub fold_constants: bool,
    /// Name prefix for anonymous variables
    pub fresh_prefix: String,
    /// Number of node slots reserved up front
    pub initial_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fold_constants: true,
            fresh_prefix: "s".to_string(),
            initial_capacity: 256,
        }
    }
}

impl SessionConfig {
    /// Configuration that never folds, so every lifted operation builds a node.
    #[must_use]
    pub fn symbolic_only() -> Self {
        Self {
            fold_constants: false,
            ..Self::default()
        }
    }
}
