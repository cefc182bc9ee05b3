use serde::{Deserialize, Serialize};

/// Numeric policy for the kernel.
///
/// Callers that need a different singularity threshold or output precision
/// pass their own config to [`crate::kernel::divide_with`]; everything else
/// uses [`KernelConfig::default`].
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Pivot magnitudes below this value abort inversion as singular.
    pub pivot_epsilon: f32,
    /// Number of decimal digits kept in division output.
    pub round_decimals: i32,
}

impl Default for KernelConfig {
    fn default() -> Self {
        KernelConfig {
            pivot_epsilon: 1e-8,
            round_decimals: 2,
        }
    }
}
