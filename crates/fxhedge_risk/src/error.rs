//! Risk layer error types.

use thiserror::Error;

/// Risk metric configuration errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RiskError {
    /// Loss-mode string did not match any known transform.
    #[error(
        "Unknown loss mode \"{got}\"; valid options: \
         npv_shortfall, irr_shortfall, moic_shortfall, none"
    )]
    UnknownLossMode {
        /// The unrecognised input
        got: String,
    },
}
