//! Economic impact computations: cost breakdown and residual value decay.
//!
//! Every function here is pure. Inputs are passed by value, nothing is
//! cached, and the only shared data is the static vintage profile table, so
//! evaluations can run from any number of threads without coordination.

pub mod cost;
pub mod residual;

pub use cost::compute_costs;
pub use residual::{
    residual_loss, residual_loss_curve, ResidualLossCurve, ResidualLossPoints, ResidualPoint,
};
