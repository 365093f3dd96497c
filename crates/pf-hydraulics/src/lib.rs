//! pf-hydraulics: pipe sizing and pumping-cost calculations for pipeflow.
//!
//! Provides:
//! - Fluid properties and allowable velocity bounds as explicit config values
//! - A catalog of standard fittings with resistance coefficients
//! - Diameter estimation from flow rate and design velocity
//! - The loss chain: Reynolds number -> friction factor -> major/minor loss
//! - Scenario evaluation: total head, pump power, annual energy cost
//!
//! # Example
//!
//! ```
//! use pf_hydraulics::{
//!     FittingSelection, FluidProperties, PumpingDuty, VelocityBounds, evaluate_duty,
//! };
//!
//! let duty = PumpingDuty {
//!     flow_m3_per_s: 0.05,
//!     pipe_length_m: 100.0,
//!     elevation_head_m: 10.0,
//!     annual_hours: 4000.0,
//!     electricity_cost_per_kwh: 0.15,
//! };
//! let selection = FittingSelection::from([("elbow_90", 4), ("gate_valve", 2)]);
//!
//! let eval = evaluate_duty(
//!     &duty,
//!     &FluidProperties::water(),
//!     &VelocityBounds::standard(),
//!     &selection,
//! )
//! .unwrap();
//!
//! assert!(eval.high_velocity.point.diameter_m() < eval.low_velocity.point.diameter_m());
//! ```

pub mod error;
pub mod fittings;
pub mod losses;
pub mod properties;
pub mod scenario;
pub mod sizing;

// Re-exports for ergonomics
pub use error::{HydraulicsError, HydraulicsResult};
pub use fittings::{FittingEntry, FittingSelection, fitting_catalog, resistance_coefficient};
pub use losses::{
    LAMINAR_RE_LIMIT, LossBreakdown, compute_losses, friction_factor, major_loss_m, minor_loss_m,
    reynolds_number,
};
pub use properties::{FluidProperties, VelocityBounds};
pub use scenario::{
    DutyEvaluation, PumpingDuty, ScenarioResult, evaluate_duty, evaluate_operating_point,
};
pub use sizing::{OperatingPoint, diameter_for_velocity, operating_points};
