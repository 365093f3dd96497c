//! Scenario evaluation: total head, pump power and annual energy cost for
//! each of the two candidate operating points.

use crate::{
    FittingSelection, FluidProperties, HydraulicsError, HydraulicsResult, LossBreakdown,
    OperatingPoint, VelocityBounds, compute_losses, operating_points,
};
use pf_core::ensure_finite;
use pf_core::units::{Length, Power, VolumeRate, kw, m, m3ps};
use uom::si::length::meter;
use uom::si::power::kilowatt;

/// What the pump has to do, independent of which pipe diameter is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PumpingDuty {
    /// Volumetric flow rate Q [m^3/s]
    pub flow_m3_per_s: f64,
    /// Pipe length L [m]
    pub pipe_length_m: f64,
    /// Elevation head Z [m]; negative means a net drop
    pub elevation_head_m: f64,
    /// Operating hours per year
    pub annual_hours: f64,
    /// Electricity price per kWh, in whatever currency the caller uses
    pub electricity_cost_per_kwh: f64,
}

impl PumpingDuty {
    pub fn flow(&self) -> VolumeRate {
        m3ps(self.flow_m3_per_s)
    }

    /// Fail fast: every field checked before any scenario computes.
    pub fn validate(&self) -> HydraulicsResult<()> {
        ensure_finite(self.flow_m3_per_s, "flow rate")?;
        ensure_finite(self.pipe_length_m, "pipe length")?;
        ensure_finite(self.elevation_head_m, "elevation head")?;
        ensure_finite(self.annual_hours, "annual hours")?;
        ensure_finite(self.electricity_cost_per_kwh, "electricity cost")?;

        if self.flow_m3_per_s <= 0.0 {
            return Err(HydraulicsError::Domain {
                what: "flow rate",
                value: self.flow_m3_per_s,
            });
        }
        if self.pipe_length_m < 0.0 {
            return Err(HydraulicsError::InvalidInput {
                what: "pipe length must be non-negative",
            });
        }
        if self.annual_hours < 0.0 {
            return Err(HydraulicsError::InvalidInput {
                what: "annual hours must be non-negative",
            });
        }
        if self.electricity_cost_per_kwh < 0.0 {
            return Err(HydraulicsError::InvalidInput {
                what: "electricity cost must be non-negative",
            });
        }
        Ok(())
    }
}

/// Everything derived for one operating point. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioResult {
    pub point: OperatingPoint,
    pub losses: LossBreakdown,
    /// H = h_f + h_m + Z, unclamped
    pub total_head: Length,
    /// Electrical input power: hydraulic power divided by pump efficiency
    pub pump_power: Power,
    pub annual_energy_kwh: f64,
    pub annual_cost: f64,
}

impl ScenarioResult {
    pub fn total_head_m(&self) -> f64 {
        self.total_head.get::<meter>()
    }

    pub fn pump_power_kw(&self) -> f64 {
        self.pump_power.get::<kilowatt>()
    }
}

/// Both candidate designs for one duty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DutyEvaluation {
    /// Sized at v_max: smallest allowable pipe
    pub high_velocity: ScenarioResult,
    /// Sized at v_min: largest allowable pipe
    pub low_velocity: ScenarioResult,
}

/// Pure per-point evaluation; both scenarios share the inputs but no state.
pub fn evaluate_operating_point(
    duty: &PumpingDuty,
    props: &FluidProperties,
    selection: &FittingSelection,
    point: &OperatingPoint,
) -> HydraulicsResult<ScenarioResult> {
    let losses = compute_losses(
        props,
        selection,
        point.velocity_m_per_s(),
        point.diameter_m(),
        duty.pipe_length_m,
    )?;

    let total_head_m = losses.major_loss_m() + losses.minor_loss_m() + duty.elevation_head_m;
    let pump_power_kw = props.density_kg_per_m3
        * props.gravity_m_per_s2
        * duty.flow_m3_per_s
        * total_head_m
        / (props.pump_efficiency * 1000.0);
    let annual_energy_kwh = pump_power_kw * duty.annual_hours;
    let annual_cost = annual_energy_kwh * duty.electricity_cost_per_kwh;

    ensure_finite(total_head_m, "total head")?;
    ensure_finite(pump_power_kw, "pump power")?;

    Ok(ScenarioResult {
        point: *point,
        losses,
        total_head: m(total_head_m),
        pump_power: kw(pump_power_kw),
        annual_energy_kwh,
        annual_cost,
    })
}

/// Validate everything, size both pipes, evaluate both scenarios.
///
/// All-or-nothing: any invalid input fails before the first scenario runs.
pub fn evaluate_duty(
    duty: &PumpingDuty,
    props: &FluidProperties,
    bounds: &VelocityBounds,
    selection: &FittingSelection,
) -> HydraulicsResult<DutyEvaluation> {
    props.validate()?;
    bounds.validate()?;
    duty.validate()?;

    let [fast, slow] = operating_points(duty.flow_m3_per_s, bounds)?;

    Ok(DutyEvaluation {
        high_velocity: evaluate_operating_point(duty, props, selection, &fast)?,
        low_velocity: evaluate_operating_point(duty, props, selection, &slow)?,
    })
}
