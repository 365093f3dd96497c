//! Diameter estimation from flow rate and allowable velocity.

use crate::{HydraulicsError, HydraulicsResult, VelocityBounds};
use pf_core::ensure_finite;
use pf_core::units::{Length, Velocity, m, mps};
use uom::si::length::{meter, millimeter};
use uom::si::velocity::meter_per_second;

/// One of the two candidate designs: a velocity and the pipe diameter that
/// carries the target flow at that velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub velocity: Velocity,
    pub diameter: Length,
}

impl OperatingPoint {
    pub fn velocity_m_per_s(&self) -> f64 {
        self.velocity.get::<meter_per_second>()
    }

    pub fn diameter_m(&self) -> f64 {
        self.diameter.get::<meter>()
    }

    pub fn diameter_mm(&self) -> f64 {
        self.diameter.get::<millimeter>()
    }
}

/// D = sqrt(4Q / (pi V)), from Q = V * (pi D^2 / 4).
pub fn diameter_for_velocity(
    flow_m3_per_s: f64,
    velocity_m_per_s: f64,
) -> HydraulicsResult<f64> {
    ensure_finite(flow_m3_per_s, "flow rate")?;
    ensure_finite(velocity_m_per_s, "velocity")?;

    if flow_m3_per_s <= 0.0 {
        return Err(HydraulicsError::Domain {
            what: "flow rate",
            value: flow_m3_per_s,
        });
    }
    if velocity_m_per_s <= 0.0 {
        return Err(HydraulicsError::Domain {
            what: "velocity",
            value: velocity_m_per_s,
        });
    }

    Ok((4.0 * flow_m3_per_s / (std::f64::consts::PI * velocity_m_per_s)).sqrt())
}

/// The two candidate operating points for a flow rate: the fast/narrow
/// design at `v_max` and the slow/wide design at `v_min`, in that order.
pub fn operating_points(
    flow_m3_per_s: f64,
    bounds: &VelocityBounds,
) -> HydraulicsResult<[OperatingPoint; 2]> {
    bounds.validate()?;

    let d_min = diameter_for_velocity(flow_m3_per_s, bounds.v_max_m_per_s)?;
    let d_max = diameter_for_velocity(flow_m3_per_s, bounds.v_min_m_per_s)?;

    Ok([
        OperatingPoint {
            velocity: mps(bounds.v_max_m_per_s),
            diameter: m(d_min),
        },
        OperatingPoint {
            velocity: mps(bounds.v_min_m_per_s),
            diameter: m(d_max),
        },
    ])
}
