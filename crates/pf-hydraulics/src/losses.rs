//! Reynolds number, friction factor and head losses for one operating point.

use crate::{FittingSelection, FluidProperties, HydraulicsError, HydraulicsResult, fittings};
use pf_core::ensure_finite;
use pf_core::units::{Length, m};
use uom::si::length::meter;

/// Laminar below this, turbulent from here up (boundary inclusive on the
/// turbulent side).
pub const LAMINAR_RE_LIMIT: f64 = 2000.0;

/// Friction and fitting losses at one velocity/diameter pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossBreakdown {
    pub reynolds: f64,
    pub friction_factor: f64,
    /// Pipe-wall (Darcy-Weisbach) loss
    pub major_loss: Length,
    /// Fitting loss from summed K coefficients
    pub minor_loss: Length,
}

impl LossBreakdown {
    pub fn major_loss_m(&self) -> f64 {
        self.major_loss.get::<meter>()
    }

    pub fn minor_loss_m(&self) -> f64 {
        self.minor_loss.get::<meter>()
    }
}

/// Re = rho V D / mu.
pub fn reynolds_number(
    props: &FluidProperties,
    velocity_m_per_s: f64,
    diameter_m: f64,
) -> HydraulicsResult<f64> {
    if velocity_m_per_s <= 0.0 {
        return Err(HydraulicsError::Domain {
            what: "velocity",
            value: velocity_m_per_s,
        });
    }
    if diameter_m <= 0.0 {
        return Err(HydraulicsError::Domain {
            what: "diameter",
            value: diameter_m,
        });
    }

    Ok(props.density_kg_per_m3 * velocity_m_per_s * diameter_m / props.dynamic_viscosity_pa_s)
}

/// Darcy friction factor.
///
/// Laminar (Re < 2000): 64/Re from Hagen-Poiseuille. Otherwise the explicit
/// closed-form correlation f = 0.001375 (1 + (20000 eps/D + 1e6/Re)^(1/3)).
/// No Colebrook iteration; the correlation trades a little accuracy for a
/// single evaluation.
pub fn friction_factor(reynolds: f64, relative_roughness: f64) -> HydraulicsResult<f64> {
    ensure_finite(reynolds, "Reynolds number")?;
    ensure_finite(relative_roughness, "relative roughness")?;

    if reynolds <= 0.0 {
        return Err(HydraulicsError::Domain {
            what: "Reynolds number",
            value: reynolds,
        });
    }
    if relative_roughness < 0.0 {
        return Err(HydraulicsError::InvalidInput {
            what: "relative roughness must be non-negative",
        });
    }

    if reynolds < LAMINAR_RE_LIMIT {
        Ok(64.0 / reynolds)
    } else {
        Ok(0.001375 * (1.0 + (20_000.0 * relative_roughness + 1e6 / reynolds).cbrt()))
    }
}

/// Darcy-Weisbach: h_f = f (L/D) V^2 / (2g).
pub fn major_loss_m(
    friction_factor: f64,
    pipe_length_m: f64,
    diameter_m: f64,
    velocity_m_per_s: f64,
    gravity_m_per_s2: f64,
) -> f64 {
    friction_factor
        * (pipe_length_m / diameter_m)
        * velocity_head_m(velocity_m_per_s, gravity_m_per_s2)
}

/// h_m = sum(count * K * V^2 / (2g)). Names missing from the catalog
/// contribute K = 0.
pub fn minor_loss_m(
    selection: &FittingSelection,
    velocity_m_per_s: f64,
    gravity_m_per_s2: f64,
) -> f64 {
    let velocity_head = velocity_head_m(velocity_m_per_s, gravity_m_per_s2);
    selection
        .iter()
        .map(|(name, count)| {
            let k = fittings::resistance_coefficient(name).unwrap_or(0.0);
            f64::from(count) * k * velocity_head
        })
        .sum()
}

fn velocity_head_m(velocity_m_per_s: f64, gravity_m_per_s2: f64) -> f64 {
    velocity_m_per_s * velocity_m_per_s / (2.0 * gravity_m_per_s2)
}

/// Full loss chain for one operating point.
pub fn compute_losses(
    props: &FluidProperties,
    selection: &FittingSelection,
    velocity_m_per_s: f64,
    diameter_m: f64,
    pipe_length_m: f64,
) -> HydraulicsResult<LossBreakdown> {
    if pipe_length_m < 0.0 {
        return Err(HydraulicsError::InvalidInput {
            what: "pipe length must be non-negative",
        });
    }

    let reynolds = reynolds_number(props, velocity_m_per_s, diameter_m)?;
    let friction = friction_factor(reynolds, props.roughness_m / diameter_m)?;
    let h_major = major_loss_m(
        friction,
        pipe_length_m,
        diameter_m,
        velocity_m_per_s,
        props.gravity_m_per_s2,
    );
    let h_minor = minor_loss_m(selection, velocity_m_per_s, props.gravity_m_per_s2);

    ensure_finite(h_major, "major loss")?;
    ensure_finite(h_minor, "minor loss")?;

    Ok(LossBreakdown {
        reynolds,
        friction_factor: friction,
        major_loss: m(h_major),
        minor_loss: m(h_minor),
    })
}
