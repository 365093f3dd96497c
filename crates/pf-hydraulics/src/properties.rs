//! Fluid properties and allowable design velocities.
//!
//! Both types are explicit, immutable configuration values: callers build
//! them once (usually from the water defaults) and pass them into the
//! calculator functions. Nothing in this crate reads ambient constants.

use crate::{HydraulicsError, HydraulicsResult};
use pf_core::ensure_finite;

/// Transported fluid plus the physical constants the formula chain needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    /// Density rho [kg/m^3]
    pub density_kg_per_m3: f64,
    /// Dynamic viscosity mu [Pa s]
    pub dynamic_viscosity_pa_s: f64,
    /// Gravitational acceleration g [m/s^2]
    pub gravity_m_per_s2: f64,
    /// Pump efficiency eta, in (0, 1]
    pub pump_efficiency: f64,
    /// Absolute pipe roughness eps [m]
    pub roughness_m: f64,
}

impl FluidProperties {
    /// Water at ambient conditions in commercial steel pipe.
    pub fn water() -> Self {
        Self {
            density_kg_per_m3: 1000.0,
            dynamic_viscosity_pa_s: 1e-3,
            gravity_m_per_s2: 9.81,
            pump_efficiency: 0.75,
            roughness_m: 1.5e-6,
        }
    }

    pub fn validate(&self) -> HydraulicsResult<()> {
        ensure_finite(self.density_kg_per_m3, "fluid density")?;
        ensure_finite(self.dynamic_viscosity_pa_s, "dynamic viscosity")?;
        ensure_finite(self.gravity_m_per_s2, "gravitational acceleration")?;
        ensure_finite(self.pump_efficiency, "pump efficiency")?;
        ensure_finite(self.roughness_m, "pipe roughness")?;

        if self.density_kg_per_m3 <= 0.0 {
            return Err(HydraulicsError::Domain {
                what: "fluid density",
                value: self.density_kg_per_m3,
            });
        }
        if self.dynamic_viscosity_pa_s <= 0.0 {
            return Err(HydraulicsError::Domain {
                what: "dynamic viscosity",
                value: self.dynamic_viscosity_pa_s,
            });
        }
        if self.gravity_m_per_s2 <= 0.0 {
            return Err(HydraulicsError::Domain {
                what: "gravitational acceleration",
                value: self.gravity_m_per_s2,
            });
        }
        if self.pump_efficiency <= 0.0 || self.pump_efficiency > 1.0 {
            return Err(HydraulicsError::InvalidInput {
                what: "pump efficiency must be in (0, 1]",
            });
        }
        if self.roughness_m < 0.0 {
            return Err(HydraulicsError::InvalidInput {
                what: "pipe roughness must be non-negative",
            });
        }
        Ok(())
    }
}

/// Allowable design velocity band [m/s]. The estimator sizes one pipe at
/// each end of the band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityBounds {
    pub v_min_m_per_s: f64,
    pub v_max_m_per_s: f64,
}

impl VelocityBounds {
    /// Conventional water-service band: 4 to 6.5 ft/s.
    pub fn standard() -> Self {
        Self {
            v_min_m_per_s: 4.0 * 0.3048,
            v_max_m_per_s: 6.5 * 0.3048,
        }
    }

    pub fn validate(&self) -> HydraulicsResult<()> {
        ensure_finite(self.v_min_m_per_s, "minimum velocity")?;
        ensure_finite(self.v_max_m_per_s, "maximum velocity")?;

        if self.v_min_m_per_s <= 0.0 {
            return Err(HydraulicsError::Domain {
                what: "minimum velocity",
                value: self.v_min_m_per_s,
            });
        }
        if self.v_max_m_per_s <= self.v_min_m_per_s {
            return Err(HydraulicsError::InvalidInput {
                what: "maximum velocity must exceed minimum velocity",
            });
        }
        Ok(())
    }
}
