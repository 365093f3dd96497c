//! Case file schema and loading.
//!
//! A case holds all duty figures and fitting counts in one YAML document;
//! everything is validated eagerly before any number reaches the calculator.

use pf_hydraulics::{FittingSelection, FluidProperties, HydraulicsError, PumpingDuty, VelocityBounds};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

pub type CaseResult<T> = Result<T, CaseError>;

#[derive(Error, Debug)]
pub enum CaseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Hydraulics(#[from] HydraulicsError),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub duty: DutyDef,
    /// Fitting id -> installed count. Counts are unsigned; a negative
    /// count in the YAML fails deserialization.
    #[serde(default)]
    pub fittings: BTreeMap<String, u32>,
    /// Omitted: water defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluid: Option<FluidDef>,
    /// Omitted: the standard 4-6.5 ft/s band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity_bounds: Option<VelocityBoundsDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DutyDef {
    pub flow_m3_per_s: f64,
    pub pipe_length_m: f64,
    pub elevation_head_m: f64,
    pub annual_hours: f64,
    pub electricity_cost_per_kwh: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FluidDef {
    pub density_kg_per_m3: f64,
    pub dynamic_viscosity_pa_s: f64,
    #[serde(default = "default_gravity")]
    pub gravity_m_per_s2: f64,
    pub pump_efficiency: f64,
    pub roughness_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VelocityBoundsDef {
    pub v_min_m_per_s: f64,
    pub v_max_m_per_s: f64,
}

fn default_gravity() -> f64 {
    9.81
}

impl CaseFile {
    pub fn duty(&self) -> PumpingDuty {
        PumpingDuty {
            flow_m3_per_s: self.duty.flow_m3_per_s,
            pipe_length_m: self.duty.pipe_length_m,
            elevation_head_m: self.duty.elevation_head_m,
            annual_hours: self.duty.annual_hours,
            electricity_cost_per_kwh: self.duty.electricity_cost_per_kwh,
        }
    }

    pub fn fluid_properties(&self) -> FluidProperties {
        match &self.fluid {
            Some(fluid) => FluidProperties {
                density_kg_per_m3: fluid.density_kg_per_m3,
                dynamic_viscosity_pa_s: fluid.dynamic_viscosity_pa_s,
                gravity_m_per_s2: fluid.gravity_m_per_s2,
                pump_efficiency: fluid.pump_efficiency,
                roughness_m: fluid.roughness_m,
            },
            None => FluidProperties::water(),
        }
    }

    pub fn velocity_bounds(&self) -> VelocityBounds {
        match &self.velocity_bounds {
            Some(bounds) => VelocityBounds {
                v_min_m_per_s: bounds.v_min_m_per_s,
                v_max_m_per_s: bounds.v_max_m_per_s,
            },
            None => VelocityBounds::standard(),
        }
    }

    pub fn fitting_selection(&self) -> FittingSelection {
        FittingSelection::from(self.fittings.clone())
    }

    /// Parse-level checks passed; now run the hydraulic ones.
    pub fn validate(&self) -> CaseResult<()> {
        self.fluid_properties().validate()?;
        self.velocity_bounds().validate()?;
        self.duty().validate()?;
        Ok(())
    }
}

pub fn load_case(path: &Path) -> CaseResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let case: CaseFile = serde_yaml::from_str(&content)?;
    case.validate()?;
    Ok(case)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "\
duty:
  flow_m3_per_s: 0.05
  pipe_length_m: 100.0
  elevation_head_m: 10.0
  annual_hours: 4000.0
  electricity_cost_per_kwh: 0.15
";

    #[test]
    fn minimal_case_uses_defaults() {
        let case: CaseFile = serde_yaml::from_str(MINIMAL).unwrap();
        case.validate().unwrap();
        assert_eq!(case.fluid_properties(), FluidProperties::water());
        assert_eq!(case.velocity_bounds(), VelocityBounds::standard());
        assert!(case.fitting_selection().is_empty());
    }

    #[test]
    fn fittings_map_round_trips() {
        let yaml = format!("{MINIMAL}fittings:\n  elbow_90: 4\n  gate_valve: 2\n");
        let case: CaseFile = serde_yaml::from_str(&yaml).unwrap();
        let selection = case.fitting_selection();
        assert_eq!(
            selection.iter().collect::<Vec<_>>(),
            vec![("elbow_90", 4), ("gate_valve", 2)]
        );
    }

    #[test]
    fn negative_fitting_count_fails_to_parse() {
        let yaml = format!("{MINIMAL}fittings:\n  elbow_90: -1\n");
        assert!(serde_yaml::from_str::<CaseFile>(&yaml).is_err());
    }

    #[test]
    fn non_numeric_flow_fails_to_parse() {
        let yaml = MINIMAL.replace("0.05", "fast");
        assert!(serde_yaml::from_str::<CaseFile>(&yaml).is_err());
    }

    #[test]
    fn fluid_override_is_honored() {
        let yaml = format!(
            "{MINIMAL}fluid:\n  density_kg_per_m3: 1200.0\n  dynamic_viscosity_pa_s: 0.004\n  pump_efficiency: 0.6\n  roughness_m: 4.5e-5\n"
        );
        let case: CaseFile = serde_yaml::from_str(&yaml).unwrap();
        let props = case.fluid_properties();
        assert_eq!(props.density_kg_per_m3, 1200.0);
        assert_eq!(props.gravity_m_per_s2, 9.81); // default kicks in
        case.validate().unwrap();
    }

    #[test]
    fn checked_in_demo_case_loads_and_evaluates() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../cases/cooling_loop.yaml");
        let case = load_case(&path).unwrap();
        assert_eq!(case.name.as_deref(), Some("cooling loop"));

        let eval = pf_hydraulics::evaluate_duty(
            &case.duty(),
            &case.fluid_properties(),
            &case.velocity_bounds(),
            &case.fitting_selection(),
        )
        .unwrap();
        assert!(eval.high_velocity.annual_cost > eval.low_velocity.annual_cost);
    }

    #[test]
    fn negative_flow_fails_validation_not_parsing() {
        let yaml = MINIMAL.replace("0.05", "-0.05");
        let case: CaseFile = serde_yaml::from_str(&yaml).unwrap();
        assert!(matches!(
            case.validate(),
            Err(CaseError::Hydraulics(HydraulicsError::Domain { .. }))
        ));
    }
}
