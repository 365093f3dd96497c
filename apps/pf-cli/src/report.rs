//! Report rendering with the project's fixed precision conventions:
//! diameters 4 dp (m) / 1 dp (mm), heads and power 3 dp, cost 2 dp.

use pf_hydraulics::{DutyEvaluation, ScenarioResult};
use serde::Serialize;
use std::fmt::Write;

/// Flat, machine-readable view of one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub velocity_m_per_s: f64,
    pub diameter_m: f64,
    pub diameter_mm: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub major_loss_m: f64,
    pub minor_loss_m: f64,
    pub total_head_m: f64,
    pub pump_power_kw: f64,
    pub annual_energy_kwh: f64,
    pub annual_cost: f64,
}

impl From<&ScenarioResult> for ScenarioReport {
    fn from(result: &ScenarioResult) -> Self {
        Self {
            velocity_m_per_s: result.point.velocity_m_per_s(),
            diameter_m: result.point.diameter_m(),
            diameter_mm: result.point.diameter_mm(),
            reynolds: result.losses.reynolds,
            friction_factor: result.losses.friction_factor,
            major_loss_m: result.losses.major_loss_m(),
            minor_loss_m: result.losses.minor_loss_m(),
            total_head_m: result.total_head_m(),
            pump_power_kw: result.pump_power_kw(),
            annual_energy_kwh: result.annual_energy_kwh,
            annual_cost: result.annual_cost,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sized at v_max (smallest pipe)
    pub high_velocity: ScenarioReport,
    /// Sized at v_min (largest pipe)
    pub low_velocity: ScenarioReport,
}

impl CaseReport {
    pub fn new(name: Option<String>, eval: &DutyEvaluation) -> Self {
        Self {
            name,
            high_velocity: ScenarioReport::from(&eval.high_velocity),
            low_velocity: ScenarioReport::from(&eval.low_velocity),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str("=========== RESULTS ===========\n");
        if let Some(name) = &self.name {
            let _ = writeln!(out, "Case: {name}");
        }
        let _ = writeln!(
            out,
            "Dmin at Vmax: {:.4} m ({:.1} mm)",
            self.high_velocity.diameter_m, self.high_velocity.diameter_mm
        );
        let _ = writeln!(
            out,
            "Dmax at Vmin: {:.4} m ({:.1} mm)",
            self.low_velocity.diameter_m, self.low_velocity.diameter_mm
        );

        render_scenario(&mut out, "Case 1: Vmax and Dmin", &self.high_velocity);
        render_scenario(&mut out, "Case 2: Vmin and Dmax", &self.low_velocity);
        out.push_str("================================\n");
        out
    }
}

fn render_scenario(out: &mut String, title: &str, scenario: &ScenarioReport) {
    out.push_str("--------------------------------\n");
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "Velocity:      {:.4} m/s", scenario.velocity_m_per_s);
    let _ = writeln!(out, "Reynolds:      {:.0}", scenario.reynolds);
    let _ = writeln!(out, "Friction f:    {:.6}", scenario.friction_factor);
    let _ = writeln!(out, "Major loss:    {:.3} m", scenario.major_loss_m);
    let _ = writeln!(out, "Minor loss:    {:.3} m", scenario.minor_loss_m);
    let _ = writeln!(out, "Total Head:    {:.3} m", scenario.total_head_m);
    let _ = writeln!(out, "Pump Power:    {:.3} kW", scenario.pump_power_kw);
    let _ = writeln!(out, "Annual Energy: {:.1} kWh", scenario.annual_energy_kwh);
    let _ = writeln!(out, "Annual Cost:   {:.2}", scenario.annual_cost);
}
