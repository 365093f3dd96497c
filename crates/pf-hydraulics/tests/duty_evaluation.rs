//! End-to-end checks against a hand-computed reference case.
//!
//! Q = 0.05 m^3/s, L = 100 m, Z = 10 m, 4000 h/yr at 0.15 per kWh,
//! four 90 deg elbows and two gate valves, water in steel pipe.

use pf_core::numeric::{Tolerances, nearly_equal};
use pf_hydraulics::{
    FittingSelection, FluidProperties, HydraulicsError, PumpingDuty, VelocityBounds, evaluate_duty,
};

const TOL: Tolerances = Tolerances {
    abs: 1e-9,
    rel: 1e-3,
};

fn reference_duty() -> PumpingDuty {
    PumpingDuty {
        flow_m3_per_s: 0.05,
        pipe_length_m: 100.0,
        elevation_head_m: 10.0,
        annual_hours: 4000.0,
        electricity_cost_per_kwh: 0.15,
    }
}

fn reference_selection() -> FittingSelection {
    FittingSelection::from([("elbow_90", 4), ("gate_valve", 2)])
}

#[test]
fn reference_case_matches_hand_calculation() {
    let eval = evaluate_duty(
        &reference_duty(),
        &FluidProperties::water(),
        &VelocityBounds::standard(),
        &reference_selection(),
    )
    .unwrap();

    let fast = &eval.high_velocity;
    assert!(nearly_equal(fast.point.velocity_m_per_s(), 1.9812, TOL));
    assert!(nearly_equal(fast.point.diameter_m(), 0.179_257, TOL));
    assert!(nearly_equal(fast.losses.reynolds, 355_143.8, TOL));
    assert!(nearly_equal(fast.losses.friction_factor, 0.003_354_4, TOL));
    assert!(nearly_equal(fast.losses.major_loss_m(), 0.374_362, TOL));
    assert!(nearly_equal(fast.losses.minor_loss_m(), 0.644_189, TOL));
    assert!(nearly_equal(fast.total_head_m(), 11.018_552, TOL));
    assert!(nearly_equal(fast.pump_power_kw(), 7.206_133, TOL));
    assert!(nearly_equal(fast.annual_energy_kwh, 28_824.53, TOL));
    assert!(nearly_equal(fast.annual_cost, 4_323.68, TOL));

    let slow = &eval.low_velocity;
    assert!(nearly_equal(slow.point.velocity_m_per_s(), 1.2192, TOL));
    assert!(nearly_equal(slow.point.diameter_m(), 0.228_509, TOL));
    assert!(nearly_equal(slow.losses.reynolds, 278_597.7, TOL));
    assert!(nearly_equal(slow.losses.friction_factor, 0.003_505_6, TOL));
    assert!(nearly_equal(slow.total_head_m(), 10.360_183, TOL));
    assert!(nearly_equal(slow.pump_power_kw(), 6.775_560, TOL));
    assert!(nearly_equal(slow.annual_cost, 4_065.34, TOL));
}

#[test]
fn wider_pipe_costs_less_to_run() {
    let eval = evaluate_duty(
        &reference_duty(),
        &FluidProperties::water(),
        &VelocityBounds::standard(),
        &reference_selection(),
    )
    .unwrap();

    assert!(eval.low_velocity.total_head_m() < eval.high_velocity.total_head_m());
    assert!(eval.low_velocity.annual_cost < eval.high_velocity.annual_cost);
}

#[test]
fn unknown_fittings_are_ignored_end_to_end() {
    let mut selection = reference_selection();
    selection.set("globe_vlave", 5); // typo on purpose

    let with_typo = evaluate_duty(
        &reference_duty(),
        &FluidProperties::water(),
        &VelocityBounds::standard(),
        &selection,
    )
    .unwrap();
    let without = evaluate_duty(
        &reference_duty(),
        &FluidProperties::water(),
        &VelocityBounds::standard(),
        &reference_selection(),
    )
    .unwrap();

    assert_eq!(
        with_typo.high_velocity.losses.minor_loss_m(),
        without.high_velocity.losses.minor_loss_m()
    );
}

#[test]
fn zero_flow_aborts_before_any_scenario() {
    let mut duty = reference_duty();
    duty.flow_m3_per_s = 0.0;

    let err = evaluate_duty(
        &duty,
        &FluidProperties::water(),
        &VelocityBounds::standard(),
        &reference_selection(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        HydraulicsError::Domain { what: "flow rate", .. }
    ));
}

#[test]
fn substituted_fluid_changes_the_answer() {
    // Same duty with a heavier, more viscous fluid: higher Re denominator,
    // more power for the same head.
    let brine = FluidProperties {
        density_kg_per_m3: 1200.0,
        dynamic_viscosity_pa_s: 4e-3,
        ..FluidProperties::water()
    };

    let water = evaluate_duty(
        &reference_duty(),
        &FluidProperties::water(),
        &VelocityBounds::standard(),
        &reference_selection(),
    )
    .unwrap();
    let heavy = evaluate_duty(
        &reference_duty(),
        &brine,
        &VelocityBounds::standard(),
        &reference_selection(),
    )
    .unwrap();

    assert!(heavy.high_velocity.losses.reynolds < water.high_velocity.losses.reynolds);
    assert!(heavy.high_velocity.pump_power_kw() > water.high_velocity.pump_power_kw());
}
