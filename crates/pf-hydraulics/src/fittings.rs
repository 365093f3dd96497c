//! Fitting catalog and per-case fitting selection.
//!
//! K values are the dimensionless resistance coefficients of standard
//! screwed fittings. Lookup is permissive: a name not in the catalog
//! contributes zero loss rather than failing. That mirrors the behavior
//! field users rely on today; see DESIGN.md for the open question.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittingEntry {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Resistance coefficient K [-]
    pub k: f64,
}

const FITTING_CATALOG: [FittingEntry; 11] = [
    FittingEntry {
        id: "globe_valve",
        display_name: "Globe valve (fully open)",
        k: 6.3,
    },
    FittingEntry {
        id: "angle_valve",
        display_name: "Angle valve (fully open)",
        k: 3.0,
    },
    FittingEntry {
        id: "gate_valve",
        display_name: "Gate valve (fully open)",
        k: 0.13,
    },
    FittingEntry {
        id: "check_valve",
        display_name: "Swing check valve",
        k: 2.0,
    },
    FittingEntry {
        id: "elbow_90",
        display_name: "90 deg standard elbow",
        k: 0.74,
    },
    FittingEntry {
        id: "elbow_45",
        display_name: "45 deg standard elbow",
        k: 0.30,
    },
    FittingEntry {
        id: "long_radius_elbow",
        display_name: "90 deg long-radius elbow",
        k: 0.46,
    },
    FittingEntry {
        id: "tee_run",
        display_name: "Tee (flow through run)",
        k: 0.40,
    },
    FittingEntry {
        id: "tee_branch",
        display_name: "Tee (flow through branch)",
        k: 1.30,
    },
    FittingEntry {
        id: "coupling",
        display_name: "Coupling",
        k: 0.04,
    },
    FittingEntry {
        id: "union",
        display_name: "Union",
        k: 0.04,
    },
];

pub fn fitting_catalog() -> &'static [FittingEntry] {
    &FITTING_CATALOG
}

/// K for a catalog id, `None` for unknown names.
pub fn resistance_coefficient(id: &str) -> Option<f64> {
    FITTING_CATALOG
        .iter()
        .find(|entry| entry.id == id)
        .map(|entry| entry.k)
}

/// User-selected fittings: name -> installed count.
///
/// Ordered map so iteration (and therefore reporting) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FittingSelection {
    counts: BTreeMap<String, u32>,
}

impl FittingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, count: u32) {
        self.counts.insert(name.into(), count);
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(name, &count)| (name.as_str(), count))
    }
}

impl From<BTreeMap<String, u32>> for FittingSelection {
    fn from(counts: BTreeMap<String, u32>) -> Self {
        Self { counts }
    }
}

impl<const N: usize> From<[(&str, u32); N]> for FittingSelection {
    fn from(pairs: [(&str, u32); N]) -> Self {
        let mut selection = Self::new();
        for (name, count) in pairs {
            selection.set(name, count);
        }
        selection
    }
}
