//! Closed enums for workflow and classification values, with display labels.
//!
//! Responsibilities:
//! - Define the wire value (`as_str`) and the human label (`label`) for every
//!   status, event type, problem type, severity and animal type.
//! - Provide parsing from wire values for command-line and filter input.
//!
//! Does NOT handle:
//! - Transition rules. Any status may be set from any other status.
//!
//! Invariants:
//! - Labels are owned here. Server-provided `*_display` fields are never read.

use std::fmt;

/// Shared behavior of the closed value enums.
pub trait Labeled: Copy + Eq + 'static {
    /// Every variant in declaration order.
    const ALL: &'static [Self];

    /// Value as sent to and received from the backend.
    fn as_str(&self) -> &'static str;

    /// Human-readable label.
    fn label(&self) -> &'static str;

    /// Parse a wire value, case-insensitively.
    fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(value))
    }

    /// Next variant after `current`, wrapping to `None` after the last one.
    ///
    /// Used to cycle a filter through "any" and every value.
    fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Self::ALL.first().copied(),
            Some(v) => {
                let idx = Self::ALL.iter().position(|x| *x == v)?;
                Self::ALL.get(idx + 1).copied()
            }
        }
    }
}

macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($wire:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl Labeled for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as Labeled>::parse(s).ok_or_else(|| {
                    let allowed: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                    format!("invalid value '{s}', expected one of: {}", allowed.join(", "))
                })
            }
        }
    };
}

labeled_enum! {
    /// Workflow status shared by events and crop issues.
    RecordStatus {
        New => ("new", "New"),
        InProgress => ("in_progress", "In Progress"),
        Resolved => ("resolved", "Resolved"),
    }
}

labeled_enum! {
    /// Kind of veterinary event.
    EventType {
        VetVisit => ("vet_visit", "Vet Visit"),
        Vaccination => ("vaccination", "Vaccination"),
        DiseaseReport => ("disease_report", "Disease Report"),
        Mortality => ("mortality", "Mortality"),
    }
}

impl EventType {
    /// Only disease reports and mortality events carry an editable workflow.
    pub fn is_status_editable(&self) -> bool {
        matches!(self, Self::DiseaseReport | Self::Mortality)
    }
}

labeled_enum! {
    /// Category of a crop issue.
    ProblemType {
        Pest => ("pest", "Pest"),
        Disease => ("disease", "Disease"),
        NutrientDeficiency => ("nutrient_deficiency", "Nutrient Deficiency"),
        WaterStress => ("water_stress", "Water Stress"),
        Weed => ("weed", "Weed"),
        Other => ("other", "Other"),
    }
}

labeled_enum! {
    /// Severity of a crop issue.
    Severity {
        Low => ("low", "Low"),
        Medium => ("medium", "Medium"),
        High => ("high", "High"),
    }
}

/// Species kept in a herd. Unknown species from the backend map to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimalType {
    Cattle,
    Sheep,
    Goat,
    Horse,
    Poultry,
    #[serde(other)]
    Other,
}

impl Labeled for AnimalType {
    const ALL: &'static [Self] = &[
        Self::Cattle,
        Self::Sheep,
        Self::Goat,
        Self::Horse,
        Self::Poultry,
        Self::Other,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Cattle => "cattle",
            Self::Sheep => "sheep",
            Self::Goat => "goat",
            Self::Horse => "horse",
            Self::Poultry => "poultry",
            Self::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Cattle => "Cattle",
            Self::Sheep => "Sheep",
            Self::Goat => "Goat",
            Self::Horse => "Horse",
            Self::Poultry => "Poultry",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for AnimalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
