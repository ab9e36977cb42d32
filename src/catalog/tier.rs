use crate::foundation::core::Hsl;

/// One of the four fixed categories that partition the catalog for layout and theming.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Sub-atomic micro-kernels.
    Quantum,
    /// Exp-field parallel atoms.
    Gpu,
    /// Log-conversion linear atoms.
    Cpu,
    /// Emergent meta patterns.
    Meta,
}

impl Tier {
    /// Canonical processing order for layout and sidebar listing.
    pub const ALL: [Tier; 4] = [Tier::Quantum, Tier::Gpu, Tier::Cpu, Tier::Meta];

    /// Position of this tier in [`Tier::ALL`].
    pub fn index(self) -> usize {
        match self {
            Tier::Quantum => 0,
            Tier::Gpu => 1,
            Tier::Cpu => 2,
            Tier::Meta => 3,
        }
    }

    /// Stable lowercase identifier (matches the serialized form).
    pub fn key(self) -> &'static str {
        match self {
            Tier::Quantum => "quantum",
            Tier::Gpu => "gpu",
            Tier::Cpu => "cpu",
            Tier::Meta => "meta",
        }
    }

    /// Canvas label drawn above the tier's grid.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Quantum => "⟨ Quantum Tier ⟩",
            Tier::Gpu => "⟨ GPU Exp-Field ⟩",
            Tier::Cpu => "⟨ CPU Log-Conv ⟩",
            Tier::Meta => "⟨ Emergent Meta ⟩",
        }
    }

    /// Short label used in the detail panel.
    pub fn short_label(self) -> &'static str {
        match self {
            Tier::Quantum => "Quantum Tier",
            Tier::Gpu => "GPU Exp-Field",
            Tier::Cpu => "CPU Log-Conv",
            Tier::Meta => "Emergent Meta",
        }
    }

    /// Sidebar description.
    pub fn description(self) -> &'static str {
        match self {
            Tier::Quantum => "Sub-atomic micro-kernels",
            Tier::Gpu => "Exp-field parallel atoms",
            Tier::Cpu => "Log-conversion linear atoms",
            Tier::Meta => "Emergent meta patterns",
        }
    }

    pub fn color(self) -> Hsl {
        match self {
            Tier::Quantum => Hsl::new(280.0, 60.0, 55.0),
            Tier::Gpu => Hsl::new(175.0, 80.0, 45.0),
            Tier::Cpu => Hsl::new(35.0, 90.0, 55.0),
            Tier::Meta => Hsl::new(145.0, 70.0, 40.0),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Tier {
    type Err = crate::foundation::error::JungleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                crate::foundation::error::JungleError::validation(format!(
                    "unknown tier '{s}' (expected one of quantum, gpu, cpu, meta)"
                ))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/tier.rs"]
mod tests;
