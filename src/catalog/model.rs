use std::{
    collections::{BTreeMap, BTreeSet},
    fs::File,
    io::BufReader,
    path::Path,
};

use anyhow::Context as _;

use crate::{
    catalog::tier::Tier,
    foundation::core::AtomId,
    foundation::error::{JungleError, JungleResult},
};

const BUILTIN_CATALOG_JSON: &str = include_str!("../../assets/atoms.json");

/// A static catalog record representing a conceptual architecture building block.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Atom {
    /// Unique positive identity key.
    pub id: AtomId,
    /// Short unique label, also the target of other atoms' bonds.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Layout group and theme.
    pub tier: Tier,
    /// Decorative orbit count (the renderer draws at most three).
    pub valence: u8,
    /// Long-form description.
    #[serde(default)]
    pub meaning: String,
    /// Symbols of atoms this one declares a bond with (not necessarily symmetric).
    #[serde(default)]
    pub bonds: Vec<String>,
    /// Optional cost formula text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_formula: Option<String>,
    /// Glyph art shown on selection.
    #[serde(default)]
    pub art: String,
}

/// Reference reaction assembling a GPT layer from catalog atoms.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Molecule {
    /// Reaction equation text.
    pub reaction: String,
    /// Participating atom symbols.
    pub atoms: Vec<String>,
    /// Symbol pairs bonded inside the molecule.
    pub bonds: Vec<[String; 2]>,
}

/// Mock thermodynamics formulas shown in the detail panel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Thermodynamics {
    /// Energy formula.
    pub energy: String,
    /// Entropy formula.
    pub entropy: String,
    /// Free-compute formula.
    pub free_compute: String,
    /// Human-readable summary.
    pub description: String,
}

/// Legend entry describing a bond category.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BondType {
    /// Bond category name.
    pub name: String,
    /// Which atoms the bond connects.
    pub desc: String,
    /// Legend color name.
    pub color: String,
}

/// Immutable, ordered list of atoms plus reference tables.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    /// Atoms in catalog order.
    pub atoms: Vec<Atom>,
    /// Optional reference molecule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub molecule: Option<Molecule>,
    /// Optional thermodynamics table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thermodynamics: Option<Thermodynamics>,
    /// Bond legend.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bond_types: Vec<BondType>,
}

impl Catalog {
    /// The catalog bundled with the crate.
    pub fn builtin() -> JungleResult<Self> {
        Self::from_json_str(BUILTIN_CATALOG_JSON)
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json_str(s: &str) -> JungleResult<Self> {
        let catalog: Catalog = serde_json::from_str(s)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read, parse and validate a catalog JSON file.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> JungleResult<Self> {
        let f = File::open(path).with_context(|| format!("open catalog '{}'", path.display()))?;
        let catalog: Catalog = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| JungleError::serde(format!("parse catalog '{}': {e}", path.display())))?;
        catalog.validate()?;
        tracing::debug!(atoms = catalog.atoms.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Check identity invariants: ids are positive and unique, symbols are non-empty and unique.
    ///
    /// Bond symbols that resolve to nothing are allowed; they are skipped when bonds are drawn.
    pub fn validate(&self) -> JungleResult<()> {
        let mut ids = BTreeSet::new();
        let mut symbols = BTreeSet::new();
        for atom in &self.atoms {
            if atom.id.0 == 0 {
                return Err(JungleError::validation(format!(
                    "atom '{}' has id 0 (ids must be positive)",
                    atom.symbol
                )));
            }
            if !ids.insert(atom.id) {
                return Err(JungleError::validation(format!(
                    "duplicate atom id {}",
                    atom.id
                )));
            }
            if atom.symbol.trim().is_empty() {
                return Err(JungleError::validation(format!(
                    "atom {} has an empty symbol",
                    atom.id
                )));
            }
            if !symbols.insert(atom.symbol.as_str()) {
                return Err(JungleError::validation(format!(
                    "duplicate atom symbol '{}'",
                    atom.symbol
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn get(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.iter().find(|a| a.id == id)
    }

    pub fn by_symbol(&self, symbol: &str) -> Option<&Atom> {
        self.atoms.iter().find(|a| a.symbol == symbol)
    }

    /// Atoms visible under a tier filter, in catalog order. `None` shows the full catalog.
    pub fn filtered(&self, tier: Option<Tier>) -> Vec<&Atom> {
        self.atoms
            .iter()
            .filter(|a| tier.is_none_or(|t| a.tier == t))
            .collect()
    }

    /// Member count per tier, in canonical order.
    pub fn tier_counts(&self) -> BTreeMap<Tier, usize> {
        let mut counts = BTreeMap::new();
        for atom in &self.atoms {
            *counts.entry(atom.tier).or_insert(0) += 1;
        }
        counts
    }

    /// Declared bond symbols that do not name any atom in the catalog, as `(declaring id, symbol)`.
    pub fn dangling_bonds(&self) -> Vec<(AtomId, &str)> {
        let symbols: BTreeSet<&str> = self.atoms.iter().map(|a| a.symbol.as_str()).collect();
        self.atoms
            .iter()
            .flat_map(|a| a.bonds.iter().map(move |b| (a.id, b.as_str())))
            .filter(|(_, b)| !symbols.contains(b))
            .collect()
    }

    /// Bonds declared by only one side, as `(declaring id, target id)`.
    pub fn one_sided_bonds(&self) -> Vec<(AtomId, AtomId)> {
        let mut out = Vec::new();
        for a in &self.atoms {
            for sym in &a.bonds {
                let Some(b) = self.by_symbol(sym) else {
                    continue;
                };
                if !b.bonds.iter().any(|s| s == &a.symbol) {
                    out.push((a.id, b.id));
                }
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
