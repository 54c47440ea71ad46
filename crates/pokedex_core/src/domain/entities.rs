//! Domain entities - Pokémon records and the catalogues they draw from.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

// Value Objects

/// Free-text minimum/maximum pair, e.g. `"6.04kg"` .. `"7.76kg"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub minimum: String,
    pub maximum: String,
}

impl Bounds {
    pub fn new(minimum: impl Into<String>, maximum: impl Into<String>) -> Self {
        Self {
            minimum: minimum.into(),
            maximum: maximum.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionRequirements {
    pub amount: i32,
    pub name: String,
}

/// Reference to another record by its numeric Pokédex number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evolution {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackMove {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub damage: String,
}

impl AttackMove {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, damage: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            damage: damage.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackCategory {
    Fast,
    Special,
}

impl fmt::Display for AttackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AttackCategory {
    pub const ALL: [AttackCategory; 2] = [AttackCategory::Fast, AttackCategory::Special];

    /// Exact, case-sensitive match on the catalogue key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "fast" => Some(AttackCategory::Fast),
            "special" => Some(AttackCategory::Special),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            AttackCategory::Fast => "fast",
            AttackCategory::Special => "special",
        }
    }
}

/// The two move lists of a record, or of the global catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attacks {
    #[serde(default)]
    pub fast: Vec<AttackMove>,
    #[serde(default)]
    pub special: Vec<AttackMove>,
}

impl Attacks {
    pub fn new(fast: Vec<AttackMove>, special: Vec<AttackMove>) -> Self {
        Self { fast, special }
    }

    pub fn category(&self, category: AttackCategory) -> &[AttackMove] {
        match category {
            AttackCategory::Fast => &self.fast,
            AttackCategory::Special => &self.special,
        }
    }

    /// Fast moves first, then special moves.
    pub fn iter(&self) -> impl Iterator<Item = &AttackMove> {
        self.fast.iter().chain(self.special.iter())
    }

    pub fn contains_move(&self, name: &str) -> bool {
        self.iter().any(|m| m.name == name)
    }
}

/// Canonical move lists. Records are not checked against it.
pub type AttackCatalogue = Attacks;

/// Insertion-ordered set of valid category tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeCatalogue(IndexSet<String>);

impl TypeCatalogue {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(types.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.0.contains(type_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

// Entities

/// A single creature record.
///
/// `id` is opaque and not unique-enforced. Fields a mutation may leave out
/// are optional and resolve to `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub id: String,
    pub name: String,
    pub classification: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    pub resistant: Option<Vec<String>>,
    pub weaknesses: Option<Vec<String>>,
    pub weight: Option<Bounds>,
    pub height: Option<Bounds>,
    pub flee_rate: Option<f64>,
    pub evolution_requirements: Option<EvolutionRequirements>,
    pub evolutions: Option<Vec<Evolution>>,
    #[serde(rename = "maxCP")]
    pub max_cp: Option<i32>,
    #[serde(rename = "maxHP")]
    pub max_hp: Option<i32>,
    #[serde(default)]
    pub attacks: Attacks,
}

impl Pokemon {
    /// Creates a bare record; every optional field is absent.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            classification: None,
            types: Vec::new(),
            resistant: None,
            weaknesses: None,
            weight: None,
            height: None,
            flee_rate: None,
            evolution_requirements: None,
            evolutions: None,
            max_cp: None,
            max_hp: None,
            attacks: Attacks::default(),
        }
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }

    pub fn knows_move(&self, move_name: &str) -> bool {
        self.attacks.contains_move(move_name)
    }
}

// Lookup

/// Identifies one record by id, name, or both.
///
/// Resolution checks the id first across the whole store and only falls
/// back to the name when no record carries that id. Absent parts never match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LookupKey {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl LookupKey {
    pub fn new(id: Option<String>, name: Option<String>) -> Self {
        Self { id, name }
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: None,
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }

    /// Position of the record this key selects, in store order.
    pub fn resolve(&self, records: &[Pokemon]) -> Option<usize> {
        let by_id = self
            .id
            .as_deref()
            .and_then(|id| records.iter().position(|p| p.id == id));

        by_id.or_else(|| {
            self.name
                .as_deref()
                .and_then(|name| records.iter().position(|p| p.name == name))
        })
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.id, &self.name) {
            (Some(id), Some(name)) => write!(f, "id '{}' or name '{}'", id, name),
            (Some(id), None) => write!(f, "id '{}'", id),
            (None, Some(name)) => write!(f, "name '{}'", name),
            (None, None) => write!(f, "empty key"),
        }
    }
}
