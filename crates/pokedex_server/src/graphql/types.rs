//! GraphQL object and input types.

use async_graphql::{InputObject, SimpleObject};
use pokedex_core::{self as core_domain, AttackMove, Attacks};

// Output Types

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Pokemon")]
pub struct PokemonObject {
    pub id: String,
    pub name: String,
    pub classification: Option<String>,
    pub types: Vec<String>,
    pub resistant: Option<Vec<String>>,
    pub weaknesses: Option<Vec<String>>,
    pub weight: Option<Weight>,
    pub height: Option<Height>,
    pub flee_rate: Option<f64>,
    pub evolution_requirements: Option<EvolutionRequirementsObject>,
    pub evolutions: Option<Vec<Evolutions>>,
    #[graphql(name = "maxCP")]
    pub max_cp: Option<i32>,
    #[graphql(name = "maxHP")]
    pub max_hp: Option<i32>,
    pub attacks: AllAttacks,
}

impl From<core_domain::Pokemon> for PokemonObject {
    fn from(p: core_domain::Pokemon) -> Self {
        Self {
            id: p.id,
            name: p.name,
            classification: p.classification,
            types: p.types,
            resistant: p.resistant,
            weaknesses: p.weaknesses,
            weight: p.weight.map(|b| Weight {
                minimum: b.minimum,
                maximum: b.maximum,
            }),
            height: p.height.map(|b| Height {
                minimum: b.minimum,
                maximum: b.maximum,
            }),
            flee_rate: p.flee_rate,
            evolution_requirements: p.evolution_requirements.map(Into::into),
            evolutions: p
                .evolutions
                .map(|evolutions| evolutions.into_iter().map(Into::into).collect()),
            max_cp: p.max_cp,
            max_hp: p.max_hp,
            attacks: p.attacks.into(),
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct Weight {
    pub minimum: String,
    pub maximum: String,
}

#[derive(SimpleObject, Clone, Debug)]
pub struct Height {
    pub minimum: String,
    pub maximum: String,
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "EvolutionRequirements")]
pub struct EvolutionRequirementsObject {
    pub amount: i32,
    pub name: String,
}

impl From<core_domain::EvolutionRequirements> for EvolutionRequirementsObject {
    fn from(r: core_domain::EvolutionRequirements) -> Self {
        Self {
            amount: r.amount,
            name: r.name,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct Evolutions {
    pub id: i32,
    pub name: String,
}

impl From<core_domain::Evolution> for Evolutions {
    fn from(e: core_domain::Evolution) -> Self {
        Self { id: e.id, name: e.name }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct AllAttacks {
    pub fast: Vec<FastSpecialAttacks>,
    pub special: Vec<FastSpecialAttacks>,
}

impl From<Attacks> for AllAttacks {
    fn from(a: Attacks) -> Self {
        Self {
            fast: a.fast.into_iter().map(Into::into).collect(),
            special: a.special.into_iter().map(Into::into).collect(),
        }
    }
}

/// A single move; shared by both categories.
#[derive(SimpleObject, Clone, Debug)]
pub struct FastSpecialAttacks {
    pub name: String,
    #[graphql(name = "type")]
    pub kind: String,
    pub damage: String,
}

impl From<AttackMove> for FastSpecialAttacks {
    fn from(m: AttackMove) -> Self {
        Self {
            name: m.name,
            kind: m.kind,
            damage: m.damage,
        }
    }
}

// Input Types

#[derive(InputObject, Clone, Debug)]
pub struct AddNewPokemon {
    /// Required; a missing or blank id is rejected with `INVALID_ARGUMENT`.
    pub id: Option<String>,
    /// Required; a missing or blank name is rejected with `INVALID_ARGUMENT`.
    pub name: Option<String>,
    pub classification: Option<String>,
    #[graphql(default)]
    pub types: Vec<String>,
    pub attacks: Option<NewAttacks>,
}

impl From<AddNewPokemon> for core_domain::NewPokemonInput {
    fn from(input: AddNewPokemon) -> Self {
        Self {
            id: input.id.unwrap_or_default(),
            name: input.name.unwrap_or_default(),
            classification: input.classification,
            types: input.types,
            attacks: input.attacks.map(Into::into).unwrap_or_default(),
        }
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct NewAttacks {
    #[graphql(default)]
    pub fast: Vec<NewAttack>,
    #[graphql(default)]
    pub special: Vec<NewAttack>,
}

impl From<NewAttacks> for Attacks {
    fn from(input: NewAttacks) -> Self {
        Attacks::new(
            input.fast.into_iter().map(Into::into).collect(),
            input.special.into_iter().map(Into::into).collect(),
        )
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct NewAttack {
    pub name: String,
    #[graphql(name = "type")]
    pub kind: String,
    pub damage: String,
}

impl From<NewAttack> for AttackMove {
    fn from(input: NewAttack) -> Self {
        AttackMove::new(input.name, input.kind, input.damage)
    }
}

/// `id`/`name` select the record, then every present field is written to it.
#[derive(InputObject, Clone, Debug)]
pub struct EditPokemon {
    pub id: Option<String>,
    pub name: Option<String>,
    pub classification: Option<String>,
    pub types: Option<Vec<String>>,
}

impl From<EditPokemon> for core_domain::EditPokemonInput {
    fn from(input: EditPokemon) -> Self {
        Self {
            id: input.id,
            name: input.name,
            classification: input.classification,
            types: input.types,
        }
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct DeletePokemon {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl From<DeletePokemon> for core_domain::DeletePokemonInput {
    fn from(input: DeletePokemon) -> Self {
        Self {
            id: input.id,
            name: input.name,
        }
    }
}
