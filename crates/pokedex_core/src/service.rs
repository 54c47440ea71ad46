//! Pokédex service - the query and mutation operations behind the resolvers.

use crate::domain::*;
use crate::store::{PokemonPatch, PokemonRepository};
use crate::validation::{Validate, ValidationErrorCode, ValidationResult, Validator};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct PokedexService {
    repo: Arc<dyn PokemonRepository>,
}

impl PokedexService {
    pub fn new(repo: Arc<dyn PokemonRepository>) -> Self {
        Self { repo }
    }

    // Queries

    /// Every record, in insertion order.
    pub async fn list_pokemon(&self) -> Vec<Pokemon> {
        self.repo.find_all().await
    }

    pub async fn count(&self) -> usize {
        self.repo.count().await
    }

    /// Record selected by `key`, or `None`. An empty key selects nothing.
    pub async fn get_pokemon(&self, key: &LookupKey) -> Option<Pokemon> {
        let found = self.repo.find(key).await;
        debug!(%key, found = found.is_some(), "pokemon lookup");
        found
    }

    pub async fn attack_catalogue(&self) -> AttackCatalogue {
        self.repo.attacks().await
    }

    pub async fn type_catalogue(&self) -> Vec<String> {
        let types = self.repo.types().await;
        debug!(count = types.len(), "type catalogue");
        types.to_vec()
    }

    /// One catalogue list by its exact key (`fast` or `special`).
    /// Unknown keys yield `None` rather than an error.
    pub async fn attacks_by_category(&self, category: &str) -> Option<Vec<AttackMove>> {
        let Some(category) = AttackCategory::from_key(category) else {
            debug!(category, "unknown attack category");
            return None;
        };
        Some(self.repo.attacks().await.category(category).to_vec())
    }

    pub async fn find_by_type(&self, type_name: &str) -> Vec<Pokemon> {
        self.repo.find_by_type(type_name).await
    }

    /// Records knowing `move_name` as a fast or special move. A record is
    /// listed once no matter how many of its moves match.
    pub async fn find_by_attack(&self, move_name: &str) -> Vec<Pokemon> {
        self.repo.find_by_move(move_name).await
    }

    // Mutations

    pub async fn add_pokemon(&self, input: NewPokemonInput) -> DomainResult<Pokemon> {
        let types = self.repo.types().await;
        if let Err(errors) = input.validate(&types) {
            warn!(%errors, "rejected new pokemon");
            return Err(errors.into());
        }

        let pokemon = self.repo.insert(input.into()).await;
        info!(id = %pokemon.id, name = %pokemon.name, "pokemon added");
        Ok(pokemon)
    }

    /// Overwrites the fields present in `input` on the record its id/name
    /// selects. Fails with `NotFound` when nothing matches.
    pub async fn edit_pokemon(&self, input: EditPokemonInput) -> DomainResult<Pokemon> {
        let types = self.repo.types().await;
        if let Err(errors) = input.validate(&types) {
            warn!(%errors, "rejected pokemon edit");
            return Err(errors.into());
        }

        let key = input.lookup_key();
        match self.repo.update(&key, input.into_patch()).await {
            Some(pokemon) => {
                info!(%key, id = %pokemon.id, name = %pokemon.name, "pokemon edited");
                Ok(pokemon)
            }
            None => Err(DomainError::NotFound(key)),
        }
    }

    /// Removes the record `input` selects and returns how many remain.
    /// When nothing matches, the store is left as is and the unchanged
    /// count is returned.
    pub async fn delete_pokemon(&self, input: DeletePokemonInput) -> DomainResult<usize> {
        let key = input.lookup_key();
        if key.is_empty() {
            return Err(DomainError::invalid(
                "input",
                ValidationErrorCode::Required,
                "id or name is required",
            ));
        }

        let removal = self.repo.remove(&key).await;
        match removal.removed {
            Some(pokemon) => {
                info!(%key, id = %pokemon.id, remaining = removal.remaining, "pokemon deleted");
            }
            None => warn!(%key, remaining = removal.remaining, "nothing to delete"),
        }
        Ok(removal.remaining)
    }
}

// Input Types

#[derive(Debug, Clone, Default)]
pub struct NewPokemonInput {
    pub id: String,
    pub name: String,
    pub classification: Option<String>,
    pub types: Vec<String>,
    pub attacks: Attacks,
}

impl Validate for NewPokemonInput {
    fn validate(&self, types: &TypeCatalogue) -> ValidationResult<()> {
        let mut validator = Validator::new();
        validator.string("id", &self.id).required();
        validator.string("name", &self.name).required();
        for (i, t) in self.types.iter().enumerate() {
            validator.string(&format!("types[{}]", i), t).known_type(types);
        }
        for category in AttackCategory::ALL {
            for (i, m) in self.attacks.category(category).iter().enumerate() {
                let field = format!("attacks.{}[{}]", category, i);
                validator.string(&format!("{}.name", field), &m.name).required();
                validator
                    .string(&format!("{}.type", field), &m.kind)
                    .known_type(types);
                validator
                    .string(&format!("{}.damage", field), &m.damage)
                    .numeric();
            }
        }
        validator.finish()
    }
}

impl From<NewPokemonInput> for Pokemon {
    fn from(input: NewPokemonInput) -> Self {
        let mut pokemon = Pokemon::new(input.id, input.name);
        pokemon.classification = input.classification;
        pokemon.types = input.types;
        pokemon.attacks = input.attacks;
        pokemon
    }
}

/// Selects a record by `id`/`name`; every present field is then written
/// onto it, `id` and `name` included.
#[derive(Debug, Clone, Default)]
pub struct EditPokemonInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub classification: Option<String>,
    pub types: Option<Vec<String>>,
}

impl EditPokemonInput {
    pub fn lookup_key(&self) -> LookupKey {
        LookupKey::new(self.id.clone(), self.name.clone())
    }

    fn into_patch(self) -> PokemonPatch {
        PokemonPatch {
            id: self.id,
            name: self.name,
            classification: self.classification,
            types: self.types,
        }
    }
}

impl Validate for EditPokemonInput {
    fn validate(&self, types: &TypeCatalogue) -> ValidationResult<()> {
        let mut validator = Validator::new();
        if self.lookup_key().is_empty() {
            validator.add_error("input", ValidationErrorCode::Required, "id or name is required");
        }
        if let Some(ref id) = self.id {
            validator.string("id", id).required();
        }
        if let Some(ref name) = self.name {
            validator.string("name", name).required();
        }
        for (i, t) in self.types.iter().flatten().enumerate() {
            validator.string(&format!("types[{}]", i), t).known_type(types);
        }
        validator.finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeletePokemonInput {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl DeletePokemonInput {
    pub fn lookup_key(&self) -> LookupKey {
        LookupKey::new(self.id.clone(), self.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryPokemonRepository;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn seeded() -> PokedexService {
        let repo = InMemoryPokemonRepository::with_seed_data().unwrap();
        PokedexService::new(Arc::new(repo))
    }

    fn names(records: &[Pokemon]) -> Vec<&str> {
        records.iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_every_record_resolves_by_id_and_name() {
        let service = seeded();
        for pokemon in service.list_pokemon().await {
            assert_eq!(
                service.get_pokemon(&LookupKey::by_id(&pokemon.id)).await.as_ref(),
                Some(&pokemon)
            );
            assert_eq!(
                service.get_pokemon(&LookupKey::by_name(&pokemon.name)).await.as_ref(),
                Some(&pokemon)
            );
        }
    }

    #[tokio::test]
    async fn test_get_by_name() {
        let service = seeded();
        let bulbasaur = service.get_pokemon(&LookupKey::by_name("Bulbasaur")).await.unwrap();
        assert_eq!(bulbasaur.id, "001");
        assert_eq!(bulbasaur.types, vec!["Grass", "Poison"]);
    }

    #[tokio::test]
    async fn test_get_without_arguments_finds_nothing() {
        let service = seeded();
        assert!(service.get_pokemon(&LookupKey::default()).await.is_none());
        assert!(service.get_pokemon(&LookupKey::by_id("404")).await.is_none());
    }

    #[tokio::test]
    async fn test_find_dragons_in_store_order() {
        let service = seeded();
        let dragons = service.find_by_type("Dragon").await;
        assert_eq!(names(&dragons), vec!["Dratini", "Dragonair", "Dragonite"]);

        let expected: Vec<_> = service
            .list_pokemon()
            .await
            .into_iter()
            .filter(|p| p.types.iter().any(|t| t == "Dragon"))
            .collect();
        assert_eq!(dragons, expected);
    }

    #[tokio::test]
    async fn test_find_by_type_is_case_sensitive() {
        let service = seeded();
        assert!(service.find_by_type("dragon").await.is_empty());
    }

    #[tokio::test]
    async fn test_find_solar_beam_users() {
        let service = seeded();
        let users = service.find_by_attack("Solar Beam").await;
        assert_eq!(
            names(&users),
            vec!["Ivysaur", "Venusaur", "Vileplume", "Parasect", "Victreebel", "Exeggutor", "Tangela", "Mew"]
        );
        assert!(service.find_by_attack("Hidden Power").await.is_empty());
    }

    #[tokio::test]
    async fn test_attack_search_lists_each_record_once() {
        let service = seeded();
        let twice = Attacks::new(
            vec![AttackMove::new("Vine Whip", "Grass", "7")],
            vec![AttackMove::new("Vine Whip", "Grass", "7")],
        );
        service
            .add_pokemon(NewPokemonInput {
                id: "900".to_string(),
                name: "Twinleaf".to_string(),
                attacks: twice,
                ..Default::default()
            })
            .await
            .unwrap();

        let users = service.find_by_attack("Vine Whip").await;
        assert_eq!(users.iter().filter(|p| p.id == "900").count(), 1);
    }

    #[rstest]
    #[case("fast", true)]
    #[case("special", true)]
    #[case("Fast", false)]
    #[case("charged", false)]
    #[tokio::test]
    async fn test_attacks_by_category(#[case] category: &str, #[case] known: bool) {
        let service = seeded();
        let result = service.attacks_by_category(category).await;
        assert_eq!(result.is_some(), known);
    }

    #[tokio::test]
    async fn test_attacks_by_category_matches_catalogue() {
        let service = seeded();
        let catalogue = service.attack_catalogue().await;
        assert_eq!(service.attacks_by_category("fast").await, Some(catalogue.fast));
        assert_eq!(service.attacks_by_category("special").await, Some(catalogue.special));
    }

    #[tokio::test]
    async fn test_type_catalogue_is_ordered() {
        let service = seeded();
        let types = service.type_catalogue().await;
        assert_eq!(types.len(), 18);
        assert_eq!(types[0], "Normal");
        assert!(types.contains(&"Fairy".to_string()));
    }

    #[tokio::test]
    async fn test_add_then_get() {
        let service = seeded();
        let added = service
            .add_pokemon(NewPokemonInput {
                id: "333".to_string(),
                name: "HaleeAizhan".to_string(),
                types: vec!["Grass".to_string(), "Fire".to_string()],
                ..Default::default()
            })
            .await
            .unwrap();

        let found = service.get_pokemon(&LookupKey::by_id("333")).await.unwrap();
        assert_eq!(found, added);
        assert_eq!(found.name, "HaleeAizhan");
        assert_eq!(found.types, vec!["Grass", "Fire"]);
        assert!(found.weight.is_none());
        assert_eq!(service.list_pokemon().await.len(), 152);
    }

    #[tokio::test]
    async fn test_add_round_trip_keeps_every_field() {
        let service = seeded();
        let input = NewPokemonInput {
            id: "152".to_string(),
            name: "Chikorita".to_string(),
            classification: Some("Leaf Pokémon".to_string()),
            types: vec!["Grass".to_string()],
            attacks: Attacks::new(
                vec![AttackMove::new("Vine Whip", "Grass", "7")],
                vec![
                    AttackMove::new("Body Slam", "Normal", "40"),
                    AttackMove::new("Energy Ball", "Grass", "90"),
                ],
            ),
        };
        let expected = Pokemon::from(input.clone());
        service.add_pokemon(input).await.unwrap();

        let found = service.get_pokemon(&LookupKey::by_id("152")).await.unwrap();
        assert_eq!(found, expected);
    }

    #[tokio::test]
    async fn test_add_does_not_enforce_unique_ids() {
        let service = seeded();
        service
            .add_pokemon(NewPokemonInput {
                id: "001".to_string(),
                name: "Bulbasaur Clone".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(service.list_pokemon().await.len(), 152);
        let first = service.get_pokemon(&LookupKey::by_id("001")).await.unwrap();
        assert_eq!(first.name, "Bulbasaur");
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_input() {
        let service = seeded();
        let err = service
            .add_pokemon(NewPokemonInput {
                id: " ".to_string(),
                name: "Missingno".to_string(),
                types: vec!["Bird".to_string()],
                attacks: Attacks::new(vec![AttackMove::new("Glitch", "Normal", "lots")], vec![]),
                ..Default::default()
            })
            .await
            .unwrap_err();

        let DomainError::InvalidArgument(errors) = err else {
            panic!("expected invalid argument");
        };
        let fields: Vec<_> = errors.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["id", "types[0]", "attacks.fast[0].damage"]);
        assert_eq!(service.list_pokemon().await.len(), 151);
    }

    #[tokio::test]
    async fn test_edit_renames_and_keeps_other_fields() {
        let service = seeded();
        let before = service.get_pokemon(&LookupKey::by_id("001")).await.unwrap();

        let edited = service
            .edit_pokemon(EditPokemonInput {
                id: Some("001".to_string()),
                name: Some("AizhanHalee".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let expected = Pokemon {
            name: "AizhanHalee".to_string(),
            ..before
        };
        assert_eq!(edited, expected);
        assert_eq!(service.get_pokemon(&LookupKey::by_id("001")).await, Some(expected));
    }

    #[tokio::test]
    async fn test_edit_by_name_overwrites_types() {
        let service = seeded();
        let edited = service
            .edit_pokemon(EditPokemonInput {
                name: Some("Pikachu".to_string()),
                types: Some(vec!["Electric".to_string(), "Fairy".to_string()]),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(edited.id, "025");
        assert_eq!(edited.types, vec!["Electric", "Fairy"]);
    }

    #[tokio::test]
    async fn test_edit_missing_record_is_not_found() {
        let service = seeded();
        let err = service
            .edit_pokemon(EditPokemonInput {
                id: Some("999".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_edit_requires_a_key() {
        let service = seeded();
        let err = service
            .edit_pokemon(EditPokemonInput {
                classification: Some("Mystery Pokémon".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn test_edit_rejects_blank_id() {
        let service = seeded();
        let before = service.list_pokemon().await;
        let err = service
            .edit_pokemon(EditPokemonInput {
                id: Some(String::new()),
                name: Some("Bulbasaur".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        let DomainError::InvalidArgument(errors) = err else {
            panic!("expected invalid argument");
        };
        assert_eq!(errors.first_field(), Some("id"));
        assert_eq!(service.list_pokemon().await, before);
    }

    #[tokio::test]
    async fn test_add_rejects_non_finite_damage() {
        let service = seeded();
        let err = service
            .add_pokemon(NewPokemonInput {
                id: "901".to_string(),
                name: "Glitchmon".to_string(),
                attacks: Attacks::new(vec![AttackMove::new("Glitch", "Normal", "NaN")], vec![]),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), "INVALID_ARGUMENT");
        assert!(service.get_pokemon(&LookupKey::by_id("901")).await.is_none());
    }

    #[tokio::test]
    async fn test_delete_returns_remaining_count() {
        let service = seeded();
        let remaining = service
            .delete_pokemon(DeletePokemonInput {
                id: Some("001".to_string()),
                name: None,
            })
            .await
            .unwrap();

        assert_eq!(remaining, 150);
        assert!(service.get_pokemon(&LookupKey::by_id("001")).await.is_none());
    }

    #[tokio::test]
    async fn test_delete_twice_removes_only_once() {
        let service = seeded();
        let input = DeletePokemonInput {
            id: Some("001".to_string()),
            name: None,
        };
        assert_eq!(service.delete_pokemon(input.clone()).await.unwrap(), 150);
        assert_eq!(service.delete_pokemon(input).await.unwrap(), 150);
        assert_eq!(service.list_pokemon().await[0].id, "002");
    }

    #[tokio::test]
    async fn test_delete_requires_a_key() {
        let service = seeded();
        let err = service.delete_pokemon(DeletePokemonInput::default()).await.unwrap_err();
        assert_eq!(err.code(), "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn test_count_tracks_adds_and_deletes() {
        let service = seeded();
        for i in 0..3 {
            service
                .add_pokemon(NewPokemonInput {
                    id: format!("90{}", i),
                    name: format!("Fakemon {}", i),
                    ..Default::default()
                })
                .await
                .unwrap();
        }
        service
            .delete_pokemon(DeletePokemonInput {
                id: None,
                name: Some("Mew".to_string()),
            })
            .await
            .unwrap();
        service
            .delete_pokemon(DeletePokemonInput {
                id: Some("does-not-exist".to_string()),
                name: None,
            })
            .await
            .unwrap();

        assert_eq!(service.list_pokemon().await.len(), 151 + 3 - 1);
    }
}
