use super::types::{AllAttacks, FastSpecialAttacks, PokemonObject};
use async_graphql::{Context, Object, Result};
use pokedex_core::{LookupKey, PokedexService, Pokemon};
use std::sync::Arc;

pub struct QueryRoot;

fn objects(records: Vec<Pokemon>) -> Vec<PokemonObject> {
    records.into_iter().map(Into::into).collect()
}

#[Object(name = "Query")]
impl QueryRoot {
    /// Every record in store order.
    #[graphql(name = "Pokemons")]
    async fn pokemons(&self, ctx: &Context<'_>) -> Result<Vec<PokemonObject>> {
        let service = ctx.data::<Arc<PokedexService>>()?;
        Ok(objects(service.list_pokemon().await))
    }

    /// Looks a record up by id, then by name. Returns null when neither matches.
    #[graphql(name = "Pokemon")]
    async fn pokemon(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        id: Option<String>,
    ) -> Result<Option<PokemonObject>> {
        let service = ctx.data::<Arc<PokedexService>>()?;
        let key = LookupKey::new(id, name);
        Ok(service.get_pokemon(&key).await.map(Into::into))
    }

    async fn all_attacks(&self, ctx: &Context<'_>) -> Result<AllAttacks> {
        let service = ctx.data::<Arc<PokedexService>>()?;
        Ok(service.attack_catalogue().await.into())
    }

    async fn all_types(&self, ctx: &Context<'_>) -> Result<Vec<String>> {
        let service = ctx.data::<Arc<PokedexService>>()?;
        Ok(service.type_catalogue().await)
    }

    /// One catalogue list, keyed `fast` or `special`. Any other key yields null.
    async fn either_fast_or_special_attacks(
        &self,
        ctx: &Context<'_>,
        attack_type: String,
    ) -> Result<Option<Vec<FastSpecialAttacks>>> {
        let service = ctx.data::<Arc<PokedexService>>()?;
        Ok(service
            .attacks_by_category(&attack_type)
            .await
            .map(|moves| moves.into_iter().map(Into::into).collect()))
    }

    async fn find_all_pokemon_of_one_type(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> Result<Vec<PokemonObject>> {
        let service = ctx.data::<Arc<PokedexService>>()?;
        Ok(objects(service.find_by_type(&name).await))
    }

    async fn find_pokemon_with_specific_attack(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> Result<Vec<PokemonObject>> {
        let service = ctx.data::<Arc<PokedexService>>()?;
        Ok(objects(service.find_by_attack(&name).await))
    }
}
