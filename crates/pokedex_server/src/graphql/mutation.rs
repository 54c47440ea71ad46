use super::types::{AddNewPokemon, DeletePokemon, EditPokemon, PokemonObject};
use crate::error::IntoGraphQLError;
use async_graphql::{Context, Object, Result};
use pokedex_core::{DomainError, PokedexService};
use std::sync::Arc;

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    async fn add_new_pokemon(&self, ctx: &Context<'_>, input: AddNewPokemon) -> Result<PokemonObject> {
        let service = ctx.data::<Arc<PokedexService>>()?;
        service
            .add_pokemon(input.into())
            .await
            .map(Into::into)
            .map_err(IntoGraphQLError::into_graphql_error)
    }

    /// Returns the edited record, or null when no record matches.
    async fn edit_pokemon(
        &self,
        ctx: &Context<'_>,
        input: EditPokemon,
    ) -> Result<Option<PokemonObject>> {
        let service = ctx.data::<Arc<PokedexService>>()?;
        match service.edit_pokemon(input.into()).await {
            Ok(pokemon) => Ok(Some(pokemon.into())),
            Err(DomainError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into_graphql_error()),
        }
    }

    /// Returns the number of records left in the store.
    async fn delete_pokemon(&self, ctx: &Context<'_>, input: DeletePokemon) -> Result<i32> {
        let service = ctx.data::<Arc<PokedexService>>()?;
        let remaining = service
            .delete_pokemon(input.into())
            .await
            .map_err(IntoGraphQLError::into_graphql_error)?;
        Ok(i32::try_from(remaining)?)
    }
}
