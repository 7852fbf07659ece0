//! Scorers and sponsors: plain records with no tournament rules attached.

use crate::error::TournamentResult;
use crate::models::{NewScorer, NewSponsor, Scorer, Sponsor};
use crate::store::{scorers, sponsors, Store};

pub async fn list_scorers(store: &Store) -> TournamentResult<Vec<Scorer>> {
    let mut conn = store.pool().acquire().await?;
    scorers::list(&mut conn).await
}

pub async fn create_scorer(store: &Store, scorer: NewScorer) -> TournamentResult<Scorer> {
    let mut conn = store.pool().acquire().await?;
    scorers::insert(&mut conn, &scorer).await
}

pub async fn list_sponsors(store: &Store) -> TournamentResult<Vec<Sponsor>> {
    let mut conn = store.pool().acquire().await?;
    sponsors::list(&mut conn).await
}

pub async fn create_sponsor(store: &Store, sponsor: NewSponsor) -> TournamentResult<Sponsor> {
    let mut conn = store.pool().acquire().await?;
    sponsors::insert(&mut conn, &sponsor).await
}
