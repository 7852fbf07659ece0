use crate::error::{TournamentError, TournamentResult};
use crate::models::{NewTeam, Team, TeamChanges, TeamId};
use crate::store::{teams, Store};

pub async fn list_teams(store: &Store) -> TournamentResult<Vec<Team>> {
    let mut conn = store.pool().acquire().await?;
    teams::list(&mut conn).await
}

/// Fails with `Conflict` if the name is taken.
pub async fn create_team(store: &Store, team: NewTeam) -> TournamentResult<Team> {
    let mut conn = store.pool().acquire().await?;
    let created = teams::insert(&mut conn, &team).await?;
    log::info!("Created team {} '{}'", created.id, created.name);
    Ok(created)
}

/// Cosmetic fields can always change; the name only while no match references the team.
pub async fn update_team(
    store: &Store,
    id: TeamId,
    changes: TeamChanges,
) -> TournamentResult<Team> {
    let mut tx = store.pool().begin().await?;
    let team = teams::find(&mut tx, id)
        .await?
        .ok_or_else(|| TournamentError::not_found("Team", id))?;
    if changes.renames(&team) && teams::match_count(&mut tx, id).await? > 0 {
        return Err(TournamentError::Conflict(
            "Cannot rename a team that already has matches".to_string(),
        ));
    }
    let updated = teams::update(&mut tx, &changes.apply(&team)).await?;
    tx.commit().await?;
    Ok(updated)
}

/// Fails with `Conflict` while the team has matches, `NotFound` if it does not exist.
pub async fn delete_team(store: &Store, id: TeamId) -> TournamentResult<()> {
    let mut tx = store.pool().begin().await?;
    if teams::match_count(&mut tx, id).await? > 0 {
        return Err(TournamentError::Conflict(
            "Cannot delete team with existing matches".to_string(),
        ));
    }
    if !teams::delete(&mut tx, id).await? {
        return Err(TournamentError::not_found("Team", id));
    }
    tx.commit().await?;
    log::info!("Deleted team {id}");
    Ok(())
}
