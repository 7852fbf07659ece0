use crate::error::{TournamentError, TournamentResult};
use crate::logic::{advance_winner, plan_update, Advancement, SlotWrite};
use crate::models::{EventStatus, EventType, Fixture, MatchId, MatchStatus, Standing, TeamId};
use crate::store::{events, fixtures, standings, Store};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Scores (and optional schedule details) reported for a match.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResultInput {
    pub team1_score: i32,
    pub team2_score: i32,
    pub match_date: Option<NaiveDateTime>,
    pub venue: Option<String>,
}

/// What a result update changed.
#[derive(Clone, Debug, Serialize)]
pub struct RecordedResult {
    #[serde(rename = "match")]
    pub fixture: Fixture,
    pub winner_id: Option<TeamId>,
    /// League rows written by this update.
    pub standings: Vec<Standing>,
    /// Knockout slot the winner moved into.
    pub advanced_to: Option<Advancement>,
    /// Every bracket slot written, including byes the winner went straight through.
    pub bracket_updates: Vec<SlotWrite>,
    pub event_status: EventStatus,
}

/// Record a match result and propagate it, all in one transaction.
///
/// The changes to standings, the bracket and the event status come from
/// [`plan_update`]; this function loads the rows it needs and writes back its answer.
pub async fn record_result(
    store: &Store,
    id: MatchId,
    input: ResultInput,
) -> TournamentResult<RecordedResult> {
    if input.team1_score < 0 || input.team2_score < 0 {
        return Err(TournamentError::Validation("Scores cannot be negative".to_string()));
    }

    let mut tx = store.pool().begin().await?;

    let mut fixture = fixtures::find_for_update(&mut tx, id)
        .await?
        .ok_or_else(|| TournamentError::not_found("Match", id))?;
    let event = events::find(&mut tx, fixture.event_id)
        .await?
        .ok_or_else(|| TournamentError::NotFound(format!("Event for match {id} not found")))?;
    if fixture.is_walkover() {
        return Err(TournamentError::Validation(format!(
            "Match {id} is a bye and takes no result"
        )));
    }
    let (Some(team1), Some(team2)) = (fixture.team1_id, fixture.team2_id) else {
        return Err(TournamentError::Validation(format!(
            "Match {id} is waiting for earlier rounds and cannot take a result yet"
        )));
    };

    let was_completed = fixture.is_completed();
    fixture.team1_score = Some(input.team1_score);
    fixture.team2_score = Some(input.team2_score);
    fixture.status = MatchStatus::Completed;
    if input.match_date.is_some() {
        fixture.match_date = input.match_date;
    }
    if input.venue.is_some() {
        fixture.venue = input.venue;
    }
    fixtures::save_result(&mut tx, &fixture).await?;

    let rows = match event.event_type {
        EventType::League => standings::lock_for_event(&mut tx, event.id).await?,
        EventType::Knockout => Vec::new(),
    };
    let all = fixtures::list_for_event(&mut tx, event.id).await?;
    let update = plan_update(event.event_type, &fixture, was_completed, &all, rows)?;

    standings::upsert(&mut tx, &update.standings).await?;
    for write in &update.slot_writes {
        fixtures::set_slot(&mut tx, write).await?;
    }

    let mut event_status = event.status;
    if event_status != EventStatus::Completed && update.event_completed {
        events::set_status(&mut tx, event.id, EventStatus::Completed).await?;
        event_status = EventStatus::Completed;
        log::info!("Event {} completed", event.id);
    }

    tx.commit().await?;

    log::info!(
        "Recorded match {id}: {} {}-{} {}",
        team1,
        input.team1_score,
        input.team2_score,
        team2
    );
    for write in &update.slot_writes {
        match write.team_id {
            Some(team) => {
                log::info!("Team {team} goes to match {} ({:?})", write.match_id, write.slot)
            }
            None => log::info!("Cleared {:?} of match {}", write.slot, write.match_id),
        }
    }

    Ok(RecordedResult {
        winner_id: fixture.winner_id(),
        advanced_to: advance_winner(&fixture, &all),
        fixture,
        standings: update.standings,
        bracket_updates: update.slot_writes,
        event_status,
    })
}
