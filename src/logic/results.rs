//! Result processing: league tables and knockout bracket advancement.

use crate::error::{TournamentError, TournamentResult};
use crate::models::{EventId, EventType, Fixture, MatchId, MatchStatus, Slot, Standing, TeamId};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// The standings of one league event, keyed by team.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StandingsTable {
    event_id: EventId,
    rows: BTreeMap<TeamId, Standing>,
}

impl StandingsTable {
    pub fn new(event_id: EventId) -> Self {
        Self {
            event_id,
            rows: BTreeMap::new(),
        }
    }

    /// Table over existing rows. Rows of other events are ignored.
    pub fn from_rows<I>(event_id: EventId, rows: I) -> Self
    where
        I: IntoIterator<Item = Standing>,
    {
        let rows = rows
            .into_iter()
            .filter(|s| s.event_id == event_id)
            .map(|s| (s.team_id, s))
            .collect();
        Self { event_id, rows }
    }

    pub fn get(&self, team: TeamId) -> Option<&Standing> {
        self.rows.get(&team)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in team id order.
    pub fn rows(&self) -> impl Iterator<Item = &Standing> {
        self.rows.values()
    }

    pub fn into_rows(self) -> Vec<Standing> {
        self.rows.into_values().collect()
    }

    /// Add a zeroed row for `team` unless it already has one.
    pub fn ensure_team(&mut self, team: TeamId) {
        let event_id = self.event_id;
        self.rows
            .entry(team)
            .or_insert_with(|| Standing::new(event_id, team));
    }

    /// Apply a completed fixture to both teams' rows.
    ///
    /// A team without a row gets one seeded with this result. Fixtures without a
    /// result or with an empty slot are skipped and `false` is returned.
    pub fn record(&mut self, fixture: &Fixture) -> bool {
        let (Some(team1), Some(team2), Some((score1, score2))) =
            (fixture.team1_id, fixture.team2_id, fixture.scores())
        else {
            log::debug!("Skipping match {} for standings: no result", fixture.id);
            return false;
        };
        let event_id = self.event_id;
        self.rows
            .entry(team1)
            .or_insert_with(|| Standing::new(event_id, team1))
            .record(score1, score2);
        self.rows
            .entry(team2)
            .or_insert_with(|| Standing::new(event_id, team2))
            .record(score2, score1);
        true
    }

    /// Zero every row, then replay every completed fixture in creation (id) order.
    ///
    /// The result depends only on the set of completed fixtures, so replaying is idempotent.
    pub fn recompute(&mut self, fixtures: &[Fixture]) {
        for row in self.rows.values_mut() {
            row.reset();
        }
        let mut played: Vec<&Fixture> = fixtures
            .iter()
            .filter(|f| f.event_id == self.event_id && f.is_completed())
            .collect();
        played.sort_by_key(|f| f.id);
        for fixture in played {
            self.record(fixture);
        }
    }

    /// Rows in table order, see [`rank_order`].
    pub fn ranked(&self) -> Vec<&Standing> {
        let mut ranked: Vec<&Standing> = self.rows.values().collect();
        ranked.sort_by(|a, b| rank_order(a, b));
        ranked
    }
}

/// Table order: more points first, then goal difference, then goals scored, then team id.
pub fn rank_order(a: &Standing, b: &Standing) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team_id.cmp(&b.team_id))
}

/// Winner of a knockout fixture. None on a draw or when unplayed; ties are not broken here.
pub fn winner_of(fixture: &Fixture) -> Option<TeamId> {
    fixture.winner_id()
}

/// Where a knockout winner goes next.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Advancement {
    pub match_id: MatchId,
    pub slot: Slot,
    pub team_id: TeamId,
}

/// Bracket position of `fixture`: zero-based index within its round, by ascending id.
pub fn bracket_position(fixture: &Fixture, bracket: &[Fixture]) -> Option<usize> {
    round_ids(bracket, fixture.event_id, fixture.round)
        .iter()
        .position(|&id| id == fixture.id)
}

/// The next-round fixture and slot fed by `fixture`, regardless of its result.
///
/// The fixture at position p of round R feeds the fixture at position p / 2 of round R + 1,
/// slot 1 for even p and slot 2 for odd p. None for the final, or when the bracket has no
/// fixture at the target position.
pub fn next_slot(fixture: &Fixture, bracket: &[Fixture]) -> Option<(MatchId, Slot)> {
    let position = bracket_position(fixture, bracket)?;
    let next_round = round_ids(bracket, fixture.event_id, fixture.round + 1);
    let match_id = *next_round.get(position / 2)?;
    let slot = if position % 2 == 0 { Slot::One } else { Slot::Two };
    Some((match_id, slot))
}

/// Next-round slot the winner of `fixture` occupies. None on a draw or when [`next_slot`] is None.
pub fn advance_winner(fixture: &Fixture, bracket: &[Fixture]) -> Option<Advancement> {
    let team_id = winner_of(fixture)?;
    let (match_id, slot) = next_slot(fixture, bracket)?;
    Some(Advancement {
        match_id,
        slot,
        team_id,
    })
}

/// True if `fixture` has a single feeder in the previous round: the last fixture of an
/// odd-sized round. Its only team goes through without playing. Round-1 fixtures are never byes.
pub fn is_bye(fixture: &Fixture, bracket: &[Fixture]) -> bool {
    if fixture.round <= 1 {
        return false;
    }
    let Some(position) = bracket_position(fixture, bracket) else {
        return false;
    };
    let feeders = round_ids(bracket, fixture.event_id, fixture.round - 1).len();
    2 * position + 1 >= feeders
}

/// One team slot to write in a later-round fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct SlotWrite {
    pub match_id: MatchId,
    pub slot: Slot,
    /// None clears the slot.
    pub team_id: Option<TeamId>,
    /// New status of a bye: completed once its team is known, scheduled again when cleared.
    pub status: Option<MatchStatus>,
}

/// Everything a result changes besides the fixture itself.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResultUpdate {
    /// League rows to write.
    pub standings: Vec<Standing>,
    /// Knockout slots to write, nearest round first.
    pub slot_writes: Vec<SlotWrite>,
    /// No fixture of the event is left scheduled.
    pub event_completed: bool,
}

/// Work out what recording `fixture` changes.
///
/// `fixture` carries the new result. `was_completed` says whether it already had one.
/// `fixtures` and `rows` are the event's fixtures and standings as stored.
///
/// League: a first result is added to both teams' rows; a corrected result replays the
/// whole table so nothing is counted twice. Knockout: the winner (or nobody, after a
/// draw) is written into the next-round slot and carried through any byes. Writing into a
/// fixture that has already been played is a `Conflict`.
pub fn plan_update(
    event_type: EventType,
    fixture: &Fixture,
    was_completed: bool,
    fixtures: &[Fixture],
    rows: Vec<Standing>,
) -> TournamentResult<ResultUpdate> {
    let mut bracket: Vec<Fixture> = fixtures
        .iter()
        .filter(|f| f.event_id == fixture.event_id && f.id != fixture.id)
        .cloned()
        .collect();
    bracket.push(fixture.clone());

    let mut update = ResultUpdate::default();
    match event_type {
        EventType::League => {
            update.standings = league_rows(fixture, was_completed, &bracket, rows);
        }
        EventType::Knockout => {
            update.slot_writes = bracket_writes(fixture, &mut bracket)?;
        }
    }
    update.event_completed = bracket.iter().all(Fixture::is_completed);
    Ok(update)
}

fn league_rows(
    fixture: &Fixture,
    was_completed: bool,
    fixtures: &[Fixture],
    rows: Vec<Standing>,
) -> Vec<Standing> {
    let mut table = StandingsTable::from_rows(fixture.event_id, rows);
    if was_completed {
        table.recompute(fixtures);
        return table.into_rows();
    }
    table.record(fixture);
    [fixture.team1_id, fixture.team2_id]
        .into_iter()
        .flatten()
        .filter_map(|team| table.get(team).cloned())
        .collect()
}

fn bracket_writes(fixture: &Fixture, bracket: &mut [Fixture]) -> TournamentResult<Vec<SlotWrite>> {
    let team_id = winner_of(fixture);
    let mut writes = Vec::new();
    let mut from = fixture.clone();
    while let Some((match_id, slot)) = next_slot(&from, bracket) {
        let Some(index) = bracket.iter().position(|f| f.id == match_id) else {
            break;
        };
        let bye = is_bye(&bracket[index], bracket);
        let target = &mut bracket[index];
        if target.team(slot) == team_id {
            break;
        }
        if target.is_completed() && !bye {
            return Err(TournamentError::Conflict(format!(
                "Match {} in round {} has already been played",
                target.id, target.round
            )));
        }

        target.set_team(slot, team_id);
        let status = bye.then(|| {
            if team_id.is_some() {
                MatchStatus::Completed
            } else {
                MatchStatus::Scheduled
            }
        });
        if let Some(status) = status {
            target.status = status;
        }
        writes.push(SlotWrite {
            match_id,
            slot,
            team_id,
            status,
        });
        if !bye {
            break;
        }
        from = target.clone();
    }
    Ok(writes)
}

fn round_ids(bracket: &[Fixture], event_id: EventId, round: i32) -> Vec<MatchId> {
    let mut ids: Vec<MatchId> = bracket
        .iter()
        .filter(|f| f.event_id == event_id && f.round == round)
        .map(|f| f.id)
        .collect();
    ids.sort_unstable();
    ids
}
