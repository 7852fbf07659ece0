//! Event creation: fixtures and opening standings for a new league or knockout.

use crate::models::{EventId, EventType, Standing, TeamId};
use rand::seq::SliceRandom;

/// A fixture to insert. Ids are assigned by storage.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlannedFixture {
    pub team1_id: Option<TeamId>,
    pub team2_id: Option<TeamId>,
    pub round: i32,
}

impl PlannedFixture {
    fn pairing(team1: TeamId, team2: TeamId, round: i32) -> Self {
        Self {
            team1_id: Some(team1),
            team2_id: Some(team2),
            round,
        }
    }

    fn shell(round: i32) -> Self {
        Self {
            team1_id: None,
            team2_id: None,
            round,
        }
    }
}

/// Rows produced for a new event, in insertion order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EventPlan {
    pub fixtures: Vec<PlannedFixture>,
    pub standings: Vec<Standing>,
}

/// Shuffle with the thread-local RNG. Used for real bracket draws.
pub fn random_draw(teams: &mut [TeamId]) {
    teams.shuffle(&mut rand::thread_rng());
}

/// Build the fixtures and standings for a new event.
///
/// `teams` must hold at least two distinct ids; the request layer rejects anything else.
/// `shuffle` decides the knockout draw and is not called for leagues.
pub fn generate_event<S>(
    event_id: EventId,
    event_type: EventType,
    teams: &[TeamId],
    shuffle: S,
) -> EventPlan
where
    S: FnOnce(&mut [TeamId]),
{
    let plan = match event_type {
        EventType::League => EventPlan {
            fixtures: league_fixtures(teams),
            standings: teams.iter().map(|&t| Standing::new(event_id, t)).collect(),
        },
        EventType::Knockout => {
            let mut drawn = teams.to_vec();
            shuffle(&mut drawn);
            EventPlan {
                fixtures: knockout_fixtures(&drawn),
                standings: Vec::new(),
            }
        }
    };
    log::debug!(
        "Planned {} event {} with {} teams: {} fixtures, {} standings",
        event_type,
        event_id,
        teams.len(),
        plan.fixtures.len(),
        plan.standings.len()
    );
    plan
}

/// Round-robin: team i meets every later team j once, i in slot 1. All fixtures are round 1.
pub fn league_fixtures(teams: &[TeamId]) -> Vec<PlannedFixture> {
    let mut fixtures = Vec::with_capacity(teams.len() * teams.len().saturating_sub(1) / 2);
    for (i, &home) in teams.iter().enumerate() {
        for &away in &teams[i + 1..] {
            fixtures.push(PlannedFixture::pairing(home, away, 1));
        }
    }
    fixtures
}

/// Single elimination over an already drawn order.
///
/// Consecutive teams are paired into round 1; with an odd count the last team gets no
/// fixture. Every later round is planned as empty shells, each round holding half of the
/// previous one (rounded up), down to the final. When a round has an odd number of
/// fixtures, the last shell of the next round has a single feeder and is a bye, see
/// [`is_bye`](crate::logic::is_bye).
pub fn knockout_fixtures(drawn: &[TeamId]) -> Vec<PlannedFixture> {
    let mut fixtures: Vec<PlannedFixture> = drawn
        .chunks_exact(2)
        .map(|pair| PlannedFixture::pairing(pair[0], pair[1], 1))
        .collect();

    if drawn.len() % 2 == 1 {
        log::warn!(
            "Knockout draw has an odd number of teams; team {} gets no fixture",
            drawn[drawn.len() - 1]
        );
    }

    let mut in_round = fixtures.len();
    let mut round = 1;
    while in_round > 1 {
        in_round = in_round.div_ceil(2);
        round += 1;
        fixtures.extend((0..in_round).map(|_| PlannedFixture::shell(round)));
    }
    fixtures
}
