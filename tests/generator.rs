//! Integration tests for event generation: round-robin leagues and knockout draws.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;
use tournament_backend::{generate_event, EventType, PlannedFixture, Standing, TeamId};

fn no_shuffle(_: &mut [TeamId]) {}

fn pair(f: &PlannedFixture) -> (TeamId, TeamId) {
    (f.team1_id.unwrap(), f.team2_id.unwrap())
}

#[test]
fn league_of_three_plays_every_pair_once() {
    let plan = generate_event(1, EventType::League, &[10, 20, 30], no_shuffle);
    let pairs: Vec<_> = plan.fixtures.iter().map(pair).collect();
    assert_eq!(pairs, vec![(10, 20), (10, 30), (20, 30)]);
    assert!(plan.fixtures.iter().all(|f| f.round == 1));
    assert_eq!(
        plan.standings,
        vec![Standing::new(1, 10), Standing::new(1, 20), Standing::new(1, 30)]
    );
}

#[test]
fn league_fixture_count_is_n_choose_2() {
    for n in 2..=12 {
        let teams: Vec<TeamId> = (1..=n).collect();
        let plan = generate_event(3, EventType::League, &teams, no_shuffle);
        let n = n as usize;
        assert_eq!(plan.fixtures.len(), n * (n - 1) / 2);

        let mut seen = HashSet::new();
        for f in &plan.fixtures {
            let (a, b) = pair(f);
            assert_ne!(a, b, "team paired with itself");
            assert!(seen.insert((a.min(b), a.max(b))), "pair {a}-{b} appears twice");
        }
        assert_eq!(plan.standings.len(), n);
    }
}

#[test]
fn league_never_calls_the_shuffle() {
    let plan = generate_event(1, EventType::League, &[1, 2], |_| panic!("league must not shuffle"));
    assert_eq!(plan.fixtures.len(), 1);
}

#[test]
fn knockout_uses_the_drawn_order() {
    // A, B, C, D drawn as C, A, D, B.
    let (a, b, c, d) = (1, 2, 3, 4);
    let plan = generate_event(9, EventType::Knockout, &[a, b, c, d], |teams| {
        teams.copy_from_slice(&[c, a, d, b]);
    });

    assert_eq!(plan.fixtures.len(), 3);
    assert_eq!(pair(&plan.fixtures[0]), (c, a));
    assert_eq!(pair(&plan.fixtures[1]), (d, b));
    assert_eq!(plan.fixtures[0].round, 1);
    assert_eq!(
        plan.fixtures[2],
        PlannedFixture {
            team1_id: None,
            team2_id: None,
            round: 2
        }
    );
    assert!(plan.standings.is_empty());
}

#[test]
fn knockout_puts_every_team_in_exactly_one_first_round_fixture() {
    for seed in 0..50u64 {
        for n in [2, 4, 6, 8, 16] {
            let teams: Vec<TeamId> = (100..100 + n).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = generate_event(1, EventType::Knockout, &teams, |t| t.shuffle(&mut rng));

            let first: Vec<_> = plan.fixtures.iter().filter(|f| f.round == 1).collect();
            assert_eq!(first.len(), n as usize / 2);

            let mut seen = HashSet::new();
            for f in first {
                let (x, y) = pair(f);
                assert!(seen.insert(x) && seen.insert(y));
            }
            assert_eq!(seen, teams.iter().copied().collect::<HashSet<_>>());
        }
    }
}

#[test]
fn knockout_draw_is_reproducible_with_a_seed() {
    let teams: Vec<TeamId> = (1..=8).collect();
    let draw = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_event(1, EventType::Knockout, &teams, |t| t.shuffle(&mut rng))
    };
    assert_eq!(draw(42), draw(42));
}

#[test]
fn knockout_plans_shells_down_to_the_final() {
    let teams: Vec<TeamId> = (1..=8).collect();
    let plan = generate_event(1, EventType::Knockout, &teams, no_shuffle);
    let per_round: Vec<usize> = (1..=3)
        .map(|r| plan.fixtures.iter().filter(|f| f.round == r).count())
        .collect();
    assert_eq!(per_round, vec![4, 2, 1]);
    assert!(plan
        .fixtures
        .iter()
        .filter(|f| f.round > 1)
        .all(|f| f.team1_id.is_none() && f.team2_id.is_none()));
}

#[test]
fn knockout_with_two_teams_is_just_a_final() {
    let plan = generate_event(1, EventType::Knockout, &[5, 6], no_shuffle);
    assert_eq!(plan.fixtures.len(), 1);
    assert_eq!(pair(&plan.fixtures[0]), (5, 6));
}

#[test]
fn knockout_with_odd_count_drops_the_last_drawn_team() {
    let plan = generate_event(1, EventType::Knockout, &[1, 2, 3, 4, 5], no_shuffle);
    let first: Vec<_> = plan.fixtures.iter().filter(|f| f.round == 1).map(pair).collect();
    assert_eq!(first, vec![(1, 2), (3, 4)]);
    assert!(!plan
        .fixtures
        .iter()
        .any(|f| f.team1_id == Some(5) || f.team2_id == Some(5)));
}

#[test]
fn knockout_with_six_teams_plans_a_bye_in_round_two() {
    let teams: Vec<TeamId> = (1..=6).collect();
    let plan = generate_event(1, EventType::Knockout, &teams, no_shuffle);
    let rounds: Vec<i32> = plan.fixtures.iter().map(|f| f.round).collect();
    // Three round-1 winners: two meet, the third goes through the second shell unopposed.
    assert_eq!(rounds, vec![1, 1, 1, 2, 2, 3]);
}
