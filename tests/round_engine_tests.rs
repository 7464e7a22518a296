//! Property tests for round resolution.
//!
//! Every round is fully determined by the seating, the pole and the set of
//! placements. Commit order must never leak into the result.

use joerg::cards::{Card, CardDefinition, CardId};
use joerg::core::PlayerId;
use joerg::error::RoundError;
use joerg::round::{Orientation, OrientationRule, RoundEngine};
use proptest::prelude::*;

#[derive(Clone, Debug)]
struct Table {
    players: usize,
    pole: usize,
    /// (power, attack?) per seat.
    cards: Vec<(i64, bool)>,
    commit_order: Vec<usize>,
}

fn table() -> impl Strategy<Value = Table> {
    (3usize..=6).prop_flat_map(|players| {
        (
            0..players,
            prop::collection::vec((0i64..4, any::<bool>()), players),
            Just((0..players).collect::<Vec<_>>()).prop_shuffle(),
        )
            .prop_map(move |(pole, cards, commit_order)| Table {
                players,
                pole,
                cards,
                commit_order,
            })
    })
}

fn orientation(attack: bool) -> Orientation {
    if attack {
        Orientation::Attack
    } else {
        Orientation::Defense
    }
}

fn play(table: &Table, order: &[usize], rule: OrientationRule) -> RoundEngine {
    let mut engine = RoundEngine::new(table.players).with_rule(rule);
    engine.begin_round();
    engine.set_pole(PlayerId::new(table.pole as u8)).unwrap();
    for &seat in order {
        let (power, attack) = table.cards[seat];
        let player = PlayerId::new(seat as u8);
        let mut card = Card::new(CardId::new(seat as u32), CardDefinition::new(format!("Card {seat}"), power));
        card.owner = Some(player);
        engine.commit_card(player, card, orientation(attack)).unwrap();
    }
    engine
}

proptest! {
    #[test]
    fn order_starts_at_pole_and_visits_each_player_once(table in table()) {
        let engine = play(&table, &table.commit_order, OrientationRule::Majority);
        let order: Vec<(usize, usize)> = engine
            .resolve_cards()
            .unwrap()
            .map(|rc| (rc.player().index(), rc.distance))
            .collect();

        prop_assert_eq!(order.len(), table.players);
        for (i, &(seat, distance)) in order.iter().enumerate() {
            prop_assert_eq!(seat, (table.pole + i) % table.players);
            prop_assert_eq!(distance, i);
        }
    }

    #[test]
    fn winner_is_best_card_of_winning_orientation(table in table()) {
        let engine = play(&table, &table.commit_order, OrientationRule::Majority);
        let orientation = engine.winning_orientation().unwrap();
        let winner = engine.resolve_power().unwrap();

        prop_assert_eq!(winner.orientation(), orientation);
        for rc in engine.resolve_cards().unwrap().filter(|rc| rc.orientation() == orientation) {
            prop_assert!(!orientation.beats(rc.power(), winner.power()));
            if rc.power() == winner.power() {
                prop_assert!(rc.distance >= winner.distance);
            }
        }

        let losers: Vec<PlayerId> = engine.losing_cards().unwrap().map(|rc| rc.player()).collect();
        prop_assert_eq!(losers.len(), table.players - 1);
        prop_assert!(!losers.contains(&winner.player()));
    }

    #[test]
    fn commit_order_does_not_change_the_result(table in table()) {
        let seating_order: Vec<usize> = (0..table.players).collect();
        for rule in [OrientationRule::Majority, OrientationRule::PoleCard] {
            let shuffled = play(&table, &table.commit_order, rule);
            let sorted = play(&table, &seating_order, rule);

            prop_assert_eq!(
                shuffled.resolve_power().unwrap().player(),
                sorted.resolve_power().unwrap().player()
            );
            let a: Vec<_> = shuffled.resolve_cards().unwrap().map(|rc| rc.player()).collect();
            let b: Vec<_> = sorted.resolve_cards().unwrap().map(|rc| rc.player()).collect();
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn pole_card_rule_follows_the_pole(table in table()) {
        let engine = play(&table, &table.commit_order, OrientationRule::PoleCard);
        let pole_orientation = orientation(table.cards[table.pole].1);
        prop_assert_eq!(engine.winning_orientation().unwrap(), pole_orientation);
    }

    #[test]
    fn next_player_cycles_the_table(players in 3usize..=6, start in 0u8..6) {
        let engine = RoundEngine::new(players);
        let start = PlayerId::new(start % players as u8);

        let mut player = start;
        let mut seen = vec![false; players];
        for _ in 0..players {
            prop_assert!(!seen[player.index()]);
            seen[player.index()] = true;
            player = engine.get_next_player(player).unwrap();
        }
        prop_assert_eq!(player, start);
    }

    #[test]
    fn begin_round_is_idempotent(table in table()) {
        let mut engine = play(&table, &table.commit_order, OrientationRule::Majority);
        engine.begin_round();
        engine.begin_round();

        prop_assert_eq!(engine.committed(), 0);
        prop_assert_eq!(engine.pole(), Some(PlayerId::new(table.pole as u8)));
        prop_assert!(matches!(engine.resolve_power(), Err(RoundError::NoPlacements)));
    }
}

/// Four players, no ties, pole on P2: order P2, P3, P0, P1 and the
/// strongest attacker takes the round.
#[test]
fn test_four_player_round_without_ties() {
    let table = Table {
        players: 4,
        pole: 2,
        cards: vec![(7, true), (3, false), (4, true), (9, true)],
        commit_order: vec![1, 3, 0, 2],
    };
    let mut engine = play(&table, &table.commit_order, OrientationRule::Majority);

    let order: Vec<u8> = engine.resolve_cards().unwrap().map(|rc| rc.player().0).collect();
    assert_eq!(order, vec![2, 3, 0, 1]);
    assert_eq!(engine.winning_orientation().unwrap(), Orientation::Attack);
    assert_eq!(engine.resolve_power().unwrap().player(), PlayerId::new(3));

    let outcome = engine.finish_round().unwrap();
    assert_eq!(outcome.winner.card.id, CardId::new(3));
    let losers: Vec<u8> = outcome.losers.iter().map(|p| p.player.0).collect();
    assert_eq!(losers, vec![2, 0, 1]);
    assert_eq!(engine.committed(), 0);
}

/// Defense majority: the lowest defender wins, ties go to the card nearest
/// the pole.
#[test]
fn test_defense_tie_goes_to_nearest_pole() {
    let table = Table {
        players: 5,
        pole: 3,
        cards: vec![(2, false), (9, true), (2, false), (1, true), (4, false)],
        commit_order: vec![0, 1, 2, 3, 4],
    };
    let engine = play(&table, &table.commit_order, OrientationRule::Majority);

    assert_eq!(engine.winning_orientation().unwrap(), Orientation::Defense);
    // Order is P3, P4, P0, P1, P2; P0 and P2 tie at 2, P0 is closer.
    let winner = engine.resolve_power().unwrap();
    assert_eq!(winner.player(), PlayerId::new(0));
    assert_eq!(winner.distance, 2);
}
