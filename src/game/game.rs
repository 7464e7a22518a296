//! The game loop.

use smallvec::SmallVec;

use super::report::{GameResult, HookFiring, RoundReport};
use super::strategy::{CommitStrategy, RandomStrategy};
use crate::cards::{Card, CardLibrary, Hook};
use crate::core::{GameConfig, GameRng, Player, PlayerId, PlayerMap, PoleRotation};
use crate::error::GameError;
use crate::round::{OrientationRule, RoundEngine};
use crate::zones::Deck;

/// A game in progress.
#[derive(Debug)]
pub struct Game<S = RandomStrategy> {
    config: GameConfig,
    engine: RoundEngine,
    players: Vec<Player>,
    deck: Deck,
    /// Winning cards leave play.
    spent: Vec<Card>,
    victories: PlayerMap<u32>,
    pole: PlayerId,
    round: u32,
    rng: GameRng,
    strategy: S,
}

/// Builder for creating a Game.
///
/// ```
/// use joerg::cards::{CardDefinition, CardLibrary};
/// use joerg::core::GameRng;
/// use joerg::game::GameBuilder;
///
/// let library = CardLibrary::from_definitions(
///     (1..=20).map(|i| CardDefinition::new(format!("Card {i}"), i)).collect(),
/// ).unwrap();
///
/// let mut game = GameBuilder::new()
///     .player_count(4)
///     .wins_needed(3)
///     .build(library.instantiate(), GameRng::new(42))
///     .unwrap();
///
/// let result = game.play().unwrap();
/// assert_eq!(game.victories()[result.winner()], 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    /// Also resets hand size and cycle threshold, see [`GameConfig::with_wins_needed`].
    pub fn wins_needed(mut self, wins: u32) -> Self {
        self.config = self.config.with_wins_needed(wins);
        self
    }

    pub fn starting_hand_size(mut self, size: usize) -> Self {
        self.config.starting_hand_size = size;
        self
    }

    pub fn cycle_at_wins(mut self, wins: u32) -> Self {
        self.config.cycle_at_wins = wins;
        self
    }

    pub fn orientation_rule(mut self, rule: OrientationRule) -> Self {
        self.config.orientation_rule = rule;
        self
    }

    pub fn pole_rotation(mut self, rotation: PoleRotation) -> Self {
        self.config.pole_rotation = rotation;
        self
    }

    /// Build a game that commits random cards in random orientations.
    pub fn build(self, cards: Vec<Card>, rng: GameRng) -> Result<Game, GameError> {
        self.build_with_strategy(cards, rng, RandomStrategy)
    }

    /// Validate, shuffle, seat, deal and assign the pole.
    pub fn build_with_strategy<S: CommitStrategy>(
        self,
        cards: Vec<Card>,
        mut rng: GameRng,
        strategy: S,
    ) -> Result<Game<S>, GameError> {
        let config = self.config;
        config.validate(cards.len())?;
        CardLibrary::assert_unique(&cards)?;

        let mut deck: Deck = cards.into_iter().collect();
        deck.shuffle(&mut rng);

        let mut players: Vec<Player> = PlayerId::all(config.player_count).map(Player::new).collect();
        for player in &mut players {
            for _ in 0..config.starting_hand_size {
                let card = deck.draw().ok_or(GameError::DeckExhausted)?;
                player.add_card_to_hand(card, None);
            }
        }

        let engine = RoundEngine::new(config.player_count).with_rule(config.orientation_rule);
        let pole = engine.seating()[rng.gen_range_usize(0..config.player_count)];

        log::info!(
            "new game: {} players, {} wins needed, seed {}, {} is pole",
            config.player_count,
            config.wins_needed,
            rng.seed(),
            pole
        );

        Ok(Game {
            victories: PlayerMap::with_value(config.player_count, 0),
            config,
            engine,
            players,
            deck,
            spent: Vec::new(),
            pole,
            round: 0,
            rng,
            strategy,
        })
    }
}

impl<S: CommitStrategy> Game<S> {
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    /// Players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Cards that won a round.
    #[must_use]
    pub fn spent(&self) -> &[Card] {
        &self.spent
    }

    #[must_use]
    pub fn victories(&self) -> &PlayerMap<u32> {
        &self.victories
    }

    /// Pole for the next round.
    #[must_use]
    pub fn pole(&self) -> PlayerId {
        self.pole
    }

    /// Rounds played so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The game's result, once someone reached the win target.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.victories
            .iter()
            .find(|&(_, &wins)| wins >= self.config.wins_needed)
            .map(|(player, _)| GameResult::Winner(player))
    }

    /// Play rounds until someone reaches the win target.
    pub fn play(&mut self) -> Result<GameResult, GameError> {
        loop {
            if let Some(result) = self.result() {
                log::info!("{} wins the game after {} rounds", result.winner(), self.round);
                return Ok(result);
            }
            self.play_round()?;
        }
    }

    /// Play one full round.
    pub fn play_round(&mut self) -> Result<RoundReport, GameError> {
        if self.result().is_some() {
            return Err(GameError::GameOver);
        }
        self.round += 1;
        let pole = self.pole;
        let mut hooks = Vec::new();

        self.engine.begin_round();
        self.engine.set_pole(pole)?;

        // Commit phase
        for player in &mut self.players {
            let (card, orientation) = self.strategy.commit(player, &mut self.rng)?;
            self.engine.commit_card(player.id(), card, orientation)?;
        }

        let order: SmallVec<[PlayerId; 6]> = self.engine.resolve_cards()?.map(|rc| rc.player()).collect();
        log::debug!("round {}: pole {}, order {:?}", self.round, pole, order);

        // Reveal phase
        for mut rc in self.engine.resolve_cards_mut()? {
            let (player, distance) = (rc.player(), rc.distance);
            let card = rc.card_mut();
            card.on_reveal();
            log::debug!("reveal {} at distance {}: {}", player, distance, card);
            hooks.push(HookFiring::new(Hook::Reveal, player, card.id));
        }

        // Before power
        for mut rc in self.engine.resolve_cards_mut()? {
            let player = rc.player();
            let card = rc.card_mut();
            card.before_power();
            hooks.push(HookFiring::new(Hook::BeforePower, player, card.id));
        }

        let orientation = self.engine.winning_orientation()?;
        let (winner, winning_card, winning_power) = {
            let best = self.engine.resolve_power()?;
            (best.player(), best.card().id, best.power())
        };

        // Win / lose
        for mut rc in self.engine.resolve_cards_mut()? {
            let player = rc.player();
            let card = rc.card_mut();
            let hook = if player == winner {
                card.on_win();
                Hook::Win
            } else {
                card.on_lose();
                Hook::Lose
            };
            hooks.push(HookFiring::new(hook, player, card.id));
        }

        let outcome = self.engine.finish_round()?;
        self.victories[winner] += 1;
        log::info!(
            "round {}: {} wins with {} as {} ({} victories)",
            self.round,
            winner,
            outcome.winner.card,
            orientation,
            self.victories[winner]
        );
        self.spent.push(outcome.winner.card);

        let losers: SmallVec<[PlayerId; 6]> = outcome.losers.iter().map(|p| p.player).collect();
        for placement in outcome.losers {
            let id = placement.card.id;
            self.players[placement.player.index()].add_card_to_hand(placement.card, None);
            hooks.push(HookFiring::new(Hook::HandEnter, placement.player, id));
        }

        let from = match self.config.pole_rotation {
            PoleRotation::AfterWinner => winner,
            PoleRotation::AfterPole => pole,
        };
        self.pole = self.engine.get_next_player(from)?;

        let cycled = if self.config.cycle_at_wins > 0 && self.victories[winner] == self.config.cycle_at_wins {
            self.cycle(winner, &mut hooks)?
        } else {
            SmallVec::new()
        };

        Ok(RoundReport {
            round: self.round,
            pole,
            order,
            orientation,
            winner,
            winning_card,
            winning_power,
            losers,
            hooks,
            cycled,
            next_pole: self.pole,
        })
    }

    /// Every player except `winner` swaps a random card for the top of the
    /// deck, keeping the hand slot. Cycled cards go to the bottom of the deck.
    fn cycle(
        &mut self,
        winner: PlayerId,
        hooks: &mut Vec<HookFiring>,
    ) -> Result<SmallVec<[PlayerId; 6]>, GameError> {
        let mut cycled = SmallVec::new();
        let mut discarded = Vec::new();

        for player in self.players.iter_mut().filter(|p| p.id() != winner) {
            let (slot, mut card) = player.pop_random_card(&mut self.rng)?;
            card.on_cycle();
            hooks.push(HookFiring::new(Hook::Cycle, player.id(), card.id));

            let replacement = self.deck.draw().ok_or(GameError::DeckExhausted)?;
            let id = replacement.id;
            player.add_card_to_hand(replacement, Some(slot));
            hooks.push(HookFiring::new(Hook::HandEnter, player.id(), id));

            log::debug!("{} cycles {} from slot {}", player.id(), card, slot);
            cycled.push(player.id());
            discarded.push(card);
        }

        for mut card in discarded {
            card.owner = None;
            self.deck.put_on_bottom(card);
        }

        log::info!("cycle: {} reached {} victories", winner, self.victories[winner]);
        Ok(cycled)
    }
}
