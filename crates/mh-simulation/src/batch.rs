use mh_core::{Decision, Game, Scoreboard};
use rand::rngs::StdRng;

use crate::config::{BatchConfig, TrialMode};
use crate::trial::Trial;

/// Play `config.trials` rounds per strategy and return the tallies.
///
/// In [`TrialMode::Independent`] each iteration draws one round for the
/// stay strategy and a second, unrelated round for the switch strategy. In
/// [`TrialMode::Paired`] one round is drawn and scored under both, so
/// exactly one of the two tallies gains a win per iteration.
pub fn run_batch(rng: &mut StdRng, config: &BatchConfig) -> Scoreboard {
    let mut board = Scoreboard::new();
    for _ in 0..config.trials {
        match config.mode {
            TrialMode::Independent => {
                let stay = Trial::draw(rng);
                board.record(Decision::Stay, stay.stay_wins());
                let switch = Trial::draw(rng);
                board.record(Decision::Switch, switch.switch_wins());
            }
            TrialMode::Paired => {
                let trial = Trial::draw(rng);
                board.record(Decision::Stay, trial.stay_wins());
                board.record(Decision::Switch, trial.switch_wins());
            }
        }
    }

    let (stay, switch) = board.rates();
    tracing::info!(
        trials = config.trials,
        mode = %config.mode,
        stay_rate = stay,
        switch_rate = switch,
        "batch finished"
    );
    board
}

/// Run a batch on the game's RNG and merge the results into its scoreboard.
/// The game's current round is not touched. Returns the batch tallies alone.
pub fn simulate_into(game: &mut Game, config: &BatchConfig) -> Scoreboard {
    let board = run_batch(game.rng_mut(), config);
    game.absorb(&board);
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use mh_core::{Door, GameConfig, Phase, Strategy};
    use rand::SeedableRng;

    #[test]
    fn default_batch_adds_one_hundred_games_each() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = run_batch(&mut rng, &BatchConfig::default());
        assert_eq!(board.stay.games(), 100);
        assert_eq!(board.switch.games(), 100);
        assert!(board.stay.wins() <= 100);
        assert!(board.switch.wins() <= 100);
    }

    #[test]
    fn zero_trials_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = run_batch(&mut rng, &BatchConfig::default().with_trials(0));
        assert_eq!(board, Scoreboard::new());
    }

    #[test]
    fn seeded_batches_are_reproducible() {
        let config = BatchConfig::default().with_trials(500);
        let a = run_batch(&mut StdRng::seed_from_u64(11), &config);
        let b = run_batch(&mut StdRng::seed_from_u64(11), &config);
        assert_eq!(a, b);
    }

    #[test]
    fn paired_mode_has_one_winner_per_round() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = BatchConfig::default()
            .with_trials(1_000)
            .with_mode(TrialMode::Paired);
        let board = run_batch(&mut rng, &config);
        assert_eq!(board.stay.wins() + board.switch.wins(), 1_000);
    }

    #[test]
    fn rates_converge_in_both_modes() {
        for mode in [TrialMode::Independent, TrialMode::Paired] {
            let mut rng = StdRng::seed_from_u64(2024);
            let config = BatchConfig::default().with_trials(20_000).with_mode(mode);
            let board = run_batch(&mut rng, &config);
            let (stay, switch) = board.rates();
            assert!((stay - 100.0 / 3.0).abs() < 5.0, "{mode} stay {stay}");
            assert!((switch - 200.0 / 3.0).abs() < 5.0, "{mode} switch {switch}");
        }
    }

    #[test]
    fn simulate_into_merges_and_leaves_round_alone() {
        let mut game = Game::new(
            &GameConfig::default()
                .with_seed(5)
                .with_strategy(Strategy::Manual),
        );
        game.choose(Door::new(1).unwrap()).unwrap();
        let before = game.session().clone();

        let batch = simulate_into(&mut game, &BatchConfig::default());
        assert_eq!(game.session(), &before);
        assert_eq!(game.session().phase(), Phase::Deciding);
        assert_eq!(game.scoreboard(), &batch);

        simulate_into(&mut game, &BatchConfig::default());
        assert_eq!(game.scoreboard().stay.games(), 200);
        assert_eq!(game.scoreboard().switch.games(), 200);
    }
}
