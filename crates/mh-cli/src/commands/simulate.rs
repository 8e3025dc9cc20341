use colored::Colorize;
use mh_core::{GameConfig, format_percentage};
use mh_simulation::{BatchConfig, TrialMode, run_batch};

pub fn run(trials: u64, seed: Option<u64>, mode: TrialMode) -> Result<(), String> {
    let config = BatchConfig::default().with_trials(trials).with_mode(mode);
    let mut rng = GameConfig { seed, ..Default::default() }.rng();
    let board = run_batch(&mut rng, &config);

    let seed_label = seed.map_or_else(|| "random".to_string(), |s| s.to_string());
    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("({trials} rounds per strategy, mode={mode}, seed={seed_label})").dimmed()
    );
    println!();
    println!("{}", super::stats_table(&board));
    println!();

    let (stay, switch) = board.rates();
    let verdict = if board.total_games() == 0 {
        "No rounds played.".dimmed()
    } else if switch > stay {
        "Switching wins more often.".green()
    } else if stay > switch {
        "Staying won more often this time.".yellow()
    } else {
        "Both strategies tied.".normal()
    };
    println!(
        "  Stay {} vs switch {}. {verdict}",
        format_percentage(stay),
        format_percentage(switch)
    );
    Ok(())
}
