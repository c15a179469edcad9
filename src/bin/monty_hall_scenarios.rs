use anyhow::Result;
use tracing::info;

use monty_hall::config::Config;
use monty_hall::engine::{Game, Host, Player, PlayerAction, ResolvedGame, TrialPhase};
use monty_hall::infra::{init_tracing, SystemRng};
use monty_hall::{play_trial, TrialOverrides};

fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(config.log_format);

    println!("monty_hall_scenarios: фиксированные сценарии и одна случайная игра по шагам");

    let mut rng = SystemRng;

    // Номера в заголовках – как на доске (DOOR 1..3).
    let scenarios = [
        ("car 1, first 1", 0, 0, PlayerAction::Stay),
        ("car 1, first 1", 0, 0, PlayerAction::Switch),
        ("car 1, first 2", 0, 1, PlayerAction::Switch),
    ];

    for (title, car, first, action) in scenarios {
        let overrides = TrialOverrides::new()
            .car_at(car)
            .first_choice(first)
            .action(action);
        let resolved = play_trial(&mut rng, &overrides)?;
        print_resolved(title, &resolved);
    }

    // Пошагово, с доской после каждой фазы.
    println!("=========== STEP BY STEP ===========");
    let player = Player::new();
    let host = Host::new();

    let game = Game::new(&mut rng)?;
    print_phase(&TrialPhase::from(game.clone()));

    let first = player.choose_first_door(game.door_count(), &mut rng)?;
    let game = game.set_first_choice(first)?;
    print_phase(&TrialPhase::from(game.clone()));

    let revealed = host.choose_door_to_reveal(&game, &mut rng)?;
    let game = game.set_host_choice(revealed)?;
    print_phase(&TrialPhase::from(game.clone()));

    let action = player.choose_action(None, &mut rng)?;
    let resolved = game.resolve(action)?;
    print_resolved("random", &resolved);

    info!("scenarios finished");
    Ok(())
}

fn print_phase(phase: &TrialPhase) {
    println!("[{}]", phase.name());
    print!("{phase}");
    println!();
}

fn print_resolved(title: &str, resolved: &ResolvedGame) {
    println!(
        "=== {title}: {} -> {} ===",
        resolved.action(),
        if resolved.is_win() { "WIN" } else { "LOSS" }
    );
    print!("{resolved}");
    for event in &resolved.history().events {
        println!("  #{} {:?}", event.index, event.kind);
    }
    println!();
}
