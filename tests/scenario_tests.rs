//! Фиксированные сценарии с принудительной расстановкой и решениями.

use monty_hall::engine::PlayerAction;
use monty_hall::infra::{DeterministicRng, RecordingRng, ScriptedRng};
use monty_hall::simulation::{play_trial, TrialOverrides};

//
// Автомобиль за дверью 0, игрок выбрал 0, остаётся -> выигрыш.
//
#[test]
fn car_first_choice_and_stay_wins() {
    let overrides = TrialOverrides::new()
        .car_at(0)
        .first_choice(0)
        .action(PlayerAction::Stay);

    let resolved = play_trial(&mut DeterministicRng::from_u64(1), &overrides).unwrap();
    assert!(resolved.is_win());
    assert_eq!(resolved.final_choice(), 0);
}

//
// То же, но switch -> проигрыш (какую бы козу ни открыл ведущий).
//
#[test]
fn car_first_choice_and_switch_loses() {
    for host_draw in 0..2 {
        let overrides = TrialOverrides::new()
            .car_at(0)
            .first_choice(0)
            .action(PlayerAction::Switch);

        let resolved = play_trial(&mut ScriptedRng::new([host_draw]), &overrides).unwrap();
        assert!(!resolved.is_win());
        assert_ne!(resolved.final_choice(), 0);
    }
}

//
// Автомобиль за 0, игрок выбрал 1 -> ведущий обязан открыть 2, switch выигрывает.
//
#[test]
fn goat_first_choice_forces_host_and_switch_wins() {
    let overrides = TrialOverrides::new()
        .car_at(0)
        .first_choice(1)
        .action(PlayerAction::Switch);

    let mut rng = RecordingRng::new(DeterministicRng::from_u64(3));
    let resolved = play_trial(&mut rng, &overrides).unwrap();

    assert_eq!(resolved.host_choice(), 2);
    assert_eq!(resolved.final_choice(), 0);
    assert!(resolved.is_win());
    assert!(rng.draws().is_empty(), "fully forced trial must not draw");
}

//
// Реплей: та же последовательность розыгрышей -> тот же результат.
//
#[test]
fn replaying_recorded_draws_reproduces_trials() {
    let mut recorder = RecordingRng::new(DeterministicRng::from_u64(2718));
    let overrides = TrialOverrides::new();

    let originals: Vec<_> = (0..200)
        .map(|_| play_trial(&mut recorder, &overrides).unwrap())
        .collect();

    let mut replay = recorder.into_script();
    for original in &originals {
        let replayed = play_trial(&mut replay, &overrides).unwrap();
        assert_eq!(&replayed, original);
    }
    assert_eq!(replay.remaining(), 0);
}

//
// Один и тот же seed -> одни и те же TrialResult.
//
#[test]
fn same_seed_same_results() {
    let overrides = TrialOverrides::new().action(PlayerAction::Switch);
    let mut a = DeterministicRng::from_u64(55);
    let mut b = DeterministicRng::from_u64(55);

    for _ in 0..100 {
        let ra = play_trial(&mut a, &overrides).unwrap().result();
        let rb = play_trial(&mut b, &overrides).unwrap().result();
        assert_eq!(ra, rb);
        assert_eq!(ra.action, PlayerAction::Switch);
    }
}
