//! Драйвер симуляции и агрегирование.

use monty_hall::domain::TrialResult;
use monty_hall::engine::PlayerAction;
use monty_hall::infra::DeterministicRng;
use monty_hall::simulation::{AggregateStatistics, Simulation, SimulationReport};

fn results(pairs: &[(PlayerAction, bool)]) -> Vec<TrialResult> {
    pairs.iter().map(|&(a, w)| TrialResult::new(a, w)).collect()
}

//
// TEST 1 — counts split by (action, outcome)
//
#[test]
fn statistics_count_every_combination() {
    use PlayerAction::*;
    let rs = results(&[
        (Switch, true),
        (Switch, true),
        (Switch, false),
        (Stay, true),
        (Stay, false),
        (Stay, false),
        (Stay, false),
    ]);

    let stats = AggregateStatistics::from_results(&rs);
    assert_eq!(stats.trials, 7);
    assert_eq!(stats.won_switching, 2);
    assert_eq!(stats.lost_switching, 1);
    assert_eq!(stats.won_staying, 1);
    assert_eq!(stats.lost_staying, 3);
    assert_eq!(stats.switches(), 3);
    assert_eq!(stats.stays(), 4);

    assert!((stats.win_rate_given(Switch) - 2.0 / 3.0).abs() < 1e-12);
    assert!((stats.win_rate_overall(Switch) - 2.0 / 7.0).abs() < 1e-12);
    assert!((stats.loss_rate_given(Stay) - 0.75).abs() < 1e-12);
    assert!((stats.loss_rate_overall(Stay) - 3.0 / 7.0).abs() < 1e-12);
}

//
// TEST 2 — empty input and missing action never give NaN
//
#[test]
fn statistics_without_trials_are_zero() {
    let empty = AggregateStatistics::from_results(&[]);
    assert_eq!(empty, AggregateStatistics::default());
    assert_eq!(empty.win_rate_overall(PlayerAction::Switch), 0.0);

    let only_stay = AggregateStatistics::from_results(&results(&[(PlayerAction::Stay, true)]));
    assert_eq!(only_stay.win_rate_given(PlayerAction::Switch), 0.0);
    assert_eq!(only_stay.win_rate_given(PlayerAction::Stay), 1.0);
}

//
// TEST 3 — the run produces exactly N results
//
#[test]
fn run_produces_one_result_per_trial() {
    let run = Simulation::new(1_234)
        .run(&mut DeterministicRng::from_u64(1))
        .unwrap();

    assert_eq!(run.results().len(), 1_234);
    let stats = run.statistics();
    assert_eq!(stats.trials, 1_234);
    assert_eq!(stats.switches() + stats.stays(), 1_234);
}

//
// TEST 4 — switching wins ~2/3, staying ~1/3
//
#[test]
fn switching_converges_to_two_thirds() {
    let run = Simulation::new(200_000)
        .run(&mut DeterministicRng::from_u64(20240501))
        .unwrap();
    let stats = run.statistics();

    let p_switch = stats.win_rate_given(PlayerAction::Switch);
    let p_stay = stats.win_rate_given(PlayerAction::Stay);

    assert!((p_switch - 2.0 / 3.0).abs() < 0.01, "P(win | switch) = {p_switch}");
    assert!((p_stay - 1.0 / 3.0).abs() < 0.01, "P(win | stay) = {p_stay}");

    let share_switch = stats.switches() as f64 / stats.trials as f64;
    assert!((share_switch - 0.5).abs() < 0.01, "switch share = {share_switch}");
}

//
// TEST 5 — same seed, same aggregate
//
#[test]
fn seeded_runs_are_reproducible() {
    let a = Simulation::new(5_000).run(&mut DeterministicRng::from_u64(9)).unwrap();
    let b = Simulation::new(5_000).run(&mut DeterministicRng::from_u64(9)).unwrap();

    assert_eq!(a.results(), b.results());
    assert_eq!(a.statistics(), b.statistics());
}

//
// TEST 6 — report numbers and text
//
#[test]
fn report_matches_statistics() {
    use PlayerAction::*;
    let stats = AggregateStatistics::from_results(&results(&[
        (Switch, true),
        (Switch, false),
        (Stay, false),
        (Stay, false),
    ]));
    let report = SimulationReport::from_statistics(&stats);

    assert_eq!(report.trials, 4);
    assert_eq!(report.switch.taken, 2);
    assert_eq!(report.switch.won, 1);
    assert!((report.switch.won_pct_of_total - 25.0).abs() < 1e-9);
    assert!((report.switch.won_pct_on_action - 50.0).abs() < 1e-9);
    assert!((report.stay.lost_pct_on_action - 100.0).abs() < 1e-9);

    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "2 DOOR SWITCHES and 2 STAYS WITH ORIGINAL DOOR");
    assert_eq!(
        lines[1],
        "1 won by SWITCHING original choice (25.00% on total, 50.00% on SWITCH)"
    );
    assert_eq!(
        lines[4],
        "2 lost by STAYING on original choice (50.00% on total, 100.00% on STAY)"
    );
}

//
// TEST 7 — JSON report round-trips through serde_json
//
#[test]
fn report_serializes_to_json() {
    let run = Simulation::new(100).run(&mut DeterministicRng::from_u64(3)).unwrap();
    let report = run.report();
    assert!(report.elapsed_ms.is_some());

    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["trials"], 100);
    assert!(value["switch"]["won"].is_u64());
    assert!(value["stay"]["won_pct_on_action"].is_f64());
}
