//! Unit tests for the store and playback driver.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

/// 1ms of real time per nominal duration unit keeps test arithmetic exact.
fn test_pair() -> (Store, PlaybackDriver) {
    (Store::new(), PlaybackDriver::new(1))
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Tick with a delta larger than any step's wait until playback completes.
fn run_to_completion(driver: &mut PlaybackDriver, store: &mut Store) {
    let cap = store.workflow().steps.len() + 2;
    for _ in 0..cap {
        if store.phase() == PlaybackPhase::Completed {
            return;
        }
        driver.tick(store, ms(10_000)).unwrap();
    }
    panic!("playback did not complete within {cap} ticks");
}

#[test]
fn selecting_a_workflow_always_resets_playback() {
    let (mut store, mut driver) = test_pair();
    driver.start(&mut store).unwrap();
    driver.tick(&mut store, ms(10_000)).unwrap();
    assert!(!store.playback().completed().is_empty());

    for id in WorkflowId::ALL {
        driver.select_workflow(&mut store, id);
        assert_eq!(store.playback(), &Playback::default());
        assert_eq!(store.phase(), PlaybackPhase::Idle);
    }
}

#[test]
fn workflow_change_cancels_the_pending_timer() {
    let (mut store, mut driver) = test_pair();
    driver.start(&mut store).unwrap();
    driver.select_workflow(&mut store, WorkflowId::AutoEndorsement);

    // A stale timer from the homeowners run must not fire into the new run.
    driver.tick(&mut store, ms(10_000)).unwrap();
    assert_eq!(store.phase(), PlaybackPhase::Idle);
    assert!(store.playback().completed().is_empty());
}

#[test]
fn run_to_completion_completes_every_step_in_order() {
    for id in WorkflowId::ALL {
        let (mut store, mut driver) = test_pair();
        driver.select_workflow(&mut store, id);
        driver.start(&mut store).unwrap();
        run_to_completion(&mut driver, &mut store);

        let expected: Vec<StepId> = store.workflow().steps.iter().map(|s| s.id).collect();
        assert_eq!(store.playback().completed(), expected.as_slice(), "{id}");
        assert_eq!(store.phase(), PlaybackPhase::Completed);
        assert!(!store.playback().running());
        // The pointer stays on the last valid index.
        assert_eq!(
            store.playback().current_step(),
            Some(store.workflow().steps.len() - 1)
        );
    }
}

#[test]
fn homeowners_scenario_matches_expected_numbers() {
    let (mut store, mut driver) = test_pair();
    driver.select_workflow(&mut store, WorkflowId::HomeownersNewBusiness);

    let wf = store.workflow();
    assert_eq!(wf.total_time(), 83);
    assert_eq!(wf.human_time(), 0);
    assert_eq!(wf.automation_time(), 83);

    driver.start(&mut store).unwrap();
    run_to_completion(&mut driver, &mut store);
    let completed: Vec<&str> = store
        .playback()
        .completed()
        .iter()
        .map(|id| id.as_str())
        .collect();
    assert_eq!(completed, ["intake", "rating", "quote"]);
    assert_eq!(store.phase(), PlaybackPhase::Completed);
}

#[test]
fn auto_endorsement_timing_split() {
    let (mut store, mut driver) = test_pair();
    driver.select_workflow(&mut store, WorkflowId::AutoEndorsement);
    let wf = store.workflow();
    assert_eq!(wf.human_time(), 12);
    assert_eq!(wf.automation_time(), 38);
    assert_eq!(wf.total_time(), 50);
}

#[test]
fn automation_and_human_time_partition_total_for_all_workflows() {
    for id in WorkflowId::ALL {
        let wf = meridian_fixtures::workflow(id);
        assert_eq!(wf.automation_time() + wf.human_time(), wf.total_time());
    }
}

#[test]
fn pause_at_any_step_then_reset_is_idle() {
    let steps = meridian_fixtures::workflow(WorkflowId::AutoEndorsement)
        .steps
        .len();
    for k in 0..steps {
        let (mut store, mut driver) = test_pair();
        driver.select_workflow(&mut store, WorkflowId::AutoEndorsement);
        driver.start(&mut store).unwrap();
        for _ in 0..k {
            driver.tick(&mut store, ms(10_000)).unwrap();
        }
        assert_eq!(store.playback().current_step(), Some(k));

        driver.pause(&mut store);
        assert_eq!(store.phase(), PlaybackPhase::Paused);

        driver.reset(&mut store);
        assert_eq!(store.phase(), PlaybackPhase::Idle);
        assert!(store.playback().completed().is_empty());
        assert_eq!(store.playback().current_step(), None);
    }
}

#[test]
fn pause_does_not_complete_the_in_flight_step() {
    // homeowners step 0 ("intake") has duration 47 -> 47ms at scale 1.
    let (mut store, mut driver) = test_pair();
    driver.start(&mut store).unwrap();
    driver.tick(&mut store, ms(40)).unwrap();
    driver.pause(&mut store);

    assert!(store.playback().completed().is_empty());
    assert_eq!(store.playback().current_step(), Some(0));
}

#[test]
fn resume_rearms_the_full_wait_for_the_in_flight_step() {
    let (mut store, mut driver) = test_pair();
    driver.start(&mut store).unwrap();
    driver.tick(&mut store, ms(40)).unwrap();
    driver.pause(&mut store);
    driver.start(&mut store).unwrap();

    // 40ms of the original wait elapsed before the pause; a resumed timer
    // forgets it, so another 40ms must not fire the 47ms step...
    driver.tick(&mut store, ms(40)).unwrap();
    assert!(store.playback().completed().is_empty());

    // ...but the remaining 7ms of a fresh 47ms wait does.
    driver.tick(&mut store, ms(7)).unwrap();
    assert_eq!(store.playback().completed().len(), 1);
    assert_eq!(store.playback().completed()[0].as_str(), "intake");
}

#[test]
fn double_start_arms_no_second_timer() {
    let (mut store, mut driver) = test_pair();
    driver.start(&mut store).unwrap();
    driver.tick(&mut store, ms(40)).unwrap();

    // Second start while running is ignored: the armed timer keeps its
    // elapsed 40ms rather than restarting, and no extra completion appears.
    driver.start(&mut store).unwrap();
    assert!(driver.has_pending_timer());
    driver.tick(&mut store, ms(7)).unwrap();
    assert_eq!(store.playback().completed().len(), 1);

    driver.tick(&mut store, ms(10_000)).unwrap();
    driver.tick(&mut store, ms(10_000)).unwrap();
    assert_eq!(store.phase(), PlaybackPhase::Completed);
    assert_eq!(store.playback().completed().len(), 3);
}

#[test]
fn start_is_ignored_once_completed() {
    let (mut store, mut driver) = test_pair();
    driver.start(&mut store).unwrap();
    run_to_completion(&mut driver, &mut store);

    driver.start(&mut store).unwrap();
    assert!(!driver.has_pending_timer());
    assert_eq!(store.phase(), PlaybackPhase::Completed);

    driver.reset(&mut store);
    assert_eq!(store.phase(), PlaybackPhase::Idle);
}

#[test]
fn out_of_range_step_index_is_rejected_without_corruption() {
    let mut store = Store::new();
    let steps = store.workflow().steps.len();
    let before = store.playback().clone();
    let err = store.set_current_step(steps).unwrap_err();
    assert_eq!(
        err,
        StateError::StepOutOfRange {
            workflow: store.selected_workflow(),
            index: steps,
            steps,
        }
    );
    assert_eq!(store.playback(), &before);
}

#[test]
fn duplicate_completion_surfaces_as_an_error() {
    let mut store = Store::new();
    let id = store.workflow().steps[0].id;
    store.add_completed_step(id).unwrap();
    assert!(matches!(
        store.add_completed_step(id),
        Err(StateError::DuplicateCompletion(_))
    ));
    assert_eq!(store.playback().completed().len(), 1);
}

#[test]
fn metrics_backlog_never_goes_below_zero() {
    let mut store = Store::new();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10_000 {
        store.tick_metrics(&mut rng);
    }
    // u64 can't go negative; the property worth checking is that the
    // saturating drain settled at the floor instead of wrapping.
    assert_eq!(store.metrics().endorsement_backlog, 0);
}

#[test]
fn metrics_activity_counters_are_monotonic() {
    let mut store = Store::new();
    let mut rng = StdRng::seed_from_u64(42);
    let before = *store.metrics();
    for _ in 0..100 {
        store.tick_metrics(&mut rng);
    }
    let after = store.metrics();
    assert!(after.submissions_processing >= before.submissions_processing);
    assert!(after.quotes_generated >= before.quotes_generated);
    assert!(after.policies_bound >= before.policies_bound);
    assert!(after.endorsement_backlog <= before.endorsement_backlog);
}

#[test]
fn metrics_ticker_fires_once_per_period() {
    let mut store = Store::new();
    let mut ticker = MetricsTicker::new(Duration::from_secs(5));
    let mut rng = StdRng::seed_from_u64(7);

    let before = *store.metrics();
    ticker.tick(&mut store, Duration::from_secs(4), &mut rng);
    assert_eq!(store.metrics(), &before);

    // Crossing the period boundary applies exactly the accumulated updates.
    ticker.tick(&mut store, Duration::from_secs(11), &mut rng);
    let drained = before.endorsement_backlog - store.metrics().endorsement_backlog;
    assert!(drained <= 3, "three periods drain at most 3: {drained}");
}

#[test]
fn policy_number_defaults_and_can_change() {
    let mut store = Store::new();
    assert_eq!(store.policy_number(), "HO-2026-001847");
    store.set_policy_number("UM-2026-000912");
    assert_eq!(store.policy_number(), "UM-2026-000912");
}

#[test]
fn audit_filter_narrows_and_clears() {
    let mut store = Store::new();
    let all = store.filtered_audit_trail().len();
    assert!(all > 0);

    store.set_audit_filter("rating");
    let narrowed = store.filtered_audit_trail();
    assert!(!narrowed.is_empty());
    assert!(narrowed.len() < all);
    assert!(narrowed.iter().all(|e| e.matches("rating")));

    store.set_audit_filter("no such entry anywhere");
    assert!(store.filtered_audit_trail().is_empty());

    store.set_audit_filter("");
    assert_eq!(store.filtered_audit_trail().len(), all);
}

// ----------------------------------------------------------------------
// App-level behavior
// ----------------------------------------------------------------------

fn test_app() -> App {
    let config: MeridianConfig = toml::from_str(
        r#"
        [demo]
        playback_scale_ms = 1
        "#,
    )
    .unwrap();
    App::new(&config)
}

#[test]
fn app_toggle_starts_pauses_and_resumes() {
    let mut app = test_app();
    app.toggle_playback();
    assert_eq!(app.store().phase(), PlaybackPhase::Running);

    app.tick(ms(40));
    app.toggle_playback();
    assert_eq!(app.store().phase(), PlaybackPhase::Paused);
    assert!(app.store().playback().completed().is_empty());

    app.toggle_playback();
    assert_eq!(app.store().phase(), PlaybackPhase::Running);
}

#[test]
fn app_tick_drives_playback_to_completion() {
    let mut app = test_app();
    app.toggle_playback();
    for _ in 0..10 {
        app.tick(ms(10_000));
    }
    assert_eq!(app.store().phase(), PlaybackPhase::Completed);
    assert_eq!(app.store().playback().completed().len(), 3);
}

#[test]
fn app_cycle_workflow_resets_progress() {
    let mut app = test_app();
    app.toggle_playback();
    app.tick(ms(10_000));
    assert!(!app.store().playback().completed().is_empty());

    app.cycle_workflow();
    assert_eq!(app.store().selected_workflow(), WorkflowId::AutoEndorsement);
    assert_eq!(app.store().phase(), PlaybackPhase::Idle);
    assert!(app.store().playback().completed().is_empty());
}

#[test]
fn app_agent_selection_wraps_both_ways() {
    let mut app = test_app();
    let roster = meridian_fixtures::agents();

    app.select_next_agent();
    assert_eq!(app.store().selected_agent(), Some(roster[0].id));

    app.select_prev_agent();
    assert_eq!(
        app.store().selected_agent(),
        Some(roster[roster.len() - 1].id)
    );

    app.clear_agent_selection();
    assert_eq!(app.store().selected_agent(), None);
}

#[test]
fn app_filter_editing_round_trip() {
    let mut app = test_app();
    app.begin_filter_edit();
    assert!(app.is_editing_filter());
    for c in "Rating".chars() {
        app.push_filter_char(c);
    }
    assert_eq!(app.store().audit_filter(), "Rating");
    app.pop_filter_char();
    assert_eq!(app.store().audit_filter(), "Ratin");
    app.clear_filter();
    assert_eq!(app.store().audit_filter(), "");
    assert!(!app.is_editing_filter());
}

#[test]
fn app_sections_cycle_with_keys() {
    let mut app = test_app();
    assert_eq!(app.store().active_section(), Section::Overview);
    app.next_section();
    assert_eq!(app.store().active_section(), Section::Architecture);
    app.prev_section();
    app.prev_section();
    assert_eq!(app.store().active_section(), Section::Compliance);
    app.goto_section(Section::Workflows);
    assert_eq!(app.store().active_section(), Section::Workflows);
}

#[test]
fn metrics_tick_is_independent_of_playback() {
    let mut app = test_app();
    app.toggle_playback();
    // Metrics default period is 5s; a long tick mid-playback updates both
    // without either blocking the other.
    app.tick(Duration::from_secs(6));
    assert!(app.store().playback().completed().len() <= app.store().workflow().steps.len());
    // Playback still progresses on subsequent ticks.
    for _ in 0..10 {
        app.tick(ms(10_000));
    }
    assert_eq!(app.store().phase(), PlaybackPhase::Completed);
}
