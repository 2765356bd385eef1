//! Integration tests for the DishWasher → ports pipeline.
//!
//! Every test drives the controller against recording mocks and checks
//! both the returned status and the exact calls made on the hardware.

use dishwasher::app::events::WashEvent;
use dishwasher::app::result::Status;
use dishwasher::fsm::WashState;
use dishwasher::program::{FillLevel, WashingProgram};

use super::mock_hw::{Call, Rig, basic_request, request};

// ── Door ──────────────────────────────────────────────────────

#[test]
fn door_open_returns_door_open_without_locking() {
    let (mut washer, log) = Rig::new().door_open().build();

    let result = washer.start(&basic_request());

    assert_eq!(result.status(), Status::DoorOpen);
    assert_eq!(log.calls(), vec![Call::Closed], "only the door query may run");
}

#[test]
fn door_is_queried_exactly_once() {
    for rig in [Rig::new(), Rig::new().door_open()] {
        let (mut washer, log) = rig.build();
        washer.start(&basic_request());
        assert_eq!(log.count(Call::Closed), 1);
    }
}

// ── Filter ────────────────────────────────────────────────────

#[test]
fn dirty_filter_returns_error_filter_without_actuation() {
    let (mut washer, log) = Rig::new().capacity(10.0).build();

    let result = washer.start(&basic_request());

    assert_eq!(result.status(), Status::ErrorFilter);
    assert!(log.actuations().is_empty(), "pump/engine must not run");
    assert_eq!(log.count(Call::Lock), 1);
    assert_eq!(log.count(Call::Unlock), 1);
}

#[test]
fn filter_checked_once_when_tablets_used() {
    let (mut washer, log) = Rig::new().build();
    washer.start(&basic_request());
    assert_eq!(log.count(Call::Capacity), 1);
}

#[test]
fn tablets_not_used_skips_filter_and_succeeds() {
    let (mut washer, log) = Rig::new().capacity(10.0).build();

    let result = washer.start(&request(WashingProgram::Eco, false, FillLevel::Full));

    assert_eq!(result.status(), Status::Success);
    assert_eq!(log.count(Call::Capacity), 0, "filter must not be queried");
}

#[test]
fn filter_at_threshold_passes() {
    let (mut washer, _log) = Rig::new().capacity(50.0).build();
    assert_eq!(washer.start(&basic_request()).status(), Status::Success);
}

// ── Pump / engine ─────────────────────────────────────────────

#[test]
fn pour_failure_returns_error_pump_and_still_unlocks() {
    let (mut washer, log) = Rig::new().fail_pour().build();

    let result = washer.start(&basic_request());

    assert_eq!(result.status(), Status::ErrorPump);
    assert_eq!(log.program_runs(), 0);
    assert_eq!(log.count(Call::Drain), 0);
    assert_eq!(log.count(Call::Unlock), 1);
}

#[test]
fn engine_failure_returns_error_program_without_drain() {
    let (mut washer, log) = Rig::new().fail_engine().build();

    let result = washer.start(&basic_request());

    assert_eq!(result.status(), Status::ErrorProgram);
    assert_eq!(log.pours(), 1);
    assert_eq!(log.count(Call::Drain), 0, "engine failure aborts before drain");
    assert_eq!(log.count(Call::Unlock), 1);
}

#[test]
fn drain_failure_returns_error_pump() {
    let (mut washer, log) = Rig::new().fail_drain().build();

    let result = washer.start(&basic_request());

    assert_eq!(result.status(), Status::ErrorPump);
    assert_eq!(result.run_minutes(), 0);
    assert_eq!(log.count(Call::Drain), 1);
    assert_eq!(log.count(Call::Unlock), 1);
}

#[test]
fn rinse_runs_full_sequence_once_in_order() {
    let (mut washer, log) = Rig::new().build();

    let result = washer.start(&request(WashingProgram::Rinse, true, FillLevel::Full));

    assert_eq!(result.status(), Status::Success);
    assert_eq!(
        log.calls(),
        vec![
            Call::Closed,
            Call::Lock,
            Call::Capacity,
            Call::Pour(FillLevel::Full),
            Call::RunProgram(WashingProgram::Rinse),
            Call::Drain,
            Call::Unlock,
        ]
    );
}

#[test]
fn half_fill_level_reaches_the_pump() {
    let (mut washer, log) = Rig::new().build();
    washer.start(&request(WashingProgram::Intensive, false, FillLevel::Half));
    assert_eq!(log.count(Call::Pour(FillLevel::Half)), 1);
    assert_eq!(log.count(Call::RunProgram(WashingProgram::Intensive)), 1);
}

// ── Door lock guarantees ──────────────────────────────────────

#[test]
fn lock_and_unlock_exactly_once_on_every_locked_path() {
    let rigs = [
        Rig::new(),
        Rig::new().capacity(10.0),
        Rig::new().fail_pour(),
        Rig::new().fail_engine(),
        Rig::new().fail_drain(),
    ];
    for rig in rigs {
        let (mut washer, log) = rig.build();
        let status = washer.start(&basic_request()).status();

        assert_eq!(log.count(Call::Lock), 1, "lock count for {status}");
        assert_eq!(log.count(Call::Unlock), 1, "unlock count for {status}");

        let calls = log.calls();
        assert_eq!(calls[1], Call::Lock, "lock follows the door query for {status}");
        assert_eq!(calls.last(), Some(&Call::Unlock), "unlock is last for {status}");
    }
}

// ── Results and events ────────────────────────────────────────

#[test]
fn success_reports_program_run_time() {
    let (mut washer, _log) = Rig::new().build();
    for program in WashingProgram::ALL {
        let result = washer.start(&request(program, true, FillLevel::Full));
        assert_eq!(result.status(), Status::Success);
        assert_eq!(result.run_minutes(), program.run_minutes());
    }
}

#[test]
fn successful_wash_emits_every_transition() {
    let (mut washer, _log) = Rig::new().build();
    let result = washer.start(&basic_request());

    let transitions: Vec<(WashState, WashState)> = washer
        .sink()
        .events
        .iter()
        .filter_map(|e| match e {
            WashEvent::StateChanged { from, to } => Some((*from, *to)),
            _ => None,
        })
        .collect();
    assert_eq!(
        transitions,
        vec![
            (WashState::CheckDoor, WashState::LockedCheckFilter),
            (WashState::LockedCheckFilter, WashState::Filling),
            (WashState::Filling, WashState::Washing),
            (WashState::Washing, WashState::Draining),
            (WashState::Draining, WashState::Done),
        ]
    );
    assert_eq!(washer.sink().events.last(), Some(&WashEvent::Finished(result)));
}

#[test]
fn controller_runs_consecutive_washes() {
    let (mut washer, log) = Rig::new().build();

    assert_eq!(washer.start(&basic_request()).status(), Status::Success);
    log.clear();
    assert_eq!(
        washer.start(&request(WashingProgram::Night, false, FillLevel::Half)).status(),
        Status::Success
    );
    assert_eq!(log.count(Call::Lock), 1);
    assert_eq!(log.count(Call::Unlock), 1);
    assert_eq!(log.count(Call::Capacity), 0);
}
