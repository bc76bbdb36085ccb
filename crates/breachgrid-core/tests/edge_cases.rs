//! Edge case and boundary condition tests
//!
//! These tests verify the guess comparison stays literal and the session
//! handles unusual input without moving out of a terminal phase.

use breachgrid_core::{
    evaluate_guess, BreachError, KeyChord, KeyPolicy, LivePhase, Phase, PuzzleConfig, Session,
    Verdict,
};
use web_time::Instant;

const TARGET: &str = "18.5204,73.8567";

// ============================================================================
// Comparison Tests
// ============================================================================

/// Near misses are all losses
#[test]
fn test_near_misses() {
    let near_misses = [
        "18.5204, 73.8567",
        "18.52040,73.8567",
        "18.5204,73.857",
        "18.5204 ,73.8567",
        "18,5204,73,8567",
        "73.8567,18.5204",
        "18.5204;73.8567",
        "+18.5204,73.8567",
        "18.5204,73.8567.",
    ];

    for guess in near_misses {
        assert_eq!(
            evaluate_guess(guess, TARGET),
            Verdict::Mismatch,
            "{:?} should not match",
            guess
        );
    }
}

/// Unicode whitespace around the answer is trimmed too
#[test]
fn test_unicode_whitespace_trimmed() {
    assert_eq!(evaluate_guess("\u{3000}18.5204,73.8567\u{2003}", TARGET), Verdict::Match);
}

/// Non-breaking characters inside the answer are not normalised
#[test]
fn test_fullwidth_digits_do_not_match() {
    assert_eq!(evaluate_guess("１8.5204,73.8567", TARGET), Verdict::Mismatch);
}

// ============================================================================
// Session Tests
// ============================================================================

/// Typing is free before the guess
#[test]
fn test_input_overwrites_until_submit() {
    let mut session = Session::default();
    assert!(session.set_input("1"));
    assert!(session.set_input("18"));
    assert!(session.set_input("18.5204,73.8567"));
    assert_eq!(session.input(), "18.5204,73.8567");
    assert_eq!(session.phase(), Phase::Start);
}

/// Only an empty field is refused; the session stays usable afterwards
#[test]
fn test_empty_submission_then_real_guess() {
    let mut session = Session::default();

    session.set_input("");
    assert!(matches!(
        session.submit(Instant::now()),
        Err(BreachError::EmptyGuess)
    ));
    assert_eq!(session.phase(), Phase::Start);

    session.set_input(TARGET);
    assert_eq!(session.submit(Instant::now()).unwrap(), Phase::Win);
}

/// Whitespace-only guesses use up the single attempt
#[test]
fn test_blank_guess_loses_and_arms_guard() {
    for blank in [" ", "   ", "\t\n", "\u{FEFF}"] {
        let mut session = Session::default();
        session.set_input(blank);
        let lost_at = Instant::now();

        assert_eq!(session.submit(lost_at).unwrap(), Phase::Lose, "{:?}", blank);
        assert!(session.leave_guard().is_armed());
        assert!(session.leave_guard_active(lost_at));
    }
}

/// A byte-order mark pasted with the answer is trimmed like whitespace
#[test]
fn test_byte_order_mark_trimmed() {
    assert_eq!(evaluate_guess("\u{FEFF}18.5204,73.8567", TARGET), Verdict::Match);
    assert_eq!(evaluate_guess("\u{FEFF} 18.5204,73.8567\u{FEFF}", TARGET), Verdict::Match);
    assert_eq!(evaluate_guess("18.5204,\u{FEFF}73.8567", TARGET), Verdict::Mismatch);
}

/// A won session refuses another guess too
#[test]
fn test_win_is_terminal() {
    let mut session = Session::default();
    session.set_input(TARGET);
    session.submit(Instant::now()).unwrap();

    assert!(matches!(
        session.submit(Instant::now()),
        Err(BreachError::AlreadyResolved(Phase::Win))
    ));
}

/// Custom targets compare the same way
#[test]
fn test_custom_target() {
    let config = PuzzleConfig {
        target_answer: "0,0".into(),
        ..Default::default()
    };
    let mut session = Session::new(config);
    session.set_input(" 0,0 ");
    assert_eq!(session.submit(Instant::now()).unwrap(), Phase::Win);
}

// ============================================================================
// Key Policy Tests
// ============================================================================

/// A listener reading the live cell sees the loss without re-registering
#[test]
fn test_listener_observes_phase_change() {
    let live = LivePhase::new(Phase::Start);
    let listener_view = live.clone();
    let policy = KeyPolicy;
    let escape = KeyChord::new("Escape");

    assert!(policy.classify(&escape, listener_view.get()).is_none());

    let mut session = Session::default();
    session.set_input("abc");
    live.set(session.submit(Instant::now()).unwrap());

    assert!(policy.classify(&escape, listener_view.get()).is_some());
}
