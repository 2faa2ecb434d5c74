//! End-to-end tests for the poll loop, driven with paused time.
//!
//! `tokio::time::pause` auto-advances the clock whenever every task is
//! blocked on a timer, so the 600-second sleeps between cycles complete
//! instantly while preserving their ordering guarantees.

use std::time::Duration;

use hwwatch::app::App;
use hwwatch::testkit::{
    bad_status_error, homework_response, test_config, RecordingNotifier, ScriptedApi,
};

/// Poll `condition` until it holds. Only terminates under paused time or a
/// surrounding timeout.
async fn wait_until(condition: impl Fn() -> bool) {
    while !condition() {
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}

#[tokio::test(start_paused = true)]
async fn loop_sleeps_and_continues_after_fetch_failure() {
    let config = test_config("http://localhost/");
    let api = ScriptedApi::new(homework_response("hw1", "reviewing"));
    api.push_error(bad_status_error());
    let notifier = RecordingNotifier::new();

    let app = App::new(&config, &api, &notifier);
    let run = app.run();
    tokio::pin!(run);

    // First cycle fails and reports the error; the unconditional sleep must
    // still run, after which the second cycle delivers the status.
    tokio::select! {
        () = &mut run => unreachable!("the loop never returns"),
        () = wait_until(|| notifier.sent().len() >= 2) => {}
    }

    let sent = notifier.sent();
    assert!(
        sent[0].starts_with("Сбой в работе программы:"),
        "first message is the error report, got: {}",
        sent[0]
    );
    assert!(
        sent[0].contains("returned status"),
        "error report carries the failure description, got: {}",
        sent[0]
    );
    assert_eq!(
        sent[1],
        "Изменился статус проверки работы \"hw1\". Работа взята на проверку ревьюером."
    );
    assert!(api.calls() >= 2, "the loop kept polling after the failure");
}

#[tokio::test(start_paused = true)]
async fn loop_notifies_at_most_once_for_identical_statuses() {
    let config = test_config("http://localhost/");
    let api = ScriptedApi::new(homework_response("hw1", "approved"));
    let notifier = RecordingNotifier::new();

    let app = App::new(&config, &api, &notifier);
    let run = app.run();
    tokio::pin!(run);

    tokio::select! {
        () = &mut run => unreachable!("the loop never returns"),
        () = wait_until(|| api.calls() >= 4) => {}
    }

    assert_eq!(
        notifier.sent().len(),
        1,
        "an unchanged status is notified exactly once across cycles"
    );
}

#[tokio::test(start_paused = true)]
async fn unknown_status_sends_error_report_not_status_message() {
    let config = test_config("http://localhost/");
    let api = ScriptedApi::new(homework_response("hw1", "unknown"));
    let notifier = RecordingNotifier::new();

    let app = App::new(&config, &api, &notifier);
    let run = app.run();
    tokio::pin!(run);

    tokio::select! {
        () = &mut run => unreachable!("the loop never returns"),
        () = wait_until(|| !notifier.sent().is_empty()) => {}
    }

    let sent = notifier.sent();
    assert!(sent[0].starts_with("Сбой в работе программы:"));
    assert!(
        sent[0].contains("unknown homework status: unknown"),
        "report names the offending status, got: {}",
        sent[0]
    );
    assert!(
        !sent.iter().any(|m| m.starts_with("Изменился статус")),
        "no status message goes out for an unknown status"
    );
}
