use quiz_core::Event;

use super::test_harness::{sample_questions, setup_quiz_harness};

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_loads_into_start_screen() {
    let mut harness = setup_quiz_harness(sample_questions());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Loading questions"), "missing loader in {html}");

    let html = harness.drive_until("questions to test your knowledge").await;
    assert!(html.contains("2 questions"), "missing count in {html}");
    assert!(html.contains("Test Quiz"), "missing title in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_shows_error_for_empty_source() {
    let mut harness = setup_quiz_harness(Vec::new());
    harness.rebuild();

    let html = harness.drive_until("error fetching questions").await;
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_walks_through_to_finish_and_restart() {
    let mut harness = setup_quiz_harness(sample_questions());
    harness.rebuild();
    harness.drive_until("questions to test your knowledge").await;

    harness.dispatch(Event::Start);
    let html = harness.render();
    assert!(html.contains("Which hook stores state?"), "missing question in {html}");
    assert!(html.contains("01:00"), "missing timer in {html}");
    assert!(!html.contains("quiz-next"), "next shown before answering in {html}");

    harness.dispatch(Event::Tick);
    let html = harness.render();
    assert!(html.contains("00:59"), "timer did not count down in {html}");

    harness.dispatch(Event::Answer { option_index: 1 });
    let html = harness.render();
    assert!(html.contains("answer correct"), "missing feedback in {html}");
    assert!(html.contains("quiz-next"), "missing next button in {html}");

    harness.dispatch(Event::Next);
    harness.dispatch(Event::Answer { option_index: 2 });
    let html = harness.render();
    assert!(html.contains("What does JSX compile to?"), "missing second question in {html}");
    assert!(html.contains("Finish"), "missing finish label in {html}");

    harness.dispatch(Event::Next);
    let html = harness.render();
    assert!(html.contains("out of 30 (33%)"), "missing result in {html}");
    assert!(html.contains("(Highscore: 10 points)"), "missing high score in {html}");

    harness.dispatch(Event::Restart);
    let html = harness.render();
    assert!(html.contains("questions to test your knowledge"), "restart did not return to start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_surfaces_rejected_event() {
    let mut harness = setup_quiz_harness(sample_questions());
    harness.rebuild();
    harness.drive_until("questions to test your knowledge").await;

    harness.dispatch(Event::Start);
    harness.dispatch(Event::Next);

    let html = harness.render();
    assert!(html.contains("The quiz stopped"), "missing fatal panel in {html}");
    assert!(html.contains("has no answer yet"), "missing error text in {html}");
}
