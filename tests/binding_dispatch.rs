//! Region dispatch and error-with-content reporting through a controller.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::*;
use parking_lot::Mutex;
use stateful::binding::{Message, Region, StateBinder};
use stateful::controller::StateController;
use stateful::provider::ContentProvider;
use stateful::state::State;

type Controller = StateController<ManualSource<Numbers, TestError>, RecordingView>;

struct Harness {
    controller: Controller,
    pending: Pending<Numbers, TestError>,
    alerts: Arc<Mutex<Vec<TestError>>>,
}

fn harness(binder: StateBinder<Numbers>) -> Harness {
    let (source, pending) = ManualSource::new();
    let alerts = Arc::new(Mutex::new(Vec::new()));
    let controller = StateController::new(ContentProvider::new(source), binder, RecordingView::default(), {
        let alerts = Arc::clone(&alerts);
        move |error: &TestError| alerts.lock().push(error.clone())
    });
    controller.with_view(|view| view.take());

    Harness {
        controller,
        pending,
        alerts,
    }
}

fn with_placeholder() -> StateBinder<Numbers> {
    StateBinder::emptiable().with_placeholder(placeholder())
}

#[test]
fn fresh_controller_shows_loading() {
    let (source, _pending) = ManualSource::<Numbers, TestError>::new();
    let controller = StateController::new(
        ContentProvider::new(source),
        with_placeholder(),
        RecordingView::default(),
        |_: &TestError| {},
    );
    assert_eq!(controller.with_view(|view| view.calls.clone()), vec![Bound::Loading]);
}

#[test]
fn loaded_content_goes_to_content_region() {
    let h = harness(with_placeholder());
    h.controller.reload();
    h.pending.oldest().succeed(vec![1, 2, 3]);

    assert_eq!(
        h.controller.with_view(|view| view.take()),
        vec![
            Bound::Loading,
            Bound::Content(vec![1, 2, 3]),
            Bound::Refreshing(false),
        ]
    );
}

#[test]
fn reload_over_content_keeps_content_visible() {
    let h = harness(with_placeholder());
    h.controller.reload();
    h.pending.oldest().succeed(vec![1]);
    h.controller.with_view(|view| view.take());

    h.controller.reload();
    assert_eq!(
        h.controller.with_view(|view| view.take()),
        vec![Bound::Content(vec![1]), Bound::Refreshing(true)]
    );
}

#[test]
fn empty_content_shows_placeholder_in_every_variant() {
    let h = harness(with_placeholder());
    h.controller.reload();
    h.pending.oldest().succeed(vec![]);
    h.controller.reload();
    h.pending.oldest().fail(E);

    assert_eq!(
        h.controller.with_view(|view| view.take()),
        vec![
            Bound::Loading,
            Bound::Message(placeholder()),
            Bound::Message(placeholder()),
            Bound::Message(placeholder()),
        ]
    );
    assert!(h.alerts.lock().is_empty());
}

#[test]
fn failure_without_content_goes_to_error_region() {
    let h = harness(with_placeholder());
    h.controller.reload();
    h.pending.oldest().fail(E);

    assert_eq!(
        h.controller.with_view(|view| view.take()),
        vec![Bound::Loading, Bound::Error(E)]
    );
    assert!(h.alerts.lock().is_empty());
}

#[test]
fn failure_with_content_alerts_exactly_once_and_keeps_content() {
    let h = harness(with_placeholder());
    h.controller.reload();
    h.pending.oldest().succeed(vec![1, 2, 3, 4, 5]);
    h.controller.reload();
    h.controller.with_view(|view| view.take());

    h.pending.oldest().fail(E);

    assert_eq!(
        h.controller.with_view(|view| view.take()),
        vec![Bound::Content(vec![1, 2, 3, 4, 5]), Bound::Refreshing(false)]
    );
    assert_eq!(*h.alerts.lock(), vec![E]);
    assert_eq!(
        h.controller.state(),
        State::Failed {
            error: E,
            content: Some(vec![1, 2, 3, 4, 5])
        }
    );

    // Unrelated rebinds do not repeat the alert.
    h.controller.set_placeholder(Message::new("Nothing here"));
    assert_eq!(h.alerts.lock().len(), 1);
}

#[test]
fn each_failed_reload_alerts_again() {
    let h = harness(with_placeholder());
    h.controller.reload();
    h.pending.oldest().succeed(vec![1]);

    for _ in 0..2 {
        h.controller.reload();
        h.pending.oldest().fail(E);
    }
    assert_eq!(h.alerts.lock().len(), 2);
}

/// Unresolved precedence case: a failed reload whose retained content is
/// empty, with no placeholder configured. Emptiness keeps the content from
/// counting as meaningful, so the failure takes the error region and no
/// error-with-content alert fires.
#[test]
fn failure_over_empty_content_without_placeholder_shows_error() {
    let h = harness(StateBinder::emptiable());
    h.controller.reload();
    h.pending.oldest().succeed(vec![]);
    h.controller.reload();
    h.controller.with_view(|view| view.take());

    h.pending.oldest().fail(E);

    assert_eq!(h.controller.with_view(|view| view.take()), vec![Bound::Error(E)]);
    assert!(h.alerts.lock().is_empty());
}

#[test]
fn empty_content_without_placeholder_is_shown_as_content() {
    let h = harness(StateBinder::emptiable());
    h.controller.reload();
    h.pending.oldest().succeed(vec![]);

    assert_eq!(
        h.controller.with_view(|view| view.take()),
        vec![Bound::Loading, Bound::Content(vec![]), Bound::Refreshing(false)]
    );
}

#[test]
fn setting_placeholder_rebinds_current_state() {
    let h = harness(StateBinder::emptiable());
    h.controller.reload();
    h.pending.oldest().succeed(vec![]);
    h.controller.with_view(|view| view.take());

    h.controller.set_placeholder(placeholder());

    assert_eq!(h.controller.placeholder(), placeholder());
    assert_eq!(h.controller.with_view(|view| view.take()), vec![Bound::Message(placeholder())]);
}

#[test]
fn view_access_is_released_before_the_next_publish() {
    let h = harness(with_placeholder());
    assert!(h.controller.with_view(|view| view.calls.is_empty()));

    // Each call below binds into the view, so none may find it still locked.
    h.controller.reload();
    h.pending.oldest().succeed(vec![4]);
    h.controller.set_placeholder(Message::new("Still nothing"));
    h.controller.purge();

    assert_eq!(
        h.controller.with_view(|view| view.take()),
        vec![
            Bound::Loading,
            Bound::Content(vec![4]),
            Bound::Refreshing(false),
            Bound::Content(vec![4]),
            Bound::Refreshing(false),
            Bound::Loading,
        ]
    );
}

#[test]
fn dropping_controller_stops_binding() {
    let (source, pending) = ManualSource::<Numbers, TestError>::new();
    let provider_calls = Arc::new(AtomicUsize::new(0));
    let controller = StateController::new(
        ContentProvider::new(source),
        with_placeholder(),
        RecordingView::default(),
        {
            let provider_calls = Arc::clone(&provider_calls);
            move |_: &TestError| {
                provider_calls.fetch_add(1, Ordering::SeqCst);
            }
        },
    );
    let store = controller.provider().state().clone();
    controller.reload();
    drop(controller);

    assert_eq!(store.subscriber_count(), 0);
    pending.oldest().fail(E);
    assert_eq!(provider_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn region_of_each_dispatch() {
    let binder = with_placeholder();
    let cases = [
        (State::Loading { content: None }, Region::Loading),
        (State::Loading { content: Some(vec![1]) }, Region::Content),
        (State::Present { content: vec![] }, Region::Error),
        (State::Failed { error: E, content: None }, Region::Error),
        (State::Failed { error: E, content: Some(vec![1]) }, Region::Content),
    ];
    for (state, region) in cases {
        let state: NumbersState = state;
        assert_eq!(binder.dispatch(&state).region(), region, "{state:?}");
    }
}
