//! Relay panel controller: every user action of the panel.
//!
//! Each operation validates its relay id, flags the relay as loading, sends a
//! single backend request and then re-reads the relay's status. Failures are
//! surfaced as notifications and also returned to the caller; they never
//! leave a relay in the loading state and never affect other relays.

use futures::future::join_all;
use relaypanel_domain::command::RelayCommand;
use relaypanel_domain::error::PanelError;
use relaypanel_domain::labels::Labels;
use relaypanel_domain::notification::Notification;
use relaypanel_domain::relay::{RelayCount, RelayId, RelayState};
use relaypanel_domain::timing::PanelTimings;

use crate::ports::{PanelView, RelayBackend, Timer};
use crate::services::click_guard::{ClickGuard, Control};
use crate::services::sequencer::StatusSequencer;

/// Outcome of an operation on one relay of a fan-out.
pub type RelayOutcome = (RelayId, Result<RelayState, PanelError>);

/// Static configuration of a panel.
#[derive(Debug, Clone, Default)]
pub struct PanelConfig {
    pub relay_count: RelayCount,
    pub timings: PanelTimings,
    pub labels: Labels,
}

/// Use-case driver of the panel.
pub struct RelayPanelController<B, V, T> {
    backend: B,
    view: V,
    timer: T,
    config: PanelConfig,
    sequencer: StatusSequencer,
    clicks: ClickGuard,
}

impl<B, V, T> RelayPanelController<B, V, T>
where
    B: RelayBackend,
    V: PanelView,
    T: Timer,
{
    /// Create a controller over the given ports.
    pub fn new(backend: B, view: V, timer: T, config: PanelConfig) -> Self {
        Self {
            backend,
            view,
            timer,
            config,
            sequencer: StatusSequencer::new(),
            clicks: ClickGuard::new(),
        }
    }

    /// Drive one relay to `state`, then refresh it.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::InvalidRelayId`] without sending anything when
    /// `relay` is out of range, or [`PanelError::Backend`] when the command or
    /// the follow-up status query fails.
    pub async fn set_relay(&self, relay: i64, state: RelayState) -> Result<RelayState, PanelError> {
        let relay = self.validate(relay)?;
        self.run_relay_command(relay, RelayCommand::set(relay, state))
            .await
    }

    /// Flip one relay, then refresh it.
    ///
    /// # Errors
    ///
    /// Same as [`set_relay`](Self::set_relay).
    pub async fn toggle_relay(&self, relay: i64) -> Result<RelayState, PanelError> {
        let relay = self.validate(relay)?;
        self.run_relay_command(relay, RelayCommand::Toggle(relay))
            .await
    }

    /// Power-cycle one relay on the backend, then refresh it.
    ///
    /// # Errors
    ///
    /// Same as [`set_relay`](Self::set_relay).
    pub async fn reboot_relay(&self, relay: i64) -> Result<RelayState, PanelError> {
        let relay = self.validate(relay)?;
        self.run_relay_command(relay, RelayCommand::Reboot(relay))
            .await
    }

    /// Toggle every relay. The toggles are started in id order and run
    /// concurrently; each one succeeds or fails on its own.
    pub async fn toggle_all(&self) -> Vec<RelayOutcome> {
        tracing::debug!(relays = %self.config.relay_count, "toggling all relays");
        join_all(
            self.config
                .relay_count
                .ids()
                .map(|relay| async move { (relay, self.toggle_relay(relay.into()).await) }),
        )
        .await
    }

    /// Drive every relay to `state` with a single aggregate request, then
    /// refresh all of them.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Backend`] when the aggregate request fails. In
    /// that case no status is refreshed.
    pub async fn set_all(&self, state: RelayState) -> Result<Vec<RelayOutcome>, PanelError> {
        let command = RelayCommand::set_all(state);
        let relays = self.config.relay_count.ids();
        for relay in relays.clone() {
            self.view.set_loading(relay, true);
        }

        tracing::debug!(%command, "sending aggregate command");
        if let Err(err) = self.backend.send(command).await {
            tracing::warn!(%command, error = %err, "aggregate command failed");
            for relay in relays {
                self.view.set_loading(relay, false);
            }
            self.view
                .notify(Notification::server_error(&self.config.labels));
            return Err(err.into());
        }

        self.timer.sleep(self.config.timings.aggregate_settle).await;
        Ok(join_all(relays.map(|relay| async move {
            self.view.set_loading(relay, false);
            (relay, self.refresh(relay, false).await)
        }))
        .await)
    }

    /// Read one relay's status and render it; with `announce`, also show it
    /// in a transient dialog.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::InvalidRelayId`] when `relay` is out of range, or
    /// [`PanelError::Backend`] when the query fails. The failure is only
    /// notified when `announce` is set.
    pub async fn get_relay_status(&self, relay: i64, announce: bool) -> Result<RelayState, PanelError> {
        let relay = self.validate(relay)?;
        self.refresh(relay, announce).await
    }

    /// The per-relay "status" button.
    ///
    /// # Errors
    ///
    /// Same as [`get_relay_status`](Self::get_relay_status).
    pub async fn show_relay_status(&self, relay: i64) -> Result<RelayState, PanelError> {
        self.get_relay_status(relay, true).await
    }

    /// Read and render every relay's status, silently.
    pub async fn load_all_statuses(&self) -> Vec<RelayOutcome> {
        join_all(
            self.config
                .relay_count
                .ids()
                .map(|relay| async move { (relay, self.refresh(relay, false).await) }),
        )
        .await
    }

    /// Initial load, once the page has settled.
    pub async fn start(&self) -> Vec<RelayOutcome> {
        self.timer.sleep(self.config.timings.startup_delay).await;
        tracing::info!(relays = %self.config.relay_count, "loading relay statuses");
        self.load_all_statuses().await
    }

    /// Handle a click on `control`.
    ///
    /// Returns `false` when the control is still cooling down from a previous
    /// click, in which case nothing happens. Otherwise runs the action while
    /// the cool-down elapses and returns `true` once both are over.
    ///
    /// Callers that must re-enable the control as soon as the cool-down ends,
    /// whatever the action is doing, drive [`try_press`](Self::try_press),
    /// [`cool_down`](Self::cool_down) and [`dispatch`](Self::dispatch)
    /// separately.
    pub async fn click(&self, control: Control) -> bool {
        if !self.try_press(control) {
            return false;
        }
        futures::join!(self.cool_down(control), self.dispatch(control));
        true
    }

    /// Disable `control` for a click. Returns `false` when it is already
    /// cooling down.
    #[must_use]
    pub fn try_press(&self, control: Control) -> bool {
        let pressed = self.clicks.try_press(control);
        if !pressed {
            tracing::debug!(%control, "ignoring click on disabled control");
        }
        pressed
    }

    /// Whether `control` is disabled by a recent click.
    #[must_use]
    pub fn is_disabled(&self, control: Control) -> bool {
        self.clicks.is_disabled(control)
    }

    /// Wait for the click cool-down, then re-enable `control`.
    pub async fn cool_down(&self, control: Control) {
        self.timer.sleep(self.config.timings.click_cooldown).await;
        self.clicks.release(control);
    }

    /// Run the action behind `control`. Failures are already notified to the
    /// view, so they are only logged here.
    pub async fn dispatch(&self, control: Control) {
        let failed = match control {
            Control::Set(relay, state) => self.set_relay(relay.into(), state).await.is_err(),
            Control::Toggle(relay) => self.toggle_relay(relay.into()).await.is_err(),
            Control::Status(relay) => self.show_relay_status(relay.into()).await.is_err(),
            Control::Reboot(relay) => self.reboot_relay(relay.into()).await.is_err(),
            Control::SetAll(state) => self.set_all(state).await.is_err(),
            Control::ToggleAll => self
                .toggle_all()
                .await
                .iter()
                .any(|(_, outcome)| outcome.is_err()),
        };
        if failed {
            tracing::debug!(%control, "control action reported a failure");
        }
    }

    fn validate(&self, relay: i64) -> Result<RelayId, PanelError> {
        self.config.relay_count.relay(relay).map_err(|err| {
            tracing::error!(relay, max = err.max, "invalid relay port");
            self.view
                .notify(Notification::invalid_relay(&self.config.labels));
            err.into()
        })
    }

    async fn run_relay_command(
        &self,
        relay: RelayId,
        command: RelayCommand,
    ) -> Result<RelayState, PanelError> {
        self.view.set_loading(relay, true);

        tracing::debug!(%relay, %command, "sending relay command");
        if let Err(err) = self.backend.send(command).await {
            tracing::warn!(%relay, %command, error = %err, "relay command failed");
            self.view.set_loading(relay, false);
            self.view
                .notify(Notification::relay_failure(&self.config.labels, relay));
            return Err(err.into());
        }

        self.timer.sleep(self.config.timings.relay_settle).await;
        self.view.set_loading(relay, false);
        self.refresh(relay, false).await
    }

    async fn refresh(&self, relay: RelayId, announce: bool) -> Result<RelayState, PanelError> {
        let ticket = self.sequencer.issue(relay);
        match self.backend.status(relay).await {
            Ok(state) => {
                tracing::debug!(%relay, %state, "relay status");
                if self.sequencer.accept(relay, ticket) {
                    self.view.show_state(relay, state);
                } else {
                    tracing::debug!(%relay, %state, "dropping stale status response");
                }
                if announce {
                    self.view.notify(Notification::relay_status(
                        &self.config.labels,
                        relay,
                        state,
                        self.config.timings.announce_timeout,
                    ));
                }
                Ok(state)
            }
            Err(err) => {
                tracing::warn!(%relay, error = %err, "relay status failure");
                if announce {
                    self.view
                        .notify(Notification::server_error(&self.config.labels));
                }
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::poll;
    use relaypanel_domain::command::status_path;
    use relaypanel_domain::error::BackendError;
    use relaypanel_domain::notification::NotificationLevel;
    use std::collections::{HashMap, HashSet, VecDeque};
    use std::pin::pin;
    use std::rc::Rc;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::oneshot;

    #[derive(Default)]
    struct FakeBackend {
        requests: Mutex<Vec<String>>,
        states: Mutex<HashMap<RelayId, RelayState>>,
        failing: Mutex<HashSet<String>>,
        gates: Mutex<VecDeque<oneshot::Receiver<RelayState>>>,
    }

    impl FakeBackend {
        fn fail_on(&self, path: &str) {
            self.failing.lock().unwrap().insert(path.to_string());
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        fn record(&self, path: String) -> Result<(), BackendError> {
            let failing = self.failing.lock().unwrap().contains(&path);
            self.requests.lock().unwrap().push(path);
            if failing {
                Err(BackendError::Status(500))
            } else {
                Ok(())
            }
        }

        fn state_of(&self, relay: RelayId) -> RelayState {
            self.states
                .lock()
                .unwrap()
                .get(&relay)
                .copied()
                .unwrap_or(RelayState::Off)
        }
    }

    impl RelayBackend for FakeBackend {
        async fn send(&self, command: RelayCommand) -> Result<(), BackendError> {
            self.record(command.path())?;
            let mut states = self.states.lock().unwrap();
            match command {
                RelayCommand::On(id) | RelayCommand::Reboot(id) => {
                    states.insert(id, RelayState::On);
                }
                RelayCommand::Off(id) => {
                    states.insert(id, RelayState::Off);
                }
                RelayCommand::Toggle(id) => {
                    let next = states.get(&id).copied().unwrap_or(RelayState::Off).toggled();
                    states.insert(id, next);
                }
                RelayCommand::AllOn | RelayCommand::AllOff => {
                    let state = RelayState::from(command == RelayCommand::AllOn);
                    for id in RelayCount::default().ids() {
                        states.insert(id, state);
                    }
                }
            }
            Ok(())
        }

        async fn status(&self, relay: RelayId) -> Result<RelayState, BackendError> {
            self.record(status_path(relay))?;
            let gate = self.gates.lock().unwrap().pop_front();
            match gate {
                Some(rx) => rx.await.map_err(|err| BackendError::Transport(Box::new(err))),
                None => Ok(self.state_of(relay)),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum ViewEvent {
        State(u8, RelayState),
        Loading(u8, bool),
        Notify(Notification),
    }

    #[derive(Default)]
    struct FakeView {
        events: Mutex<Vec<ViewEvent>>,
    }

    impl FakeView {
        fn events(&self) -> Vec<ViewEvent> {
            self.events.lock().unwrap().clone()
        }

        fn notifications(&self) -> Vec<Notification> {
            self.events()
                .into_iter()
                .filter_map(|event| match event {
                    ViewEvent::Notify(n) => Some(n),
                    _ => None,
                })
                .collect()
        }

        fn last_loading(&self, relay: u8) -> Option<bool> {
            self.events().into_iter().rev().find_map(|event| match event {
                ViewEvent::Loading(id, loading) if id == relay => Some(loading),
                _ => None,
            })
        }

        fn shown_states(&self, relay: u8) -> Vec<RelayState> {
            self.events()
                .into_iter()
                .filter_map(|event| match event {
                    ViewEvent::State(id, state) if id == relay => Some(state),
                    _ => None,
                })
                .collect()
        }
    }

    impl PanelView for FakeView {
        fn show_state(&self, relay: RelayId, state: RelayState) {
            self.events.lock().unwrap().push(ViewEvent::State(relay.get(), state));
        }

        fn set_loading(&self, relay: RelayId, loading: bool) {
            self.events.lock().unwrap().push(ViewEvent::Loading(relay.get(), loading));
        }

        fn notify(&self, notification: Notification) {
            self.events.lock().unwrap().push(ViewEvent::Notify(notification));
        }
    }

    #[derive(Default)]
    struct RecordingTimer {
        sleeps: Mutex<Vec<Duration>>,
        held: Mutex<HashMap<Duration, oneshot::Receiver<()>>>,
    }

    impl RecordingTimer {
        fn hold(&self, duration: Duration, release: oneshot::Receiver<()>) {
            self.held.lock().unwrap().insert(duration, release);
        }
    }

    impl Timer for RecordingTimer {
        async fn sleep(&self, duration: Duration) {
            self.sleeps.lock().unwrap().push(duration);
            let held = self.held.lock().unwrap().remove(&duration);
            if let Some(release) = held {
                let _ = release.await;
            }
        }
    }

    type Controller = RelayPanelController<Rc<FakeBackend>, Rc<FakeView>, Rc<RecordingTimer>>;

    struct Harness {
        backend: Rc<FakeBackend>,
        view: Rc<FakeView>,
        timer: Rc<RecordingTimer>,
        controller: Controller,
    }

    fn harness() -> Harness {
        let backend = Rc::new(FakeBackend::default());
        let view = Rc::new(FakeView::default());
        let timer = Rc::new(RecordingTimer::default());
        let controller = RelayPanelController::new(
            Rc::clone(&backend),
            Rc::clone(&view),
            Rc::clone(&timer),
            PanelConfig::default(),
        );
        Harness {
            backend,
            view,
            timer,
            controller,
        }
    }

    fn relay(raw: i64) -> RelayId {
        RelayCount::default().relay(raw).unwrap()
    }

    #[tokio::test]
    async fn should_send_one_command_then_one_status_query_for_every_valid_id() {
        for id in 1..=16 {
            let h = harness();
            let state = h.controller.set_relay(id, RelayState::On).await.unwrap();
            assert_eq!(state, RelayState::On);
            assert_eq!(h.backend.requests(), vec![format!("on/{id}"), format!("status/{id}")]);
        }
    }

    #[tokio::test]
    async fn should_toggle_with_toggle_route() {
        let h = harness();
        let state = h.controller.toggle_relay(4).await.unwrap();
        assert_eq!(state, RelayState::On);
        assert_eq!(h.backend.requests(), vec!["toggle/4", "status/4"]);
    }

    #[tokio::test]
    async fn should_reboot_with_reboot_route() {
        let h = harness();
        h.controller.reboot_relay(16).await.unwrap();
        assert_eq!(h.backend.requests(), vec!["reboot/16", "status/16"]);
    }

    #[tokio::test]
    async fn should_reject_out_of_range_ids_without_any_request() {
        for id in [-3, 0, 17, 100] {
            let h = harness();
            let err = h.controller.set_relay(id, RelayState::Off).await.unwrap_err();
            assert!(matches!(err, PanelError::InvalidRelayId(_)));
            assert!(h.controller.toggle_relay(id).await.is_err());
            assert!(h.controller.get_relay_status(id, true).await.is_err());
            assert!(h.backend.requests().is_empty());

            let notifications = h.view.notifications();
            assert_eq!(notifications.len(), 3);
            assert!(notifications.iter().all(|n| n.level == NotificationLevel::Error
                && n.text == "Invalid relay port passed to function setRelay"));
            assert!(
                !h.view
                    .events()
                    .iter()
                    .any(|event| matches!(event, ViewEvent::Loading(..)))
            );
        }
    }

    #[tokio::test]
    async fn should_mark_loading_then_settle_then_render_state() {
        let h = harness();
        h.controller.set_relay(2, RelayState::On).await.unwrap();
        assert_eq!(
            h.view.events(),
            vec![
                ViewEvent::Loading(2, true),
                ViewEvent::Loading(2, false),
                ViewEvent::State(2, RelayState::On),
            ]
        );
        assert_eq!(*h.timer.sleeps.lock().unwrap(), vec![Duration::from_millis(300)]);
    }

    #[tokio::test]
    async fn should_clear_loading_and_name_relay_when_command_fails() {
        let h = harness();
        h.backend.fail_on("off/9");
        let err = h.controller.set_relay(9, RelayState::Off).await.unwrap_err();
        assert!(matches!(err, PanelError::Backend(BackendError::Status(500))));
        assert_eq!(h.backend.requests(), vec!["off/9"]);
        assert_eq!(h.view.last_loading(9), Some(false));

        let notifications = h.view.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].text, "Failed to communicate with relay 9");
        assert!(notifications[0].is_modal());
    }

    #[tokio::test]
    async fn should_announce_on_state_as_success() {
        let h = harness();
        h.backend.states.lock().unwrap().insert(relay(3), RelayState::On);
        let state = h.controller.get_relay_status(3, true).await.unwrap();
        assert_eq!(state, RelayState::On);

        let notifications = h.view.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].level, NotificationLevel::Success);
        assert_eq!(notifications[0].title, "الريلي 3");
        assert_eq!(notifications[0].text, "مُشغل");
        assert_eq!(notifications[0].auto_dismiss, Some(Duration::from_millis(2000)));
    }

    #[tokio::test]
    async fn should_announce_off_state_as_info() {
        let h = harness();
        h.controller.show_relay_status(3).await.unwrap();
        let notifications = h.view.notifications();
        assert_eq!(notifications[0].level, NotificationLevel::Info);
        assert_eq!(notifications[0].text, "مُطفأ");
        assert_eq!(h.view.shown_states(3), vec![RelayState::Off]);
    }

    #[tokio::test]
    async fn should_stay_silent_on_status_failure_unless_announcing() {
        let h = harness();
        h.backend.fail_on("status/5");
        assert!(h.controller.get_relay_status(5, false).await.is_err());
        assert!(h.view.notifications().is_empty());

        assert!(h.controller.get_relay_status(5, true).await.is_err());
        let notifications = h.view.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].text, "Server returned an error");
    }

    #[tokio::test]
    async fn should_toggle_every_relay_independently() {
        let h = harness();
        h.backend.fail_on("toggle/7");
        let outcomes = h.controller.toggle_all().await;
        assert_eq!(outcomes.len(), 16);

        let requests = h.backend.requests();
        for id in 1..=16 {
            let toggles = requests.iter().filter(|r| **r == format!("toggle/{id}")).count();
            assert_eq!(toggles, 1, "relay {id}");
        }
        for (relay, outcome) in &outcomes {
            if relay.get() == 7 {
                assert!(outcome.is_err());
                assert_eq!(h.view.last_loading(7), Some(false));
            } else {
                assert_eq!(*outcome.as_ref().unwrap(), RelayState::On);
            }
        }
        assert_eq!(h.view.notifications().len(), 1);
    }

    #[tokio::test]
    async fn should_send_every_toggle_before_any_relay_settles() {
        let h = harness();
        let (release_tx, release_rx) = oneshot::channel();
        h.timer.hold(Duration::from_millis(300), release_rx);

        let mut toggle_all = pin!(h.controller.toggle_all());
        assert!(poll!(toggle_all.as_mut()).is_pending());

        let requests = h.backend.requests();
        let toggles: Vec<_> = requests.iter().filter(|r| r.starts_with("toggle/")).collect();
        let expected: Vec<_> = (1..=16).map(|id| format!("toggle/{id}")).collect();
        assert_eq!(toggles, expected.iter().collect::<Vec<_>>());
        assert!(!requests.iter().any(|r| r == "status/1"));
        assert_eq!(h.view.last_loading(1), Some(true));

        release_tx.send(()).unwrap();
        let outcomes = toggle_all.await;
        assert!(outcomes.iter().all(|(_, outcome)| outcome.is_ok()));
        assert_eq!(h.view.last_loading(1), Some(false));
    }

    #[tokio::test]
    async fn should_flag_every_relay_loading_while_aggregate_request_settles() {
        let h = harness();
        let (release_tx, release_rx) = oneshot::channel();
        h.timer.hold(Duration::from_millis(500), release_rx);

        let mut set_all = pin!(h.controller.set_all(RelayState::On));
        assert!(poll!(set_all.as_mut()).is_pending());

        assert_eq!(h.backend.requests(), vec!["all_on/"]);
        let flagged: Vec<_> = (1..=16).map(|id| ViewEvent::Loading(id, true)).collect();
        assert_eq!(h.view.events(), flagged);

        release_tx.send(()).unwrap();
        set_all.await.unwrap();
        for id in 1..=16 {
            assert_eq!(h.view.last_loading(id), Some(false));
        }
    }

    #[tokio::test]
    async fn should_flag_loading_before_sending_aggregate_request() {
        let h = harness();
        h.backend.fail_on("all_on/");
        h.controller.set_all(RelayState::On).await.unwrap_err();

        let events = h.view.events();
        assert_eq!(events.len(), 33);
        for (index, id) in (1..=16).enumerate() {
            assert_eq!(events[index], ViewEvent::Loading(id, true));
            assert_eq!(events[index + 16], ViewEvent::Loading(id, false));
        }
        assert!(matches!(events[32], ViewEvent::Notify(_)));
    }

    #[tokio::test]
    async fn should_send_single_aggregate_request_then_refresh_every_relay() {
        let h = harness();
        let outcomes = h.controller.set_all(RelayState::On).await.unwrap();
        assert_eq!(outcomes.len(), 16);
        assert!(outcomes.iter().all(|(_, o)| *o.as_ref().unwrap() == RelayState::On));

        let requests = h.backend.requests();
        assert_eq!(requests[0], "all_on/");
        assert_eq!(requests.iter().filter(|r| r.starts_with("all_")).count(), 1);
        assert_eq!(requests.iter().filter(|r| r.starts_with("status/")).count(), 16);
        assert_eq!(*h.timer.sleeps.lock().unwrap(), vec![Duration::from_millis(500)]);
        for id in 1..=16 {
            assert_eq!(h.view.last_loading(id), Some(false));
        }
    }

    #[tokio::test]
    async fn should_skip_refresh_and_clear_every_spinner_when_aggregate_fails() {
        let h = harness();
        h.backend.fail_on("all_off/");
        let err = h.controller.set_all(RelayState::Off).await.unwrap_err();
        assert!(matches!(err, PanelError::Backend(_)));
        assert_eq!(h.backend.requests(), vec!["all_off/"]);
        for id in 1..=16 {
            assert_eq!(h.view.last_loading(id), Some(false));
        }
        let notifications = h.view.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].text, "Server returned an error");
    }

    #[tokio::test]
    async fn should_load_every_status_after_startup_delay() {
        let h = harness();
        let outcomes = h.controller.start().await;
        assert_eq!(outcomes.len(), 16);
        assert_eq!(*h.timer.sleeps.lock().unwrap(), vec![Duration::from_millis(1500)]);
        assert_eq!(h.backend.requests().len(), 16);
        assert!(h.view.notifications().is_empty());
    }

    #[tokio::test]
    async fn should_keep_latest_issued_status_when_responses_cross() {
        let h = harness();
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        h.backend.gates.lock().unwrap().extend([first_rx, second_rx]);

        let (first, second, ()) = futures::join!(
            h.controller.get_relay_status(1, false),
            h.controller.get_relay_status(1, false),
            async {
                second_tx.send(RelayState::On).unwrap();
                tokio::task::yield_now().await;
                first_tx.send(RelayState::Off).unwrap();
            }
        );

        assert_eq!(first.unwrap(), RelayState::Off);
        assert_eq!(second.unwrap(), RelayState::On);
        assert_eq!(h.view.shown_states(1), vec![RelayState::On]);
    }

    #[tokio::test]
    async fn should_run_click_and_reenable_control_after_cooldown() {
        let h = harness();
        let control = Control::Toggle(relay(2));
        assert!(h.controller.click(control).await);
        assert!(!h.controller.is_disabled(control));
        assert_eq!(h.backend.requests(), vec!["toggle/2", "status/2"]);
        assert!(h.timer.sleeps.lock().unwrap().contains(&Duration::from_millis(1000)));
    }

    #[tokio::test]
    async fn should_ignore_click_while_control_cools_down() {
        let h = harness();
        let control = Control::Status(relay(1));
        let (release_tx, release_rx) = oneshot::channel();
        h.timer.hold(Duration::from_millis(1000), release_rx);

        let (accepted, ignored, ()) = futures::join!(
            h.controller.click(control),
            async {
                tokio::task::yield_now().await;
                h.controller.click(control).await
            },
            async {
                tokio::task::yield_now().await;
                tokio::task::yield_now().await;
                release_tx.send(()).unwrap();
            }
        );
        assert!(accepted);
        assert!(!ignored);
        assert_eq!(h.backend.requests(), vec!["status/1"]);
        assert!(!h.controller.is_disabled(control));
    }

    #[tokio::test]
    async fn should_reenable_control_when_cooldown_ends_before_action() {
        let h = harness();
        let control = Control::Status(relay(1));
        let (status_tx, status_rx) = oneshot::channel();
        h.backend.gates.lock().unwrap().push_back(status_rx);

        assert!(h.controller.try_press(control));
        assert!(h.controller.is_disabled(control));
        assert!(!h.controller.try_press(control));

        let mut action = pin!(h.controller.dispatch(control));
        assert!(poll!(action.as_mut()).is_pending());

        h.controller.cool_down(control).await;
        assert!(!h.controller.is_disabled(control));
        assert!(poll!(action.as_mut()).is_pending());

        status_tx.send(RelayState::On).unwrap();
        action.await;
        assert_eq!(h.view.shown_states(1), vec![RelayState::On]);
        assert_eq!(h.backend.requests(), vec!["status/1"]);
    }
}
