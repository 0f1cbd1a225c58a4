use std::sync::mpsc::Sender;

use tokio::runtime::Handle;

use crate::binding::{Region, RegionView, StateBinder};
use crate::config::Config;
use crate::controller::StateController;
use crate::provider::ContentProvider;
use crate::state::State;
use crate::ui::alert::{AlertIntent, AlertReducer, AlertState};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use crate::ui::numbers::{Numbers, NumbersError, NumbersSource, NumbersView};

pub type NumbersScreen = RegionView<NumbersView>;
pub type NumbersController = StateController<NumbersSource, NumbersScreen>;

pub struct App {
    controller: NumbersController,
    alert: AlertState,
    should_quit: bool,
}

impl App {
    /// Builds the screen. Nothing is loaded until [`App::reload`].
    pub fn new(config: &Config, runtime: Handle, events: Sender<AppEvent>) -> Self {
        let source = NumbersSource::new(runtime, events.clone(), &config.loader);
        let binder = StateBinder::emptiable().with_placeholder(config.placeholder.clone());
        let controller = StateController::new(
            ContentProvider::new(source),
            binder,
            RegionView::new(NumbersView::default()),
            move |error: &NumbersError| {
                let _ = events.send(AppEvent::ErrorWithContent(error.to_string()));
            },
        );

        Self {
            controller,
            alert: AlertState::default(),
            should_quit: false,
        }
    }

    pub fn state(&self) -> State<Numbers, NumbersError> {
        self.controller.state()
    }

    /// Whether a load attempt is running. A purge leaves the state `Loading`
    /// without one, and reload stays available.
    pub fn is_loading(&self) -> bool {
        self.controller.provider().is_in_flight()
    }

    /// Starts a load unless one is already running.
    pub fn reload(&mut self) {
        if self.is_loading() {
            tracing::debug!("Reload ignored while loading");
            return;
        }
        self.controller.reload();
    }

    /// Drops loaded numbers unless a load is running.
    pub fn purge(&mut self) {
        if self.is_loading() {
            tracing::debug!("Purge ignored while loading");
            return;
        }
        self.controller.purge();
    }

    /// Runs `f` against the screen. See [`StateController::with_view`].
    pub fn with_screen<R>(&self, f: impl FnOnce(&mut NumbersScreen) -> R) -> R {
        self.controller.with_view(f)
    }

    pub fn active_region(&self) -> Region {
        self.with_screen(|screen| screen.active_region())
    }

    /// Whether the title spinner is shown over visible content.
    pub fn is_refreshing(&self) -> bool {
        self.with_screen(|screen| screen.is_refreshing())
    }

    pub fn on_tick(&mut self) {
        self.with_screen(|screen| {
            if screen.loading().is_animating() {
                screen.loading_mut().tick();
            }
        });
    }

    pub fn alert(&self) -> &AlertState {
        &self.alert
    }

    pub fn dispatch_alert(&mut self, intent: AlertIntent) {
        self.alert = AlertReducer::reduce(std::mem::take(&mut self.alert), intent);
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
