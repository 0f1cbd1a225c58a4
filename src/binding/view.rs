//! Presentation regions.

use std::fmt;

use super::{Message, Region};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A region that accepts a typed payload.
pub trait ContentBindable<T: ?Sized> {
    fn bind(&mut self, content: &T);
}

/// The three regions a [`StateBinder`](super::StateBinder) drives.
pub trait StateView<C, E> {
    /// Activates the content region.
    fn bind_content(&mut self, content: &C);

    /// Activates the error region with a placeholder message.
    fn bind_message(&mut self, message: &Message);

    /// Activates the error region with a failure.
    fn bind_error(&mut self, error: &E);

    /// Activates the loading region.
    fn bind_loading(&mut self);

    /// Toggles a transient loading overlay over the content region.
    fn set_refreshing(&mut self, _refreshing: bool) {}
}

/// Error region contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageRegion {
    message: Message,
}

impl MessageRegion {
    pub fn message(&self) -> &Message {
        &self.message
    }
}

impl ContentBindable<Message> for MessageRegion {
    fn bind(&mut self, content: &Message) {
        self.message = content.clone();
    }
}

/// Activity indicator for the loading region and the refreshing overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadingRegion {
    animating: bool,
    tick: u8,
}

impl LoadingRegion {
    pub fn start(&mut self) {
        if !self.animating {
            self.animating = true;
            self.tick = 0;
        }
    }

    pub fn stop(&mut self) {
        self.animating = false;
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Advances the animation by one frame.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn frame(&self) -> &'static str {
        SPINNER_FRAMES[(self.tick as usize) % SPINNER_FRAMES.len()]
    }
}

/// A [`StateView`] composed of a content region `V`, a [`MessageRegion`] and a
/// [`LoadingRegion`]. Binding one region hides the others.
pub struct RegionView<V> {
    content: V,
    message: MessageRegion,
    loading: LoadingRegion,
    active: Region,
    refreshing: bool,
}

impl<V> RegionView<V> {
    /// Starts out on the loading region, matching a fresh state.
    pub fn new(content: V) -> Self {
        let mut loading = LoadingRegion::default();
        loading.start();
        Self {
            content,
            message: MessageRegion::default(),
            loading,
            active: Region::Loading,
            refreshing: false,
        }
    }

    pub fn active_region(&self) -> Region {
        self.active
    }

    /// Whether the content region carries the loading overlay.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn content(&self) -> &V {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut V {
        &mut self.content
    }

    pub fn message(&self) -> &MessageRegion {
        &self.message
    }

    pub fn loading(&self) -> &LoadingRegion {
        &self.loading
    }

    pub fn loading_mut(&mut self) -> &mut LoadingRegion {
        &mut self.loading
    }

    fn show_message(&mut self, message: &Message) {
        self.loading.stop();
        self.refreshing = false;
        self.active = Region::Error;
        self.message.bind(message);
    }
}

impl<C, E, V> StateView<C, E> for RegionView<V>
where
    V: ContentBindable<C>,
    E: fmt::Display,
{
    fn bind_content(&mut self, content: &C) {
        self.loading.stop();
        self.refreshing = false;
        self.active = Region::Content;
        self.content.bind(content);
    }

    fn bind_message(&mut self, message: &Message) {
        self.show_message(message);
    }

    fn bind_error(&mut self, error: &E) {
        self.show_message(&Message::from_error(error));
    }

    fn bind_loading(&mut self) {
        self.refreshing = false;
        self.active = Region::Loading;
        self.loading.start();
    }

    fn set_refreshing(&mut self, refreshing: bool) {
        self.refreshing = refreshing;
        if refreshing {
            self.loading.start();
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for RegionView<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionView")
            .field("active", &self.active)
            .field("refreshing", &self.refreshing)
            .field("content", &self.content)
            .field("message", &self.message)
            .finish()
    }
}
