/// Something that happened to a screen: a key press or an app event.
pub trait Intent: Send + 'static {}
