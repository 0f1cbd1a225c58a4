/// Everything a screen needs to draw itself.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
