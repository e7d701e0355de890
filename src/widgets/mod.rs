// Reusable UI widgets

pub mod button;
pub mod footer;
pub mod text_input;

pub use button::{Button, BUTTON_HEIGHT};
pub use footer::Footer;
pub use text_input::{TextInputWidget, TextInputWidgetExt, FIELD_HEIGHT};
