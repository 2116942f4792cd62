//! Small form building blocks shared by every screen.

mod alert;
mod button;
mod input;
mod spinner;

pub use alert::{Alert, AlertKind};
pub use button::{Button, ButtonVariant};
pub use input::{Input, Label};
pub use spinner::Spinner;
