pub mod app_state;
pub mod messages;
pub mod ui;

pub use app_state::{AppState, DisplayFlags, DEFAULT_MINUTES};
pub use messages::{Command, Effect};
pub use ui::{Element, Legend, TriggerState};
