pub mod app;
pub mod event;
pub mod mode;
pub mod render_state;
pub mod status;

pub use app::App;
pub use event::AppEvent;
pub use mode::AppMode;
pub use render_state::{RenderState, TokenStyle};
pub use status::{StatusKind, StatusMessage};
