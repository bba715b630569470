mod control_button;
mod dialog;
mod loading;
mod panel_controls;
mod relay_card;

pub use control_button::ControlButton;
pub use dialog::{DialogHost, DialogProvider, use_dialogs};
pub use loading::Loading;
pub use panel_controls::PanelControls;
pub use relay_card::RelayCard;
