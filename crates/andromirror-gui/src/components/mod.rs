//! UI 组件模块

mod about_panel;
mod activity_log;
mod connect_panel;
mod device_list;
mod header;
mod option_select;
mod settings_panel;
mod tab_bar;
mod wireless_panel;

pub use about_panel::AboutPanel;
pub use activity_log::ActivityLogView;
pub use connect_panel::ConnectPanel;
pub use device_list::DeviceList;
pub use header::Header;
pub use settings_panel::SettingsPanel;
pub use tab_bar::TabBar;
pub use wireless_panel::WirelessPanel;
