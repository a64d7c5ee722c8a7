// TUI components - one render function per panel

pub mod detail_panel;
pub mod logs_panel;
pub mod search_bar;
pub mod spell_list;
pub mod status_bar;
