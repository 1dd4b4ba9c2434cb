pub mod header;
pub mod master_view;
pub mod matching_panel;
pub mod status_line;
pub mod tab_bar;
pub mod upload_panel;
