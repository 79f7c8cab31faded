pub mod key_value_editor;
pub mod request_panel;
pub mod response_panel;
pub mod sidebar;
pub mod test_cases_bar;
