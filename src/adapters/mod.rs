pub mod api_handler;
pub mod health_handler;
pub mod mock_backend;
pub mod session_manager;
pub mod ui_handler;
