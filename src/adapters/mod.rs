pub mod file_store;
pub mod http_client;
pub mod mock_api;
pub mod ui_handler;
pub mod upstream;
