pub mod server_service;
