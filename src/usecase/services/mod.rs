pub mod import_service;
pub mod view_store;
