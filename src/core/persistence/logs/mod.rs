pub mod log_file_entity;
pub mod log_fs_adapter;
pub mod log_fs_adapter_trait;
pub mod log_path;
pub mod log_repository;
pub mod log_repository_trait;
