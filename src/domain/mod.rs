pub mod files;
pub mod logs;
pub mod system;
