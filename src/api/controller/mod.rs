pub mod files;
pub mod logs;
pub mod stats;
pub mod system;
