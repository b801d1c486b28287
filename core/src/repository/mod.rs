pub mod file;
pub mod traits;

// Re-export
pub use file::FileLogRepository;
pub use traits::LogEntryRepository;
