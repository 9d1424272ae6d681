pub mod walker;

pub use walker::HistoryWalker;
