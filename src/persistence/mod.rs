mod storage;

pub use storage::{CollapseStore, FileCollapseStore, MemoryCollapseStore};
