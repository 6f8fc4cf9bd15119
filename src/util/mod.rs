//! Browser glue shared by pages and components.

pub mod clock;
pub mod navigation;
pub mod storage;
pub mod theme;
