//! 存储模块
//!
//! 通用的有序内存集合，以及模拟后端使用的实体存储。

pub mod id;
pub mod memory_store;
pub mod mock_store;

pub use memory_store::{MemoryStore, Record};
pub use mock_store::{MockStore, SeedOverrides, StoreSnapshot, unique_id};
