//! 内存存储
//!
//! 按插入顺序保存记录的内存集合，列表接口返回的顺序即写入顺序。

use parking_lot::RwLock;
use std::sync::Arc;

/// 可按 id 定位的记录
pub trait Record {
    fn id(&self) -> &str;
}

/// 通用内存存储
///
/// 每次读写都在单个锁内完成，不存在对同一记录的交错部分写入。
/// clone 得到的是同一份数据的共享句柄。
#[derive(Debug)]
pub struct MemoryStore<T> {
    data: Arc<RwLock<Vec<T>>>,
}

impl<T: Record + Clone> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record + Clone> MemoryStore<T> {
    /// 创建新的内存存储实例
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// 追加记录到末尾
    pub fn insert(&self, value: T) {
        self.data.write().push(value);
    }

    /// 获取数据
    ///
    /// 返回数据的克隆，不持有锁
    pub fn get(&self, id: &str) -> Option<T> {
        self.data.read().iter().find(|v| v.id() == id).cloned()
    }

    /// 原地修改指定记录，返回修改后的克隆
    pub fn update<F>(&self, id: &str, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut data = self.data.write();
        let record = data.iter_mut().find(|v| v.id() == id)?;
        f(record);
        Some(record.clone())
    }

    /// 删除数据
    ///
    /// 返回被删除的数据，其余记录保持原有顺序
    pub fn remove(&self, id: &str) -> Option<T> {
        let mut data = self.data.write();
        let idx = data.iter().position(|v| v.id() == id)?;
        Some(data.remove(idx))
    }

    /// 删除所有满足条件的记录，返回删除数量
    pub fn remove_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        let mut data = self.data.write();
        let before = data.len();
        data.retain(|v| !predicate(v));
        before - data.len()
    }

    /// 列出所有数据
    pub fn list(&self) -> Vec<T> {
        self.data.read().clone()
    }

    /// 按条件筛选数据
    pub fn list_by<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.data
            .read()
            .iter()
            .filter(|v| predicate(v))
            .cloned()
            .collect()
    }

    /// 按顺序遍历可变记录，返回第一个 `Some` 结果
    ///
    /// 用于在嵌套集合中定位并修改子对象
    pub fn find_map_mut<R, F>(&self, f: F) -> Option<R>
    where
        F: FnMut(&mut T) -> Option<R>,
    {
        self.data.write().iter_mut().find_map(f)
    }

    /// 获取数据总数
    pub fn count(&self) -> usize {
        self.data.read().len()
    }

    /// 清空所有数据
    pub fn clear(&self) {
        self.data.write().clear();
    }

    /// 检查是否存在指定 id
    pub fn contains(&self, id: &str) -> bool {
        self.data.read().iter().any(|v| v.id() == id)
    }

    /// 整体替换内容
    pub fn replace_all<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        *self.data.write() = items;
    }
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestItem {
        id: String,
        value: i32,
    }

    impl Record for TestItem {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, value: i32) -> TestItem {
        TestItem {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn test_memory_store_crud() {
        let store: MemoryStore<TestItem> = MemoryStore::new();

        store.insert(item("test-1", 42));
        assert_eq!(store.get("test-1").unwrap(), item("test-1", 42));

        let updated = store.update("test-1", |v| v.value = 100).unwrap();
        assert_eq!(updated.value, 100);
        assert_eq!(store.get("test-1").unwrap().value, 100);

        let removed = store.remove("test-1").unwrap();
        assert_eq!(removed.value, 100);
        assert!(store.get("test-1").is_none());
        assert!(store.update("test-1", |v| v.value = 1).is_none());
        assert!(store.remove("test-1").is_none());
    }

    #[test]
    fn test_memory_store_keeps_insertion_order() {
        let store: MemoryStore<TestItem> = MemoryStore::new();
        for (id, value) in [("c", 3), ("a", 1), ("b", 2)] {
            store.insert(item(id, value));
        }

        let ids: Vec<String> = store.list().into_iter().map(|v| v.id).collect();
        assert_eq!(ids, ["c", "a", "b"]);

        store.remove("a");
        let ids: Vec<String> = store.list().into_iter().map(|v| v.id).collect();
        assert_eq!(ids, ["c", "b"]);
    }

    #[test]
    fn test_memory_store_list_by_and_remove_where() {
        let store: MemoryStore<TestItem> = MemoryStore::new();
        store.replace_all([item("1", 10), item("2", 20), item("3", 30)]);

        let filtered = store.list_by(|v| v.value > 15);
        assert_eq!(filtered.len(), 2);

        assert_eq!(store.remove_where(|v| v.value > 15), 2);
        assert_eq!(store.count(), 1);
        assert!(store.contains("1"));
        assert!(!store.contains("2"));
    }

    #[test]
    fn test_memory_store_find_map_mut_stops_at_first() {
        let store: MemoryStore<TestItem> = MemoryStore::new();
        store.replace_all([item("1", 1), item("2", 2), item("3", 2)]);

        let hit = store.find_map_mut(|v| {
            (v.value == 2).then(|| {
                v.value = 99;
                v.id.clone()
            })
        });

        assert_eq!(hit.as_deref(), Some("2"));
        assert_eq!(store.get("2").unwrap().value, 99);
        assert_eq!(store.get("3").unwrap().value, 2);
    }

    #[test]
    fn test_memory_store_clone_shares_data() {
        let store: MemoryStore<TestItem> = MemoryStore::new();
        let handle = store.clone();

        handle.insert(item("x", 1));
        assert_eq!(store.count(), 1);

        store.clear();
        assert_eq!(handle.count(), 0);
    }
}
