/// 看板任务的 blob 持久化
///
/// 整个任务列表序列化为单个 JSON 文本保存在一个固定位置，
/// 每次变更整体重写，不做增量更新。
use anyhow::Result;
use std::path::PathBuf;

/// 持久化 blob 存储的窄接口
///
/// 看板存储只依赖这个接口，文件实现用于运行时，内存实现用于测试。
pub trait BlobStore {
    /// 读取 blob，不存在时返回 `None`
    fn load(&self) -> Result<Option<String>>;

    /// 整体重写 blob
    fn save(&self, data: &str) -> Result<()>;
}

/// 基于单个文件的 blob 存储
pub struct FileBlobStore {
    path: PathBuf,
}

impl FileBlobStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl BlobStore for FileBlobStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&self.path)?))
    }

    fn save(&self, data: &str) -> Result<()> {
        // 确保目录存在
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, data)?;
        Ok(())
    }
}

/// 内存 blob 存储（测试用）
///
/// clone 之间共享同一份数据，便于模拟"重启后重新加载"。
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemoryBlobStore {
    data: std::rc::Rc<std::cell::RefCell<Option<String>>>,
}

#[cfg(test)]
impl MemoryBlobStore {
    pub fn contents(&self) -> Option<String> {
        self.data.borrow().clone()
    }
}

#[cfg(test)]
impl BlobStore for MemoryBlobStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, data: &str) -> Result<()> {
        *self.data.borrow_mut() = Some(data.to_string());
        Ok(())
    }
}
