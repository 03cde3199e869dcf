// ==========================================
// 校园活动排程系统 - 导入层
// ==========================================
// 职责: 把数据集目录加载成已校验的内存记录
// 格式: items.json / polls.json / project.json + students.csv
// 红线: 引擎不做 I/O, 所有文件读写止于本层
// ==========================================

pub mod dataset;
pub mod error;

// 重导出
pub use dataset::{Dataset, DatasetImporter};
pub use error::ImportError;
