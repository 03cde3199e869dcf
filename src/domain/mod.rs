// ==========================================
// 校园活动排程系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、业务规则接口
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod group;
pub mod item;
pub mod path;
pub mod poll;
pub mod project;
pub mod student;
pub mod types;

// 重导出核心类型
pub use group::Group;
pub use item::{items_assigned_to, Item};
pub use path::CandidatePath;
pub use poll::{PollChoice, PollQuestion};
pub use project::ProjectConfig;
pub use student::Student;
pub use types::{AllocationStatus, EventId, ItemId, StudentId};
