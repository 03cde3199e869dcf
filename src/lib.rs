// ==========================================
// 校园活动排程系统 - 核心库
// ==========================================
// 系统定位: 学生-活动场次分配引擎 (贪心填充 + 迭代修复)
// 技术栈: Rust + serde + chrono + tracing
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 图结构层 - 场次衔接图
pub mod graph;

// 引擎层 - 分配规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 引擎配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AllocationStatus, EventId, ItemId, StudentId};

// 领域实体
pub use domain::{CandidatePath, Group, Item, PollChoice, PollQuestion, ProjectConfig, Student};

// 图结构
pub use graph::ItemGraph;

// 引擎
pub use engine::{
    AllocationOrchestrator, AllocationResult, CapacityRepairLoop, Distributor, GroupBuilder,
    Materializer, PathEnumerator, RequirementResolver, RunContext,
};

// 配置
pub use config::EngineConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "校园活动排程系统";

// ==========================================
// 预编译检查
// ==========================================
