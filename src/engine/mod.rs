// ==========================================
// 校园活动排程系统 - 引擎层
// ==========================================
// 职责: 实现分配规则引擎,不做任何 I/O
// 红线: 引擎内错误一律带内处理 (计数器/标志), 不中断运行
// ==========================================

pub mod context;
pub mod distributor;
pub mod grouping;
pub mod materializer;
pub mod orchestrator;
pub mod path_finder;
pub mod repair;
pub mod requirement;

// 重导出核心引擎
pub use context::RunContext;
pub use distributor::Distributor;
pub use grouping::GroupBuilder;
pub use materializer::Materializer;
pub use orchestrator::{AllocationOrchestrator, AllocationResult};
pub use path_finder::PathEnumerator;
pub use repair::CapacityRepairLoop;
pub use requirement::RequirementResolver;
