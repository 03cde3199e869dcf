// ==========================================
// 校园活动排程系统 - 配置层
// ==========================================
// 职责: 引擎运行参数
// ==========================================

pub mod engine_config;

// 重导出核心配置
pub use engine_config::{EngineConfig, DEFAULT_MAX_REPAIR_ATTEMPTS};
