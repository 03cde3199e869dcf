// ==========================================
// 校园活动排程系统 - 引擎配置
// ==========================================

use serde::{Deserialize, Serialize};

/// 重分配尝试上限缺省值
pub const DEFAULT_MAX_REPAIR_ATTEMPTS: u32 = 2000;

// ==========================================
// EngineConfig - 引擎配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub max_repair_attempts: u32, // 重分配尝试上限
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_repair_attempts: DEFAULT_MAX_REPAIR_ATTEMPTS,
        }
    }
}
