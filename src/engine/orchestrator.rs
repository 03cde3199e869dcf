// ==========================================
// 校园活动排程系统 - 引擎编排器
// ==========================================
// 用途: 协调六个引擎步骤的执行顺序
// 流程: 需求解析 → 分组 → 建图 → 路径枚举 → 贪心分摊
//       → 容量修复 → 落位
// ==========================================
// 红线: 单线程同步执行,整个运行一次跑完; 所有运行状态
// 都在 RunContext / 每运行引擎实例里,跨运行零残留
// ==========================================

use crate::config::EngineConfig;
use crate::domain::item::{items_assigned_to, Item};
use crate::domain::poll::PollQuestion;
use crate::domain::project::ProjectConfig;
use crate::domain::student::Student;
use crate::domain::types::{AllocationStatus, StudentId};
use crate::engine::{
    CapacityRepairLoop, Distributor, GroupBuilder, Materializer, PathEnumerator,
    RequirementResolver, RunContext,
};
use crate::graph::ItemGraph;
use tracing::{debug, info, warn};

// ==========================================
// AllocationResult - 分配结果
// ==========================================
#[derive(Debug, Clone)]
pub struct AllocationResult {
    pub group_count: usize,                  // 需求组数
    pub path_count: usize,                   // 候选路径总数
    pub repair_attempts: u32,                // 重分配尝试次数
    pub repair_budget_exhausted: bool,       // 修复预算耗尽标志
    pub unassigned_students: Vec<StudentId>, // 零场次学生 (不可满足签名的后置表现)
}

impl AllocationResult {
    /// 运行状态 (带内信号的枚举视图)
    pub fn status(&self) -> AllocationStatus {
        if self.repair_budget_exhausted {
            AllocationStatus::RepairBudgetExhausted
        } else {
            AllocationStatus::Completed
        }
    }
}

// ==========================================
// AllocationOrchestrator - 引擎编排器
// ==========================================
pub struct AllocationOrchestrator {
    config: EngineConfig,
    grouping: GroupBuilder,
    path_finder: PathEnumerator,
    distributor: Distributor,
    materializer: Materializer,
}

impl AllocationOrchestrator {
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - `config`: 引擎配置
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            grouping: GroupBuilder::new(),
            path_finder: PathEnumerator::new(),
            distributor: Distributor::new(),
            materializer: Materializer::new(),
        }
    }

    /// 执行完整分配流程
    ///
    /// 输入须为已加载、已校验的数据; 本方法不做 I/O。
    /// 场次的 student_ids 就地回填; 运行级异常 (预算耗尽、
    /// 零场次学生) 以结果字段带回,绝不中途失败。
    ///
    /// # 参数
    /// - `items`: 场次集合 (会被修改)
    /// - `students`: 学生列表
    /// - `project`: 项目配置
    /// - `polls`: 问卷集合
    ///
    /// # 返回
    /// 分配结果
    pub fn allocate(
        &self,
        items: &mut [Item],
        students: &[Student],
        project: &ProjectConfig,
        polls: &[PollQuestion],
    ) -> AllocationResult {
        info!(
            item_count = items.len(),
            student_count = students.len(),
            poll_count = polls.len(),
            required_for_all = ?project.required_for_all,
            "开始执行分配流程"
        );

        // ==========================================
        // 步骤1: 需求解析 + 需求分组
        // ==========================================
        debug!("步骤1: 需求解析与分组");

        let mut resolver = RequirementResolver::new(polls);
        let mut groups = self.grouping.build(students, &mut resolver);

        info!(group_count = groups.len(), "需求分组完成");

        // ==========================================
        // 步骤2: 构建场次衔接图
        // ==========================================
        debug!("步骤2: 构建场次衔接图");

        let graph = ItemGraph::build(items);

        // ==========================================
        // 步骤3: 路径枚举
        // ==========================================
        debug!("步骤3: 路径枚举");

        let mut ctx = RunContext::new();
        self.path_finder.enumerate(
            &graph,
            items,
            &groups,
            &project.required_for_all,
            &mut ctx,
        );

        for group in &groups {
            if ctx.path_count_for_group(group.group_id) == 0 {
                // 不可满足签名: 静默零路径, 组员将以零场次暴露
                warn!(
                    group_id = group.group_id,
                    signature = ?group.signature,
                    member_count = group.member_count(),
                    "需求组没有任何满足路径"
                );
            }
        }

        info!(path_count = ctx.paths.len(), "路径枚举完成");

        // ==========================================
        // 步骤4: 贪心分摊
        // ==========================================
        debug!("步骤4: 贪心分摊");

        self.distributor.distribute(&groups, &mut ctx);

        // ==========================================
        // 步骤5: 容量修复
        // ==========================================
        debug!("步骤5: 容量修复");

        let repair = CapacityRepairLoop::new(self.config.max_repair_attempts);
        repair.enforce(items, &mut ctx);

        info!(
            repair_attempts = ctx.repair_attempts,
            repair_budget_exhausted = ctx.repair_budget_exhausted,
            "容量修复完成"
        );

        // ==========================================
        // 步骤6: 落位
        // ==========================================
        debug!("步骤6: 落位");

        self.materializer.materialize(&ctx.paths, &mut groups, items);

        // ==========================================
        // 汇总结果
        // ==========================================

        let unassigned_students: Vec<StudentId> = students
            .iter()
            .filter(|student| items_assigned_to(&student.student_id, items).is_empty())
            .map(|student| student.student_id.clone())
            .collect();

        let result = AllocationResult {
            group_count: groups.len(),
            path_count: ctx.paths.len(),
            repair_attempts: ctx.repair_attempts,
            repair_budget_exhausted: ctx.repair_budget_exhausted,
            unassigned_students,
        };

        info!(
            status = %result.status(),
            unassigned_count = result.unassigned_students.len(),
            "分配流程结束"
        );
        result
    }
}

impl Default for AllocationOrchestrator {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
