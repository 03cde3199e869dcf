// ==========================================
// 分配引擎集成测试
// ==========================================
// 测试目标: 验证完整流程的分配性质
// 覆盖范围: 组唯一性、类别覆盖、容量约束、时间冲突、确定性
// ==========================================

use campus_event_aps::domain::item::{items_assigned_to, Item};
use campus_event_aps::domain::poll::{PollChoice, PollQuestion};
use campus_event_aps::domain::project::ProjectConfig;
use campus_event_aps::domain::student::Student;
use campus_event_aps::engine::{AllocationOrchestrator, GroupBuilder, RequirementResolver};
use campus_event_aps::EngineConfig;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashSet;

// ==========================================
// 测试辅助函数
// ==========================================

fn ts(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 5, 4)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn create_test_item(item_id: &str, event_id: &str, start: u32, end: u32, capacity: u32) -> Item {
    Item {
        item_id: item_id.to_string(),
        title: format!("场次 {}", item_id),
        event_id: event_id.to_string(),
        start_time: ts(start),
        end_time: ts(end),
        capacity,
        student_ids: vec![],
    }
}

/// 标准测试数据集: 两门必修 (各两个平行场次) + 一门问卷选修
///
/// - E_TOUR: T1/T2 (9-10)
/// - E_SAFETY: F1 (10-11, 容量4) / F2 (10-11, 容量2)
/// - E_ROBOT: R1 (11-12, 容量2), S3/S4 报名
fn create_test_dataset() -> (Vec<Item>, Vec<Student>, ProjectConfig, Vec<PollQuestion>) {
    let items = vec![
        create_test_item("T1", "E_TOUR", 9, 10, 3),
        create_test_item("T2", "E_TOUR", 9, 10, 3),
        create_test_item("F1", "E_SAFETY", 10, 11, 4),
        create_test_item("F2", "E_SAFETY", 10, 11, 2),
        create_test_item("R1", "E_ROBOT", 11, 12, 2),
    ];

    let students = vec![
        Student::new("S1"),
        Student::new("S2"),
        Student::new("S3"),
        Student::new("S4"),
        Student::new("S5"),
    ];

    let project = ProjectConfig {
        project_id: "P2026".to_string(),
        name: "春季研学周".to_string(),
        required_for_all: vec!["E_TOUR".to_string(), "E_SAFETY".to_string()],
    };

    let polls = vec![PollQuestion {
        poll_id: "POLL1".to_string(),
        title: "是否参加机器人工坊".to_string(),
        choices: vec![
            PollChoice {
                choice_id: "C_YES".to_string(),
                title: "参加".to_string(),
                event_id: Some("E_ROBOT".to_string()),
                student_ids: vec!["S3".to_string(), "S4".to_string()],
            },
            PollChoice {
                choice_id: "C_NO".to_string(),
                title: "不参加".to_string(),
                event_id: Some("".to_string()),
                student_ids: vec!["S1".to_string(), "S2".to_string(), "S5".to_string()],
            },
        ],
    }];

    (items, students, project, polls)
}

fn run_allocation() -> (Vec<Item>, Vec<Student>, ProjectConfig, Vec<PollQuestion>) {
    let (mut items, students, project, polls) = create_test_dataset();
    let orchestrator = AllocationOrchestrator::new(EngineConfig::default());
    let result = orchestrator.allocate(&mut items, &students, &project, &polls);
    assert!(!result.repair_budget_exhausted, "标准数据集不应耗尽修复预算");
    (items, students, project, polls)
}

// ==========================================
// 测试用例 1: 组唯一性
// ==========================================

#[test]
fn test_groups_partition_students_by_signature() {
    let (_, students, _, polls) = create_test_dataset();

    let mut resolver = RequirementResolver::new(&polls);
    let groups = GroupBuilder::new().build(&students, &mut resolver);

    // 同组学生签名两两相等, 异组学生签名不同
    for group in &groups {
        for student_id in &group.student_queue {
            assert_eq!(
                resolver.extra_event_ids(student_id),
                group.signature,
                "组内学生签名必须与组签名一致"
            );
        }
    }
    let signatures: Vec<_> = groups.iter().map(|group| group.signature.clone()).collect();
    let unique: HashSet<_> = signatures.iter().cloned().collect();
    assert_eq!(signatures.len(), unique.len(), "组签名必须互不相同");

    // 本数据集恰好两组: 空签名与 [E_ROBOT]
    assert_eq!(groups.len(), 2);
}

// ==========================================
// 测试用例 2: 类别覆盖
// ==========================================

#[test]
fn test_every_student_covers_exact_requirement_set() {
    let (items, students, project, polls) = run_allocation();

    let mut resolver = RequirementResolver::new(&polls);
    for student in &students {
        let assigned = items_assigned_to(&student.student_id, &items);
        let covered: HashSet<String> = assigned
            .iter()
            .map(|item| item.event_id.clone())
            .collect();

        let mut expected: HashSet<String> =
            project.required_for_all.iter().cloned().collect();
        expected.extend(resolver.extra_event_ids(&student.student_id));

        assert_eq!(
            covered, expected,
            "学生 {} 的类别覆盖不符: 实际 {:?}",
            student.student_id, covered
        );

        // 每个类别恰好一个场次
        assert_eq!(
            assigned.len(),
            expected.len(),
            "学生 {} 存在同类别重复场次",
            student.student_id
        );
    }
}

// ==========================================
// 测试用例 3: 容量约束
// ==========================================

#[test]
fn test_no_item_exceeds_capacity() {
    let (items, _, _, _) = run_allocation();

    for item in &items {
        assert!(
            item.student_ids.len() as u32 <= item.capacity,
            "场次 {} 超容: {}/{}",
            item.item_id,
            item.student_ids.len(),
            item.capacity
        );
    }
}

// ==========================================
// 测试用例 4: 无时间冲突
// ==========================================

#[test]
fn test_no_student_has_overlapping_items() {
    let (items, students, _, _) = run_allocation();

    for student in &students {
        let assigned = items_assigned_to(&student.student_id, &items);
        for (index, first) in assigned.iter().enumerate() {
            for second in assigned.iter().skip(index + 1) {
                assert!(
                    !first.overlaps(second),
                    "学生 {} 的场次 {} 与 {} 时间重叠",
                    student.student_id,
                    first.item_id,
                    second.item_id
                );
            }
        }
    }
}

// ==========================================
// 测试用例 5: 重复运行结果一致
// ==========================================

#[test]
fn test_rerun_on_fresh_inputs_is_deterministic() {
    let (first_items, students, _, _) = run_allocation();
    let (second_items, _, _, _) = run_allocation();

    for student in &students {
        let first: Vec<&str> = items_assigned_to(&student.student_id, &first_items)
            .iter()
            .map(|item| item.item_id.as_str())
            .collect();
        let second: Vec<&str> = items_assigned_to(&student.student_id, &second_items)
            .iter()
            .map(|item| item.item_id.as_str())
            .collect();
        assert_eq!(
            first, second,
            "学生 {} 两次运行的分配不一致",
            student.student_id
        );
    }
}

// ==========================================
// 测试用例 6: 不可满足签名静默零分配
// ==========================================

#[test]
fn test_infeasible_signature_leaves_students_unassigned() {
    let (mut items, mut students, project, mut polls) = create_test_dataset();

    // S6 报名一个图中不存在的类别
    students.push(Student::new("S6"));
    polls.push(PollQuestion {
        poll_id: "POLL2".to_string(),
        title: "是否参加滑翔体验".to_string(),
        choices: vec![PollChoice {
            choice_id: "C_GLIDE".to_string(),
            title: "参加".to_string(),
            event_id: Some("E_GLIDER".to_string()),
            student_ids: vec!["S6".to_string()],
        }],
    });

    let orchestrator = AllocationOrchestrator::new(EngineConfig::default());
    let result = orchestrator.allocate(&mut items, &students, &project, &polls);

    // 运行不报错, S6 以零场次暴露
    assert!(!result.repair_budget_exhausted);
    assert_eq!(result.unassigned_students, vec!["S6".to_string()]);
    assert!(items_assigned_to("S6", &items).is_empty());
}
