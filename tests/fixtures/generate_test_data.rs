// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成演示数据集 (JSON + CSV)
// 输出: tests/fixtures/datasets/demo/
// ==========================================

use campus_event_aps::domain::item::Item;
use campus_event_aps::domain::poll::{PollChoice, PollQuestion};
use campus_event_aps::domain::project::ProjectConfig;
use chrono::{NaiveDate, NaiveDateTime};
use csv::Writer;
use std::error::Error;
use std::fs;
use std::path::Path;
use uuid::Uuid;

// 演示数据规模
const STUDENT_COUNT: usize = 24;
const ELECTIVE_EVERY_NTH: usize = 3; // 每3人1人报名选修

fn ts(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 5, 4)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn item(item_id: &str, title: &str, event_id: &str, start: u32, end: u32, capacity: u32) -> Item {
    Item {
        item_id: item_id.to_string(),
        title: title.to_string(),
        event_id: event_id.to_string(),
        start_time: ts(start),
        end_time: ts(end),
        capacity,
        student_ids: vec![],
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new("tests/fixtures/datasets/demo");
    fs::create_dir_all(out_dir)?;

    // 学生名册 (uuid 学号)
    let student_ids: Vec<String> = (0..STUDENT_COUNT)
        .map(|_| Uuid::new_v4().to_string())
        .collect();

    let mut writer = Writer::from_path(out_dir.join("students.csv"))?;
    writer.write_record(["student_id", "name"])?;
    for (index, student_id) in student_ids.iter().enumerate() {
        let name = format!("学生{:02}", index + 1);
        writer.write_record([student_id.as_str(), name.as_str()])?;
    }
    writer.flush()?;

    // 场次: 两门必修各两个平行场次 + 一门选修
    let items = vec![
        item("T1", "校史馆参观 A", "E_TOUR", 9, 10, 12),
        item("T2", "校史馆参观 B", "E_TOUR", 9, 10, 12),
        item("F1", "安全教育 A", "E_SAFETY", 10, 11, 16),
        item("F2", "安全教育 B", "E_SAFETY", 10, 11, 8),
        item("R1", "机器人工坊", "E_ROBOT", 11, 12, 8),
    ];
    fs::write(
        out_dir.join("items.json"),
        serde_json::to_string_pretty(&items)?,
    )?;

    // 项目配置
    let project = ProjectConfig {
        project_id: Uuid::new_v4().to_string(),
        name: "春季研学周".to_string(),
        required_for_all: vec!["E_TOUR".to_string(), "E_SAFETY".to_string()],
    };
    fs::write(
        out_dir.join("project.json"),
        serde_json::to_string_pretty(&project)?,
    )?;

    // 问卷: 每 ELECTIVE_EVERY_NTH 人报名机器人工坊
    let elective_students: Vec<String> = student_ids
        .iter()
        .step_by(ELECTIVE_EVERY_NTH)
        .cloned()
        .collect();
    let other_students: Vec<String> = student_ids
        .iter()
        .filter(|id| !elective_students.contains(id))
        .cloned()
        .collect();

    let polls = vec![PollQuestion {
        poll_id: "POLL1".to_string(),
        title: "是否参加机器人工坊".to_string(),
        choices: vec![
            PollChoice {
                choice_id: "C_YES".to_string(),
                title: "参加".to_string(),
                event_id: Some("E_ROBOT".to_string()),
                student_ids: elective_students,
            },
            PollChoice {
                choice_id: "C_NO".to_string(),
                title: "不参加".to_string(),
                event_id: Some("".to_string()),
                student_ids: other_students,
            },
        ],
    }];
    fs::write(
        out_dir.join("polls.json"),
        serde_json::to_string_pretty(&polls)?,
    )?;

    println!("演示数据集已生成: {}", out_dir.display());
    println!("  - 学生: {}", STUDENT_COUNT);
    println!("  - 场次: {}", items.len());
    Ok(())
}
