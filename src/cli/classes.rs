use clap::Subcommand;

use crate::cli::render;
use crate::errors::{Result, SchoolAdminError};
use crate::models::classes::{CreateClassRequest, UpdateClassRequest};
use crate::policy;
use crate::runtime::AppContext;
use crate::utils::validate;

#[derive(Debug, Subcommand)]
pub enum ClassesCommand {
    /// 班级列表（含容量余量）
    List,
    Show {
        id: i64,
    },
    /// 班级在读学生
    Students {
        id: i64,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        section: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        section: Option<String>,
    },
    Delete {
        id: i64,
    },
    /// 指派教师（先本地预检：班级无教师且教师未满带班上限）
    AssignTeacher {
        class_id: i64,
        teacher_id: i64,
    },
    RemoveTeacher {
        class_id: i64,
    },
}

/// 指派教师的本地预检 + 提交
///
/// 预检同入班一样只是前置拦截，并发场景下以服务端裁决为准。
pub async fn assign_teacher_with_precheck(
    context: &AppContext,
    class_id: i64,
    teacher_id: i64,
) -> Result<()> {
    let classes = context.all_classes().await?;
    let class = classes
        .iter()
        .find(|c| c.id == class_id)
        .ok_or_else(|| SchoolAdminError::not_found(format!("Class {class_id} not found")))?;
    if policy::has_teacher(class) {
        let current = class
            .teacher
            .as_ref()
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("teacher #{}", class.teacher_id.unwrap_or(0)));
        return Err(SchoolAdminError::validation(format!(
            "Class \"{}\" already has a teacher ({current})",
            class.display_name()
        )));
    }

    let teachers = context.admin.available_teachers().await?;
    let teacher = teachers
        .iter()
        .find(|t| t.id == teacher_id)
        .ok_or_else(|| SchoolAdminError::not_found(format!("Teacher {teacher_id} not found")))?;
    if !policy::can_assign_section(teacher) {
        return Err(SchoolAdminError::validation(format!(
            "Teacher {} already teaches the max sections allowed ({})",
            teacher.name,
            policy::MAX_SECTIONS_PER_TEACHER
        )));
    }

    let class = context.classes.assign_teacher(class_id, teacher_id).await?;
    context.invalidate_collections().await;
    println!(
        "Assigned {} to class {}",
        render::dash(class.teacher.as_ref().map(|t| t.name.clone())),
        class.display_name()
    );
    Ok(())
}

pub async fn dispatch(context: &AppContext, command: ClassesCommand) -> Result<()> {
    match command {
        ClassesCommand::List => {
            let classes = context.all_classes().await?;
            let rows: Vec<Vec<String>> = classes
                .iter()
                .map(|c| {
                    vec![
                        c.id.to_string(),
                        c.display_name(),
                        render::dash(c.teacher.as_ref().map(|t| t.name.clone())),
                        format!(
                            "{}/{}",
                            c.student_count.unwrap_or(0),
                            policy::MAX_STUDENTS_PER_SECTION
                        ),
                        if policy::is_full(c) { "FULL" } else { "open" }.to_string(),
                    ]
                })
                .collect();
            print!(
                "{}",
                render::render_table(&["ID", "Class", "Teacher", "Seats", "Status"], &rows)
            );
        }
        ClassesCommand::Show { id } => {
            let class = context.classes.get(id).await?;
            println!("#{} {}", class.id, class.display_name());
            println!(
                "Teacher: {}",
                render::dash(class.teacher.as_ref().map(|t| t.name.clone()))
            );
            if let Some(count) = class.student_count {
                println!(
                    "Students: {count}/{} ({} seats left)",
                    policy::MAX_STUDENTS_PER_SECTION,
                    policy::remaining_seats(&class)
                );
            }
        }
        ClassesCommand::Students { id } => {
            let students = context.classes.students(id).await?;
            let rows: Vec<Vec<String>> = students
                .iter()
                .map(|s| vec![s.id.to_string(), s.name.clone(), s.age.to_string()])
                .collect();
            print!("{}", render::render_table(&["ID", "Name", "Age"], &rows));
        }
        ClassesCommand::Create { name, section } => {
            validate::validate_name(&name).map_err(SchoolAdminError::validation)?;
            validate::validate_section(&section).map_err(SchoolAdminError::validation)?;

            let class = context
                .classes
                .create(&CreateClassRequest { name, section })
                .await?;
            context.invalidate_collections().await;
            println!("Created class #{} {}", class.id, class.display_name());
        }
        ClassesCommand::Update { id, name, section } => {
            if let Some(name) = &name {
                validate::validate_name(name).map_err(SchoolAdminError::validation)?;
            }
            if let Some(section) = &section {
                validate::validate_section(section).map_err(SchoolAdminError::validation)?;
            }

            let class = context
                .classes
                .update(id, &UpdateClassRequest { name, section })
                .await?;
            context.invalidate_collections().await;
            println!("Updated class #{}", class.id);
        }
        ClassesCommand::Delete { id } => {
            context.classes.delete(id).await?;
            context.invalidate_collections().await;
            println!("Deleted class #{id}");
        }
        ClassesCommand::AssignTeacher {
            class_id,
            teacher_id,
        } => {
            assign_teacher_with_precheck(context, class_id, teacher_id).await?;
        }
        ClassesCommand::RemoveTeacher { class_id } => {
            let class = context.classes.remove_teacher(class_id).await?;
            context.invalidate_collections().await;
            println!("Removed teacher from class {}", class.display_name());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::clock::testing::ManualClock;
    use crate::client::MemoryTokenStore;
    use crate::client::transport::testing::MockTransport;
    use crate::config::AppConfig;
    use serde_json::json;
    use std::sync::Arc;

    fn class_json(id: i64, teacher: Option<&str>) -> serde_json::Value {
        json!({
            "id": id,
            "name": "Math",
            "section": "10-A",
            "teacherId": teacher.map(|_| 8),
            "studentCount": 2,
            "teacher": teacher.map(|name| json!({
                "id": 8, "name": name, "email": "t@example.com"
            })),
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-01-01T00:00:00Z"
        })
    }

    fn teacher_json(id: i64, section_count: i64) -> serde_json::Value {
        json!({
            "id": id,
            "name": "Ms. Lin",
            "email": "lin@example.com",
            "role": "teacher",
            "createdAt": "2026-01-01T00:00:00Z",
            "sectionCount": section_count
        })
    }

    fn test_context(transport: Arc<MockTransport>) -> AppContext {
        AppContext::with_parts(
            AppConfig::default(),
            transport,
            Arc::new(MemoryTokenStore::with_tokens("tok", "refresh")),
            Arc::new(ManualClock::starting_at(0)),
        )
    }

    #[tokio::test]
    async fn test_assign_rejected_when_class_already_has_teacher() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(
            200,
            json!({ "data": { "classes": [class_json(3, Some("Mr. Wu"))] } }),
        );
        let context = test_context(transport.clone());

        let err = assign_teacher_with_precheck(&context, 3, 8)
            .await
            .unwrap_err();
        assert!(matches!(err, SchoolAdminError::Validation(_)));
        assert!(err.message().contains("already has a teacher"));
        // 没有走到教师列表或指派请求
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_assign_rejected_when_teacher_at_section_cap() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({ "data": { "classes": [class_json(3, None)] } }));
        transport.push_json(200, json!({ "data": { "teachers": [teacher_json(8, 5)] } }));
        let context = test_context(transport.clone());

        let err = assign_teacher_with_precheck(&context, 3, 8)
            .await
            .unwrap_err();
        assert!(err.is_capacity_related());
        assert!(err.message().contains("max sections"));
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_assign_goes_through_below_cap() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({ "data": { "classes": [class_json(3, None)] } }));
        transport.push_json(200, json!({ "data": { "teachers": [teacher_json(8, 4)] } }));
        transport.push_json(
            200,
            json!({ "data": { "class": class_json(3, Some("Ms. Lin")) } }),
        );
        let context = test_context(transport.clone());

        assign_teacher_with_precheck(&context, 3, 8).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[2].path, "/classes/3/assign-teacher");
        assert_eq!(requests[2].body.as_ref().unwrap(), &json!({ "teacherId": 8 }));
    }
}
