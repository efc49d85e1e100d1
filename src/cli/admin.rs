use clap::Subcommand;

use crate::cli::render;
use crate::errors::Result;
use crate::policy;
use crate::runtime::AppContext;

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// 全局统计
    Stats,
    /// 教师及其班级、学生的嵌套视图
    Teachers,
    /// 全部用户
    Users,
    /// 还有带班余量的教师
    AvailableTeachers,
}

pub async fn dispatch(context: &AppContext, command: AdminCommand) -> Result<()> {
    match command {
        AdminCommand::Stats => {
            let stats = context.admin.stats().await?;
            println!("Total students:  {}", stats.total_students);
            println!("Active classes:  {}", stats.active_classes);
            println!("Total teachers:  {}", stats.total_teachers);
            println!("Enrollment rate: {:.1}%", stats.enrollment_rate);
        }
        AdminCommand::Teachers => {
            let teachers = context.admin.teachers_with_details().await?;
            for teacher in &teachers {
                println!(
                    "{} <{}> ({}/{} sections)",
                    teacher.name,
                    teacher.email,
                    teacher.classes.len(),
                    policy::MAX_SECTIONS_PER_TEACHER
                );
                for class in &teacher.classes {
                    println!(
                        "  {} - {} ({}/{} students)",
                        class.name,
                        class.section,
                        class.student_count,
                        policy::MAX_STUDENTS_PER_SECTION
                    );
                    for student in &class.students {
                        println!("    #{} {} (age {})", student.id, student.name, student.age);
                    }
                }
            }
        }
        AdminCommand::Users => {
            let users = context.admin.all_users().await?;
            let rows: Vec<Vec<String>> = users
                .iter()
                .map(|u| {
                    vec![
                        u.id.to_string(),
                        u.name.clone(),
                        u.email.clone(),
                        u.role.clone(),
                    ]
                })
                .collect();
            print!(
                "{}",
                render::render_table(&["ID", "Name", "Email", "Role"], &rows)
            );
        }
        AdminCommand::AvailableTeachers => {
            let teachers = context.admin.available_teachers().await?;
            let rows: Vec<Vec<String>> = teachers
                .iter()
                .map(|t| {
                    vec![
                        t.id.to_string(),
                        t.name.clone(),
                        format!(
                            "{}/{} sections",
                            t.section_count.unwrap_or(0),
                            policy::MAX_SECTIONS_PER_TEACHER
                        ),
                    ]
                })
                .collect();
            print!(
                "{}",
                render::render_table(&["ID", "Name", "Load"], &rows)
            );
        }
    }
    Ok(())
}
