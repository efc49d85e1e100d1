use crate::errors::{Result, SchoolAdminError};
use crate::models::students::UpdateStudentRequest;
use crate::policy;
use crate::runtime::AppContext;

/// 入班编排：本地容量预检 → 写入 classId → 缓存失效
///
/// 预检只是 UX 前置拦截，满员班级在发出任何网络请求之前就被拒绝；
/// 并发抢占最后一个名额的裁决权在服务端，其拒绝消息原样上抛。
pub async fn enroll_with_precheck(
    context: &AppContext,
    student_id: i64,
    class_id: i64,
) -> Result<()> {
    let classes = context.all_classes().await?;
    let class = classes
        .iter()
        .find(|c| c.id == class_id)
        .ok_or_else(|| SchoolAdminError::not_found(format!("Class {class_id} not found")))?;

    if policy::is_full(class) {
        return Err(SchoolAdminError::validation(format!(
            "Class \"{}\" is full. Maximum {} students allowed per section.",
            class.display_name(),
            policy::MAX_STUDENTS_PER_SECTION
        )));
    }

    // 原型通过学生更新接口写入 classId 完成入班
    context
        .students
        .update(student_id, &UpdateStudentRequest::enroll_into(class_id))
        .await?;
    context.invalidate_collections().await;
    Ok(())
}

pub async fn enroll(context: &AppContext, student_id: i64, class_id: i64) -> Result<()> {
    enroll_with_precheck(context, student_id, class_id).await?;
    println!("Enrolled student #{student_id} into class #{class_id}");
    Ok(())
}
