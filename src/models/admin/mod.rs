pub mod responses;

pub use responses::{
    AdminStats, TeacherClass, TeacherClassStudent, TeacherDetails, TeacherListData, UserListData,
};
