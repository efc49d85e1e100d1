pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::{Class, ClassSummary, ClassTeacher, EnrolledClass};
pub use requests::{
    AssignTeacherRequest, CreateClassRequest, EnrollStudentRequest, UpdateClassRequest,
};
pub use responses::{ClassData, ClassListData, MyClassesData};
