pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::Student;
pub use requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest};
pub use responses::{StudentData, StudentListData, StudentPage};
