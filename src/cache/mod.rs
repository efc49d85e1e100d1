//! 集合缓存层
//!
//! 列表页需要在本地做过滤和分页，而后端只提供逐页接口，
//! 这里维护按资源类型区分的全量集合缓存，避免重复整表抓取。

pub mod clock;
pub mod collection;
pub mod seq;

pub use clock::{Clock, SystemClock};
pub use collection::CollectionCache;
pub use seq::RequestSequence;
