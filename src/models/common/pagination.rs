// 集合抓取用的通用分页结果
//
// 后端按资源返回不同的分页字段（见各资源的 responses.rs），
// 服务层统一转换成这个形状交给集合缓存做逐页聚合。
#[derive(Debug, Clone)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub total_pages: i64,
    pub total: i64,
}

impl<T> PagedResult<T> {
    /// 包装一次性返回全量数据的接口（如 /classes）
    pub fn single_page(items: Vec<T>) -> Self {
        let total = items.len() as i64;
        Self {
            items,
            page: 1,
            total_pages: 1,
            total,
        }
    }

    /// 是否还有后续页
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}
