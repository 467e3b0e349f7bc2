//! Menu catalog endpoints

use shared::catalog::MenuFilter;
use shared::models::{MenuCategory, MenuItem};

use crate::{ClientResult, HttpClient};

#[derive(Debug, Clone)]
pub struct MenuService {
    http: HttpClient,
}

impl MenuService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn categories(&self) -> ClientResult<Vec<MenuCategory>> {
        self.http.get("api/menu/categories").await
    }

    pub async fn items(&self) -> ClientResult<Vec<MenuItem>> {
        self.http.get("api/menu/items").await
    }

    /// Fetch the full menu and filter it locally
    pub async fn filtered(&self, filter: &MenuFilter) -> ClientResult<Vec<MenuItem>> {
        let items = self.items().await?;
        Ok(filter.apply(&items))
    }
}
