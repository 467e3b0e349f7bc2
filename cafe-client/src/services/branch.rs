//! Branch directory

use shared::models::Branch;

use crate::{ClientResult, HttpClient};

#[derive(Debug, Clone)]
pub struct BranchService {
    http: HttpClient,
}

impl BranchService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<Branch>> {
        self.http.get("api/branches").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Branch> {
        self.http.get(&format!("api/branches/{id}")).await
    }
}
