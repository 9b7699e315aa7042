use serde_json::Value;
use shared::model::{ProjectDto, ProjectRequest, ProjectResponse, ProjectsResponse};
use shared::utils::API_PREFIX;
use crate::error::Error;
use crate::services::{request_delete, request_get, request_post, request_put};

pub struct ProjectService {
    project_path: String,
}

impl ProjectService {
    pub fn new() -> Self {
        Self {
            project_path: format!("{API_PREFIX}/projects"),
        }
    }

    /// Public catalog, filtered by `query` when it is not blank.
    pub async fn list_published(&self, query: &str) -> Result<Vec<ProjectDto>, Error> {
        let response: ProjectsResponse = request_get(&catalog_path(&self.project_path, query)).await?;
        Ok(response.projects)
    }

    pub async fn list_all(&self) -> Result<Vec<ProjectDto>, Error> {
        let response: ProjectsResponse = request_get(&format!("{}/all", self.project_path)).await?;
        Ok(response.projects)
    }

    pub async fn list_mine(&self) -> Result<Vec<ProjectDto>, Error> {
        let response: ProjectsResponse = request_get(&format!("{}/mine", self.project_path)).await?;
        Ok(response.projects)
    }

    pub async fn save(&self, id: Option<u64>, project: ProjectRequest) -> Result<ProjectDto, Error> {
        let response: ProjectResponse = match id {
            Some(id) => request_put(&format!("{}/{id}", self.project_path), project).await?,
            None => request_post(&self.project_path, project).await?,
        };
        Ok(response.project)
    }

    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        request_delete::<Value>(&format!("{}/{id}", self.project_path)).await.map(|_| ())
    }
}

fn catalog_path(project_path: &str, query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        project_path.to_string()
    } else {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        format!("{project_path}?q={encoded}")
    }
}
