use crate::repository::{now_timestamp, Database};
use shared::error::PortalError;
use shared::model::{ProjectDto, ProjectRequest};
use shared::utils::contains_ignore_case;

fn newest_first(projects: &mut [ProjectDto]) {
    projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
}

async fn select<P>(db: &Database, predicate: P) -> Vec<ProjectDto>
where
    P: Fn(&ProjectDto) -> bool,
{
    let mut projects: Vec<ProjectDto> = db.read().await.projects.iter().filter(|p| predicate(p)).cloned().collect();
    newest_first(&mut projects);
    projects
}

/// Published projects, filtered by a case-insensitive search over title and summary.
pub async fn list_published(db: &Database, query: &str) -> Vec<ProjectDto> {
    let query = query.trim().to_lowercase();
    select(db, |p| {
        p.published && (query.is_empty() || contains_ignore_case(&p.title, &query) || contains_ignore_case(&p.summary, &query))
    }).await
}

pub async fn list_all(db: &Database) -> Vec<ProjectDto> {
    select(db, |_| true).await
}

/// Published projects assigned to `email`.
pub async fn list_for_client(db: &Database, email: &str) -> Vec<ProjectDto> {
    let email = email.trim().to_lowercase();
    select(db, |p| p.published && p.client_email.as_ref().is_some_and(|c| c.to_lowercase() == email)).await
}

pub async fn exists(db: &Database, id: u64) -> bool {
    db.read().await.projects.iter().any(|p| p.id == id)
}

pub async fn count(db: &Database) -> usize {
    db.read().await.projects.len()
}

fn apply(project: &mut ProjectDto, request: ProjectRequest) {
    project.title = request.title;
    project.summary = request.summary;
    project.industry = request.industry;
    project.owner_name = request.owner_name;
    project.owner_role = request.owner_role;
    project.results = request.results;
    project.bullets = request.bullets;
    project.client_email = request.client_email;
    project.published = request.published;
}

pub async fn create_project(db: &Database, request: ProjectRequest) -> Result<ProjectDto, PortalError> {
    db.write(move |tables| {
        let now = now_timestamp();
        let mut project = ProjectDto {
            id: tables.next_project_id(),
            title: String::new(),
            summary: String::new(),
            industry: String::new(),
            owner_name: String::new(),
            owner_role: String::new(),
            results: Vec::new(),
            bullets: Vec::new(),
            client_email: None,
            published: true,
            created_at: now.clone(),
            updated_at: now,
        };
        apply(&mut project, request);
        tables.projects.push(project.clone());
        project
    }).await
}

/// `Ok(None)` if there is no project with `id`.
pub async fn update_project(db: &Database, id: u64, request: ProjectRequest) -> Result<Option<ProjectDto>, PortalError> {
    if !exists(db, id).await {
        return Ok(None);
    }
    db.write(move |tables| {
        tables.projects.iter_mut().find(|p| p.id == id).map(|project| {
            apply(project, request);
            project.updated_at = now_timestamp();
            project.clone()
        })
    }).await
}

pub async fn delete_project(db: &Database, id: u64) -> Result<bool, PortalError> {
    if !exists(db, id).await {
        return Ok(false);
    }
    db.write(move |tables| {
        let before = tables.projects.len();
        tables.projects.retain(|p| p.id != id);
        before != tables.projects.len()
    }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, client: Option<&str>, published: bool) -> ProjectRequest {
        ProjectRequest {
            title: title.to_string(),
            summary: format!("{title} summary"),
            client_email: client.map(ToString::to_string),
            published,
            ..ProjectRequest::default()
        }
    }

    #[tokio::test]
    async fn public_search_and_client_filter() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path()).await.unwrap();
        create_project(&db, request("Tablero ejecutivo", Some("cliente@demo.local"), true)).await.unwrap();
        create_project(&db, request("Atención al cliente", Some("otro@demo.local"), true)).await.unwrap();
        create_project(&db, request("Borrador", Some("cliente@demo.local"), false)).await.unwrap();

        assert_eq!(list_published(&db, "").await.len(), 2);
        let found = list_published(&db, "  TABLERO ").await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Tablero ejecutivo");
        assert!(list_published(&db, "borrador").await.is_empty());

        let mine = list_for_client(&db, "Cliente@Demo.Local").await;
        assert_eq!(mine.len(), 1);
        assert_eq!(list_all(&db).await.len(), 3);
        // same second, newer id first
        assert_eq!(list_all(&db).await[0].title, "Borrador");
    }

    #[tokio::test]
    async fn update_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path()).await.unwrap();
        let project = create_project(&db, request("Uno", None, true)).await.unwrap();
        assert!(update_project(&db, 99, request("X", None, true)).await.unwrap().is_none());
        let updated = update_project(&db, project.id, request("Dos", None, false)).await.unwrap().unwrap();
        assert_eq!(updated.title, "Dos");
        assert!(!updated.published);
        assert_eq!(updated.created_at, project.created_at);
        assert!(delete_project(&db, project.id).await.unwrap());
        assert!(!delete_project(&db, project.id).await.unwrap());
        assert_eq!(count(&db).await, 0);
    }
}
