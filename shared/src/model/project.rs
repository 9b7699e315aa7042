use serde::{Deserialize, Serialize};
use crate::utils::{deserialize_as_flag_unless_false, deserialize_as_string, deserialize_as_string_list};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: u64,
    pub title: String,
    pub summary: String,
    pub industry: String,
    pub owner_name: String,
    pub owner_role: String,
    pub results: Vec<String>,
    pub bullets: Vec<String>,
    pub client_email: Option<String>,
    pub published: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Create/update payload. Missing fields default to empty, required fields
/// are checked by the handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    #[serde(default, deserialize_with = "deserialize_as_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_as_string")]
    pub summary: String,
    #[serde(default, deserialize_with = "deserialize_as_string")]
    pub industry: String,
    #[serde(default, deserialize_with = "deserialize_as_string")]
    pub owner_name: String,
    #[serde(default, deserialize_with = "deserialize_as_string")]
    pub owner_role: String,
    #[serde(default, deserialize_with = "deserialize_as_string_list")]
    pub results: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_as_string_list")]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub client_email: Option<String>,
    /// Published unless explicitly `false`.
    #[serde(default = "default_published", deserialize_with = "deserialize_as_flag_unless_false")]
    pub published: bool,
}

const fn default_published() -> bool { true }

impl Default for ProjectRequest {
    fn default() -> Self {
        Self {
            title: String::new(),
            summary: String::new(),
            industry: String::new(),
            owner_name: String::new(),
            owner_role: String::new(),
            results: Vec::new(),
            bullets: Vec::new(),
            client_email: None,
            published: true,
        }
    }
}

impl ProjectRequest {
    /// Trims text fields and normalizes the client email, empty becomes `None`.
    pub fn normalize(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.summary = self.summary.trim().to_string();
        self.industry = self.industry.trim().to_string();
        self.owner_name = self.owner_name.trim().to_string();
        self.owner_role = self.owner_role.trim().to_string();
        self.client_email = self.client_email
            .map(|email| email.trim().to_lowercase())
            .filter(|email| !email.is_empty());
        self
    }

    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.summary.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub project: ProjectDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsResponse {
    pub projects: Vec<ProjectDto>,
}

#[cfg(test)]
mod tests {
    use super::ProjectRequest;

    #[test]
    fn published_defaults_to_true() {
        let req: ProjectRequest = serde_json::from_str(r#"{"title":"T","summary":"S"}"#).unwrap();
        assert!(req.published);
        let req: ProjectRequest = serde_json::from_str(r#"{"title":"T","published":false}"#).unwrap();
        assert!(!req.published);
    }

    #[test]
    fn loose_payload_is_accepted() {
        let req: ProjectRequest = serde_json::from_str(r#"{"title":"T","summary":"S","published":null}"#).unwrap();
        assert!(req.published);
        let req: ProjectRequest = serde_json::from_str(r#"{"title":"T","summary":"S","results":"not-a-list","bullets":{"a":1}}"#).unwrap();
        assert!(req.results.is_empty());
        assert!(req.bullets.is_empty());
        let req: ProjectRequest = serde_json::from_str(r#"{"title":null,"summary":"S","results":["+20%",3]}"#).unwrap();
        assert!(req.title.is_empty());
        assert_eq!(req.results, vec!["+20%", "3"]);
    }

    #[test]
    fn normalize_client_email() {
        let req: ProjectRequest = serde_json::from_str(r#"{"title":" T ","summary":"S","clientEmail":" Cliente@Demo.Local "}"#).unwrap();
        let req = req.normalize();
        assert_eq!(req.title, "T");
        assert_eq!(req.client_email.as_deref(), Some("cliente@demo.local"));
        assert!(req.is_complete());

        let req: ProjectRequest = serde_json::from_str(r#"{"title":"T","clientEmail":"  "}"#).unwrap();
        let req = req.normalize();
        assert_eq!(req.client_email, None);
        assert!(!req.is_complete());
    }
}
