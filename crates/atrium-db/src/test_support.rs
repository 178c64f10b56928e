//! Shared test utilities for atrium-db unit tests.

pub(crate) mod helpers {
    use atrium_core::entities::ResearchProject;
    use atrium_core::inputs::NewProject;

    use crate::service::ResearchService;

    /// Create an in-memory `ResearchService`.
    pub async fn test_service() -> ResearchService {
        ResearchService::new_local(":memory:").await.unwrap()
    }

    /// Create a company and return its ID.
    pub async fn create_test_company(svc: &ResearchService, name: &str) -> i64 {
        svc.create_company(name, Some("Healthcare")).await.unwrap().id
    }

    /// Create a project with a title, category, optional client, and tags.
    pub async fn create_test_project(
        svc: &ResearchService,
        title: &str,
        category: Option<&str>,
        client_id: Option<i64>,
        tags: &[&str],
    ) -> ResearchProject {
        svc.create_project(NewProject {
            category: category.map(String::from),
            client_id,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            ..NewProject::titled(title)
        })
        .await
        .unwrap()
    }
}
