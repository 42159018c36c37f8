//! Workspace endpoints and the paginated aggregation lists below them.

use uuid::Uuid;

use crate::api::models::{
    CreateWorkspaceRequest, FullDomain, FullHost, FullPort, FullService, FullWorkspaceTag, Page,
    SimpleWorkspace, UuidResponse, WorkspacesResponse, WorkspaceTagsResponse,
};
use crate::api::{ApiResult, get_json, post_json};

/// Create a new workspace and return its uuid.
pub async fn create(name: String, description: Option<String>) -> ApiResult<Uuid> {
    let response: UuidResponse = post_json(
        "/api/v1/workspaces".to_owned(),
        &CreateWorkspaceRequest { name, description },
    )
    .await?;
    Ok(response.uuid)
}

/// Fetch all workspaces of the current user.
pub async fn all() -> ApiResult<Vec<SimpleWorkspace>> {
    let response: WorkspacesResponse = get_json("/api/v1/workspaces".to_owned(), vec![]).await?;
    Ok(response.workspaces)
}

/// Fetch a single workspace.
pub async fn get(workspace: Uuid) -> ApiResult<SimpleWorkspace> {
    get_json(format!("/api/v1/workspaces/{workspace}"), vec![]).await
}

/// Fetch all tags of a workspace.
pub async fn tags(workspace: Uuid) -> ApiResult<Vec<FullWorkspaceTag>> {
    let response: WorkspaceTagsResponse =
        get_json(format!("/api/v1/workspaces/{workspace}/tags"), vec![]).await?;
    Ok(response.workspace_tags)
}

/// Fetch one page of a workspace's hosts.
pub async fn hosts(workspace: Uuid, limit: u64, offset: u64) -> ApiResult<Page<FullHost>> {
    get_json(
        format!("/api/v1/workspaces/{workspace}/hosts"),
        page_query(limit, offset, None),
    )
    .await
}

/// Fetch a single host of a workspace.
pub async fn get_host(workspace: Uuid, host: Uuid) -> ApiResult<FullHost> {
    get_json(format!("/api/v1/workspaces/{workspace}/hosts/{host}"), vec![]).await
}

/// Fetch one page of a workspace's ports, optionally restricted to one host.
pub async fn ports(
    workspace: Uuid,
    limit: u64,
    offset: u64,
    host: Option<Uuid>,
) -> ApiResult<Page<FullPort>> {
    get_json(
        format!("/api/v1/workspaces/{workspace}/ports"),
        page_query(limit, offset, host),
    )
    .await
}

/// Fetch one page of a workspace's services, optionally restricted to one host.
pub async fn services(
    workspace: Uuid,
    limit: u64,
    offset: u64,
    host: Option<Uuid>,
) -> ApiResult<Page<FullService>> {
    get_json(
        format!("/api/v1/workspaces/{workspace}/services"),
        page_query(limit, offset, host),
    )
    .await
}

/// Fetch one page of a workspace's domains, optionally restricted to one host.
pub async fn domains(
    workspace: Uuid,
    limit: u64,
    offset: u64,
    host: Option<Uuid>,
) -> ApiResult<Page<FullDomain>> {
    get_json(
        format!("/api/v1/workspaces/{workspace}/domains"),
        page_query(limit, offset, host),
    )
    .await
}

fn page_query(limit: u64, offset: u64, host: Option<Uuid>) -> Vec<(&'static str, String)> {
    let mut query = vec![("limit", limit.to_string()), ("offset", offset.to_string())];
    if let Some(host) = host {
        query.push(("host", host.to_string()));
    }
    query
}
