//! Coolify API client
//!
//! One typed method per API operation. Every method issues exactly one
//! request through the configured [`Transport`] and decodes the body into
//! the matching record type.

use super::error::{CoolifyApiError, Result};
use super::transport::{ApiRequest, HttpTransport, Transport};
use super::types::{
    ActionMessage, Application, ApplicationLogs, CreateApplicationRequest, CreateDatabaseRequest,
    CreateEnvironmentVariableRequest, CreatePrivateKeyRequest, CreateProjectRequest,
    CreateServerRequest, CreateServiceRequest, Database, DeployRequest, DeployResponse,
    Deployment, Domain, EnvironmentVariable, ExecuteCommandRequest, ExecuteCommandResponse,
    Health, HealthPayload, ListPayload, PartialUpdate, PrivateKey, Project, Resource,
    ResourceType, Server, ServerValidation, Service, Team, TeamMember, Version, VersionPayload,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Client for interacting with the Coolify API
pub struct CoolifyClient<T = HttpTransport> {
    transport: T,
}

impl CoolifyClient<HttpTransport> {
    /// Create a client talking to `base_url` with the given API token
    pub fn connect(base_url: &str, token: &str, timeout: Duration) -> Result<Self> {
        Ok(Self::new(HttpTransport::with_timeout(base_url, token, timeout)?))
    }
}

impl<T: Transport> CoolifyClient<T> {
    /// Wrap an existing transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Access the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request and decode its body
    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let body = self.transport.send(request).await?;
        decode(body)
    }

    /// Send a request whose body is a list, in either shape
    async fn fetch_list<R: DeserializeOwned>(&self, path: String) -> Result<Vec<R>> {
        let payload: ListPayload<R> = self.fetch(ApiRequest::get(path)).await?;
        Ok(payload.into_items())
    }

    /// Send a request and ignore its body
    async fn execute(&self, request: ApiRequest) -> Result<()> {
        self.transport.send(request).await.map(|_| ())
    }

    // =========================================================================
    // Version & health
    // =========================================================================

    /// Endpoint: GET /version
    pub async fn get_version(&self) -> Result<Version> {
        let payload: VersionPayload = self.fetch(ApiRequest::get("/version")).await?;
        Ok(payload.into())
    }

    /// Endpoint: GET /health
    ///
    /// A plain-text answer is stamped with the current time.
    pub async fn check_health(&self) -> Result<Health> {
        let payload: HealthPayload = self.fetch(ApiRequest::get("/health")).await?;
        Ok(match payload {
            HealthPayload::Text(status) => Health {
                status,
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                services: None,
            },
            HealthPayload::Detailed(health) => health,
        })
    }

    // =========================================================================
    // Teams
    // =========================================================================

    /// Endpoint: GET /teams
    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        self.fetch_list("/teams".to_string()).await
    }

    /// Endpoint: GET /teams/:id
    pub async fn get_team(&self, team_id: u64) -> Result<Team> {
        self.fetch(ApiRequest::get(format!("/teams/{}", team_id))).await
    }

    /// Endpoint: GET /teams/current
    pub async fn get_current_team(&self) -> Result<Team> {
        self.fetch(ApiRequest::get("/teams/current")).await
    }

    /// Endpoint: GET /teams/current/members
    pub async fn get_current_team_members(&self) -> Result<Vec<TeamMember>> {
        self.fetch_list("/teams/current/members".to_string()).await
    }

    // =========================================================================
    // Servers
    // =========================================================================

    /// Endpoint: GET /servers
    pub async fn list_servers(&self) -> Result<Vec<Server>> {
        self.fetch_list("/servers".to_string()).await
    }

    /// Endpoint: POST /servers
    pub async fn create_server(&self, data: &CreateServerRequest) -> Result<Server> {
        self.fetch(ApiRequest::post("/servers", to_body(data)?)).await
    }

    /// Endpoint: GET /servers/:uuid/validate
    pub async fn validate_server(&self, uuid: &str) -> Result<ServerValidation> {
        self.fetch(ApiRequest::get(format!("/servers/{}/validate", segment(uuid))))
            .await
    }

    /// Endpoint: GET /servers/:uuid/resources
    pub async fn get_server_resources(&self, uuid: &str) -> Result<Vec<Resource>> {
        self.fetch_list(format!("/servers/{}/resources", segment(uuid)))
            .await
    }

    /// Endpoint: GET /servers/:uuid/domains
    pub async fn get_server_domains(&self, uuid: &str) -> Result<Vec<Domain>> {
        self.fetch_list(format!("/servers/{}/domains", segment(uuid)))
            .await
    }

    // =========================================================================
    // Projects
    // =========================================================================

    /// Endpoint: GET /projects
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.fetch_list("/projects".to_string()).await
    }

    /// Endpoint: GET /projects/:id
    pub async fn get_project(&self, project_id: u64) -> Result<Project> {
        self.fetch(ApiRequest::get(format!("/projects/{}", project_id)))
            .await
    }

    /// Endpoint: POST /projects
    pub async fn create_project(&self, data: &CreateProjectRequest) -> Result<Project> {
        self.fetch(ApiRequest::post("/projects", to_body(data)?)).await
    }

    /// Endpoint: PUT /projects/:id
    pub async fn update_project(&self, project_id: u64, data: PartialUpdate) -> Result<Project> {
        self.fetch(ApiRequest::put(
            format!("/projects/{}", project_id),
            Value::Object(data),
        ))
        .await
    }

    /// Endpoint: DELETE /projects/:id
    pub async fn delete_project(&self, project_id: u64) -> Result<()> {
        self.execute(ApiRequest::delete(format!("/projects/{}", project_id)))
            .await
    }

    // =========================================================================
    // Applications
    // =========================================================================

    /// Endpoint: GET /applications
    pub async fn list_applications(&self) -> Result<Vec<Application>> {
        self.fetch_list("/applications".to_string()).await
    }

    /// Endpoint: GET /applications/:uuid
    pub async fn get_application(&self, uuid: &str) -> Result<Application> {
        self.fetch(ApiRequest::get(format!("/applications/{}", segment(uuid))))
            .await
    }

    /// Endpoint: POST /applications
    pub async fn create_application(&self, data: &CreateApplicationRequest) -> Result<Application> {
        self.fetch(ApiRequest::post("/applications", to_body(data)?))
            .await
    }

    /// Endpoint: PUT /applications/:uuid
    pub async fn update_application(&self, uuid: &str, data: PartialUpdate) -> Result<Application> {
        self.fetch(ApiRequest::put(
            format!("/applications/{}", segment(uuid)),
            Value::Object(data),
        ))
        .await
    }

    /// Endpoint: DELETE /applications/:uuid
    pub async fn delete_application(&self, uuid: &str) -> Result<()> {
        self.execute(ApiRequest::delete(format!("/applications/{}", segment(uuid))))
            .await
    }

    /// Endpoint: GET /applications/:uuid/start
    pub async fn start_application(&self, uuid: &str) -> Result<ActionMessage> {
        self.action("applications", uuid, "start").await
    }

    /// Endpoint: GET /applications/:uuid/stop
    pub async fn stop_application(&self, uuid: &str) -> Result<ActionMessage> {
        self.action("applications", uuid, "stop").await
    }

    /// Endpoint: GET /applications/:uuid/restart
    pub async fn restart_application(&self, uuid: &str) -> Result<ActionMessage> {
        self.action("applications", uuid, "restart").await
    }

    /// Endpoint: POST /applications/:uuid/execute
    pub async fn execute_command(
        &self,
        uuid: &str,
        data: &ExecuteCommandRequest,
    ) -> Result<ExecuteCommandResponse> {
        self.fetch(ApiRequest::post(
            format!("/applications/{}/execute", segment(uuid)),
            to_body(data)?,
        ))
        .await
    }

    /// Endpoint: GET /applications/:uuid/logs
    ///
    /// `since` is only sent when it is non-zero.
    pub async fn get_application_logs(&self, uuid: &str, since: Option<u64>) -> Result<String> {
        let mut path = format!("/applications/{}/logs", segment(uuid));
        if let Some(since) = since.filter(|s| *s != 0) {
            path.push_str(&format!("?since={}", since));
        }
        let logs: ApplicationLogs = self.fetch(ApiRequest::get(path)).await?;
        Ok(logs.logs)
    }

    // =========================================================================
    // Databases
    // =========================================================================

    /// Endpoint: GET /databases
    pub async fn list_databases(&self) -> Result<Vec<Database>> {
        self.fetch_list("/databases".to_string()).await
    }

    /// Endpoint: GET /databases/:uuid
    pub async fn get_database(&self, uuid: &str) -> Result<Database> {
        self.fetch(ApiRequest::get(format!("/databases/{}", segment(uuid))))
            .await
    }

    /// Endpoint: POST /databases
    pub async fn create_database(&self, data: &CreateDatabaseRequest) -> Result<Database> {
        self.fetch(ApiRequest::post("/databases", to_body(data)?)).await
    }

    /// Endpoint: PUT /databases/:uuid
    pub async fn update_database(&self, uuid: &str, data: PartialUpdate) -> Result<Database> {
        self.fetch(ApiRequest::put(
            format!("/databases/{}", segment(uuid)),
            Value::Object(data),
        ))
        .await
    }

    /// Endpoint: DELETE /databases/:uuid
    pub async fn delete_database(&self, uuid: &str) -> Result<()> {
        self.execute(ApiRequest::delete(format!("/databases/{}", segment(uuid))))
            .await
    }

    /// Endpoint: GET /databases/:uuid/start
    pub async fn start_database(&self, uuid: &str) -> Result<ActionMessage> {
        self.action("databases", uuid, "start").await
    }

    /// Endpoint: GET /databases/:uuid/stop
    pub async fn stop_database(&self, uuid: &str) -> Result<ActionMessage> {
        self.action("databases", uuid, "stop").await
    }

    /// Endpoint: GET /databases/:uuid/restart
    pub async fn restart_database(&self, uuid: &str) -> Result<ActionMessage> {
        self.action("databases", uuid, "restart").await
    }

    // =========================================================================
    // Services
    // =========================================================================

    /// Endpoint: GET /services
    pub async fn list_services(&self) -> Result<Vec<Service>> {
        self.fetch_list("/services".to_string()).await
    }

    /// Endpoint: GET /services/:uuid
    pub async fn get_service(&self, uuid: &str) -> Result<Service> {
        self.fetch(ApiRequest::get(format!("/services/{}", segment(uuid))))
            .await
    }

    /// Endpoint: POST /services
    pub async fn create_service(&self, data: &CreateServiceRequest) -> Result<Service> {
        self.fetch(ApiRequest::post("/services", to_body(data)?)).await
    }

    /// Endpoint: PUT /services/:uuid
    pub async fn update_service(&self, uuid: &str, data: PartialUpdate) -> Result<Service> {
        self.fetch(ApiRequest::put(
            format!("/services/{}", segment(uuid)),
            Value::Object(data),
        ))
        .await
    }

    /// Endpoint: DELETE /services/:uuid
    pub async fn delete_service(&self, uuid: &str) -> Result<()> {
        self.execute(ApiRequest::delete(format!("/services/{}", segment(uuid))))
            .await
    }

    /// Endpoint: GET /services/:uuid/start
    pub async fn start_service(&self, uuid: &str) -> Result<ActionMessage> {
        self.action("services", uuid, "start").await
    }

    /// Endpoint: GET /services/:uuid/stop
    pub async fn stop_service(&self, uuid: &str) -> Result<ActionMessage> {
        self.action("services", uuid, "stop").await
    }

    /// Endpoint: GET /services/:uuid/restart
    pub async fn restart_service(&self, uuid: &str) -> Result<ActionMessage> {
        self.action("services", uuid, "restart").await
    }

    // =========================================================================
    // Environment variables
    // =========================================================================

    /// Endpoint: GET /{resource}s/:uuid/envs
    pub async fn list_environment_variables(
        &self,
        resource_type: ResourceType,
        resource_uuid: &str,
    ) -> Result<Vec<EnvironmentVariable>> {
        self.fetch_list(envs_path(resource_type, resource_uuid)).await
    }

    /// Endpoint: GET /{resource}s/:uuid/envs/:id
    pub async fn get_environment_variable(
        &self,
        resource_type: ResourceType,
        resource_uuid: &str,
        env_id: u64,
    ) -> Result<EnvironmentVariable> {
        let path = format!("{}/{}", envs_path(resource_type, resource_uuid), env_id);
        self.fetch(ApiRequest::get(path)).await
    }

    /// Endpoint: POST /{resource}s/:uuid/envs
    pub async fn create_environment_variable(
        &self,
        resource_type: ResourceType,
        resource_uuid: &str,
        data: &CreateEnvironmentVariableRequest,
    ) -> Result<EnvironmentVariable> {
        self.fetch(ApiRequest::post(
            envs_path(resource_type, resource_uuid),
            to_body(data)?,
        ))
        .await
    }

    /// Endpoint: PUT /{resource}s/:uuid/envs/:id
    pub async fn update_environment_variable(
        &self,
        resource_type: ResourceType,
        resource_uuid: &str,
        env_id: u64,
        data: PartialUpdate,
    ) -> Result<EnvironmentVariable> {
        let path = format!("{}/{}", envs_path(resource_type, resource_uuid), env_id);
        self.fetch(ApiRequest::put(path, Value::Object(data))).await
    }

    /// Endpoint: DELETE /{resource}s/:uuid/envs/:id
    pub async fn delete_environment_variable(
        &self,
        resource_type: ResourceType,
        resource_uuid: &str,
        env_id: u64,
    ) -> Result<()> {
        let path = format!("{}/{}", envs_path(resource_type, resource_uuid), env_id);
        self.execute(ApiRequest::delete(path)).await
    }

    // =========================================================================
    // Deployments
    // =========================================================================

    /// Endpoint: GET /deployments
    pub async fn list_deployments(&self) -> Result<Vec<Deployment>> {
        self.fetch_list("/deployments".to_string()).await
    }

    /// Endpoint: GET /deployments/:uuid
    pub async fn get_deployment(&self, uuid: &str) -> Result<Deployment> {
        self.fetch(ApiRequest::get(format!("/deployments/{}", segment(uuid))))
            .await
    }

    /// Endpoint: POST /deploy
    pub async fn deploy_by_webhook(&self, data: &DeployRequest) -> Result<DeployResponse> {
        self.fetch(ApiRequest::post("/deploy", to_body(data)?)).await
    }

    // =========================================================================
    // Private keys
    // =========================================================================

    /// Endpoint: GET /security/keys
    pub async fn list_private_keys(&self) -> Result<Vec<PrivateKey>> {
        self.fetch_list("/security/keys".to_string()).await
    }

    /// Endpoint: POST /security/keys
    pub async fn create_private_key(&self, data: &CreatePrivateKeyRequest) -> Result<PrivateKey> {
        self.fetch(ApiRequest::post("/security/keys", to_body(data)?))
            .await
    }

    /// Endpoint: PUT /security/keys/:uuid
    pub async fn update_private_key(&self, uuid: &str, data: PartialUpdate) -> Result<PrivateKey> {
        self.fetch(ApiRequest::put(
            format!("/security/keys/{}", segment(uuid)),
            Value::Object(data),
        ))
        .await
    }

    /// Endpoint: DELETE /security/keys/:uuid
    pub async fn delete_private_key(&self, uuid: &str) -> Result<()> {
        self.execute(ApiRequest::delete(format!("/security/keys/{}", segment(uuid))))
            .await
    }

    /// Start/stop/restart share one shape: GET /{collection}/:uuid/{action}
    async fn action(&self, collection: &str, uuid: &str, action: &str) -> Result<ActionMessage> {
        self.fetch(ApiRequest::get(format!(
            "/{}/{}/{}",
            collection,
            segment(uuid),
            action
        )))
        .await
    }
}

/// Percent-encode a caller-supplied path segment
fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn envs_path(resource_type: ResourceType, resource_uuid: &str) -> String {
    format!(
        "/{}/{}/envs",
        resource_type.collection(),
        segment(resource_uuid)
    )
}

fn to_body<B: Serialize>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| CoolifyApiError::ParseError(e.to_string()))
}

fn decode<R: DeserializeOwned>(body: Value) -> Result<R> {
    serde_json::from_value(body).map_err(|e| CoolifyApiError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("abc-123"), "abc-123");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }

    #[test]
    fn test_envs_path() {
        assert_eq!(
            envs_path(ResourceType::Service, "svc-1"),
            "/services/svc-1/envs"
        );
    }

    #[test]
    fn test_client_construction() {
        let client =
            CoolifyClient::connect("https://coolify.example.com/", "token", Duration::from_secs(5))
                .unwrap();
        assert_eq!(client.transport().base_url(), "https://coolify.example.com");
    }

    #[test]
    fn test_http_error_conversion() {
        let _: fn(reqwest::Error) -> CoolifyApiError = CoolifyApiError::from;
    }
}
