//! API payload types for the Coolify API
//!
//! Response records mirror what the Coolify v1 API returns. They are lenient:
//! missing fields fall back to their defaults so a partially populated record
//! still renders. Request bodies skip absent optional fields entirely.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Read an explicit `null` as the field's default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Response envelopes
// =============================================================================

/// A list response, returned either as a bare array or wrapped in a
/// paginated envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    /// Plain JSON array
    Bare(Vec<T>),
    /// `{ "data": [...], "links": {...}, "meta": {...} }`
    Envelope(ListEnvelope<T>),
}

impl<T> ListPayload<T> {
    /// Unwrap either shape into the ordered list of records
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListPayload::Bare(items) => items,
            ListPayload::Envelope(envelope) => envelope.data,
        }
    }
}

/// Paginated list envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    /// Records on this page
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub data: Vec<T>,
    /// Navigation links
    #[serde(default)]
    pub links: Option<PaginationLinks>,
    /// Page metadata
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
}

/// Pagination links of a list envelope
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PaginationLinks {
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Pagination metadata of a list envelope
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PaginationMeta {
    pub current_page: Option<u64>,
    pub from: Option<u64>,
    pub last_page: Option<u64>,
    pub path: Option<String>,
    pub per_page: Option<u64>,
    pub to: Option<u64>,
    pub total: Option<u64>,
}

/// `/version` answers with either a bare string or a record
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VersionPayload {
    Text(String),
    Detailed(Version),
}

impl From<VersionPayload> for Version {
    fn from(payload: VersionPayload) -> Self {
        match payload {
            VersionPayload::Text(version) => Version {
                version,
                ..Default::default()
            },
            VersionPayload::Detailed(version) => version,
        }
    }
}

/// `/health` answers with either a bare string or a record
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HealthPayload {
    Text(String),
    Detailed(Health),
}

// =============================================================================
// Records
// =============================================================================

/// Coolify version information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Version {
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    pub build_date: Option<String>,
    pub commit_hash: Option<String>,
}

/// Coolify health status
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Health {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: String,
    pub services: Option<HealthServices>,
}

/// Per-subsystem health flags
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthServices {
    #[serde(deserialize_with = "null_as_default")]
    pub database: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub redis: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub docker: bool,
}

/// Team information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub personal_team: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Member of the current team
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub joined_at: String,
}

/// Proxy attached to a server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerProxy {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub proxy_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

/// Server information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ip: String,
    #[serde(deserialize_with = "null_as_default")]
    pub port: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub user: String,
    pub private_key_id: Option<u64>,
    pub team_id: Option<u64>,
    pub proxy: Option<ServerProxy>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Result of validating a server's connection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerValidation {
    #[serde(deserialize_with = "null_as_default")]
    pub server: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
}

/// Resource (application, service or database) hosted on a server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub resource_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub fqdn: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
}

/// Domain routed by a server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub resource_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub resource_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
}

/// One-click service information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub service_type: String,
    pub version: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub fqdn: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub environment_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub server_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Application information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    pub git_repository: Option<String>,
    pub git_branch: Option<String>,
    pub git_commit_sha: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub build_pack: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub fqdn: Option<String>,
    pub port_mappings: Option<String>,
    pub port_exposes: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub environment_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub destination_id: u64,
    pub source_id: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Database information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Database {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub database_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub public_port: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub environment_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub destination_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Project information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub team_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Environment variable attached to an application, service or database
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentVariable {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_build_time: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_preview: bool,
    pub application_id: Option<u64>,
    pub service_id: Option<u64>,
    pub database_id: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Deployment information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Deployment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub application_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub deployment_uuid: String,
    pub pull_request_id: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub force_rebuild: bool,
    pub commit: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_webhook: bool,
    pub logs: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// SSH private key information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivateKey {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub private_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub team_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Server-supplied message of a start/stop/restart action
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionMessage {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}

/// Output of a command executed inside an application container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecuteCommandResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub stdout: String,
    #[serde(deserialize_with = "null_as_default")]
    pub stderr: String,
    #[serde(rename = "exitCode")]
    #[serde(deserialize_with = "null_as_default")]
    pub exit_code: i64,
}

/// Application log output
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationLogs {
    #[serde(deserialize_with = "null_as_default")]
    pub logs: String,
}

/// Result of a webhook-triggered deployment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deployment_uuid: String,
}

// =============================================================================
// Enumerations
// =============================================================================

/// Visibility of an application's git source
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationType {
    Public,
    Private,
}

/// Database engines Coolify can provision
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    Postgresql,
    Mysql,
    Mariadb,
    Mongodb,
    Redis,
}

/// Kind of resource that owns environment variables
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Application,
    Service,
    Database,
}

impl ResourceType {
    /// Returns the lowercase identifier for this resource type
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Application => "application",
            ResourceType::Service => "service",
            ResourceType::Database => "database",
        }
    }

    /// Returns the collection segment used in API paths
    pub fn collection(&self) -> &'static str {
        match self {
            ResourceType::Application => "applications",
            ResourceType::Service => "services",
            ResourceType::Database => "databases",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Request bodies
// =============================================================================

/// Fields sent with an update; only supplied fields are present
pub type PartialUpdate = serde_json::Map<String, serde_json::Value>;

/// Request body for registering a server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateServerRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub ip: String,
    pub port: u64,
    pub user: String,
    pub private_key_uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_build_server: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instant_validate: Option<bool>,
}

/// Request body for creating an application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateApplicationRequest {
    pub project_uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_name: Option<String>,
    pub server_uuid: String,
    #[serde(rename = "type")]
    pub application_type: ApplicationType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_commit_sha: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports_exposes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports_mappings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_pack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits_memory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits_cpus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instant_deploy: Option<bool>,
}

/// Request body for creating a database
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateDatabaseRequest {
    pub project_uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_name: Option<String>,
    pub server_uuid: String,
    #[serde(rename = "type")]
    pub database_type: DatabaseType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_port: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits_memory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits_cpus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postgres_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postgres_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postgres_db: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mysql_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mysql_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mysql_database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mysql_root_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mariadb_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mariadb_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mariadb_database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mariadb_root_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mongo_initdb_root_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mongo_initdb_root_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mongo_initdb_database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instant_deploy: Option<bool>,
}

/// Request body for creating a one-click service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateServiceRequest {
    pub project_uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_name: Option<String>,
    pub server_uuid: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instant_deploy: Option<bool>,
}

/// Request body for creating a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request body for creating an environment variable
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateEnvironmentVariableRequest {
    pub key: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_build_time: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_preview: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_shared: Option<bool>,
}

/// Request body for executing a command in an application container
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExecuteCommandRequest {
    pub command: String,
    #[serde(rename = "workDir", default, skip_serializing_if = "Option::is_none")]
    pub work_dir: Option<String>,
}

/// Request body for registering an SSH private key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatePrivateKeyRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub private_key: String,
}

/// Request body for triggering a deployment through the deploy webhook
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeployRequest {
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_payload_accepts_bare_array() {
        let payload: ListPayload<Team> =
            serde_json::from_value(json!([{"id": 1, "name": "Alpha"}])).unwrap();
        let teams = payload.into_items();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].name, "Alpha");
    }

    #[test]
    fn test_list_payload_unwraps_envelope() {
        let payload: ListPayload<Project> = serde_json::from_value(json!({
            "data": [{"uuid": "p-1", "name": "One"}, {"uuid": "p-2", "name": "Two"}],
            "meta": {"current_page": 1, "total": 2}
        }))
        .unwrap();
        let projects = payload.into_items();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].uuid, "p-2");
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let team: Team = serde_json::from_value(json!({
            "id": null,
            "name": "Alpha",
            "personal_team": null,
            "updated_at": null
        }))
        .unwrap();
        assert_eq!(team.id, 0);
        assert!(!team.personal_team);
        assert_eq!(team.updated_at, "");

        let payload: ListPayload<EnvironmentVariable> =
            serde_json::from_value(json!({"data": [{"key": "EMPTY", "value": null}]})).unwrap();
        assert_eq!(payload.into_items()[0].value, "");
    }

    #[test]
    fn test_list_envelope_without_data_is_empty() {
        let payload: ListPayload<Server> =
            serde_json::from_value(json!({"meta": {"total": 0}})).unwrap();
        assert!(payload.into_items().is_empty());

        let payload: ListPayload<Server> =
            serde_json::from_value(json!({"data": null})).unwrap();
        assert!(payload.into_items().is_empty());
    }

    #[test]
    fn test_version_payload_from_text() {
        let payload: VersionPayload = serde_json::from_value(json!("4.0.0-beta.400")).unwrap();
        let version = Version::from(payload);
        assert_eq!(version.version, "4.0.0-beta.400");
        assert!(version.build_date.is_none());
    }

    #[test]
    fn test_create_request_skips_absent_fields() {
        let request = CreateProjectRequest {
            name: "web".to_string(),
            description: None,
        };
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"name": "web"}));
    }

    #[test]
    fn test_resource_type_collection() {
        assert_eq!(ResourceType::Application.collection(), "applications");
        assert_eq!(ResourceType::Database.to_string(), "database");
    }
}
