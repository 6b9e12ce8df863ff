//! Tool call routing
//!
//! [`ToolRouter`] resolves a tool name, validates its arguments, makes the one
//! matching API call and renders the outcome. Every call to a known tool
//! produces a [`ToolOutput`]; only unknown names are rejected.

use super::failure::{Failure, failure_output};
use super::format;
use super::output::ToolOutput;
use super::registry::Operation;
use super::schema::{ValidatedArgs, ValidationError};
use crate::platform::api::types::{
    CreateApplicationRequest, CreateDatabaseRequest, CreateEnvironmentVariableRequest,
    CreatePrivateKeyRequest, CreateProjectRequest, CreateServerRequest, CreateServiceRequest,
    DeployRequest, ExecuteCommandRequest, ResourceType,
};
use crate::platform::api::{CoolifyApiError, CoolifyClient, FieldErrors, Transport};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// The requested tool does not exist
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown tool: {0}")]
pub struct UnknownTool(pub String);

/// Why a known tool call failed
#[derive(Debug, Error)]
pub enum CallError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Remote(#[from] CoolifyApiError),
}

impl Failure for CallError {
    fn message(&self) -> Option<String> {
        match self {
            CallError::Validation(e) => e.message(),
            CallError::Remote(e) => Failure::message(e),
        }
    }

    fn status(&self) -> Option<u16> {
        match self {
            CallError::Validation(e) => e.status(),
            CallError::Remote(e) => Failure::status(e),
        }
    }

    fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CallError::Validation(e) => e.field_errors(),
            CallError::Remote(e) => Failure::field_errors(e),
        }
    }
}

type CallResult = Result<String, CallError>;

#[derive(Deserialize)]
struct TeamRef {
    #[serde(rename = "teamId")]
    team_id: u64,
}

#[derive(Deserialize)]
struct ProjectRef {
    #[serde(rename = "projectId")]
    project_id: u64,
}

#[derive(Deserialize)]
struct UuidRef {
    uuid: String,
}

#[derive(Deserialize)]
struct LogsQuery {
    uuid: String,
    #[serde(default)]
    since: Option<u64>,
}

#[derive(Deserialize)]
struct CommandCall {
    uuid: String,
    #[serde(flatten)]
    request: ExecuteCommandRequest,
}

#[derive(Deserialize)]
struct EnvOwner {
    #[serde(rename = "resourceType")]
    resource_type: ResourceType,
    #[serde(rename = "resourceUuid")]
    resource_uuid: String,
}

#[derive(Deserialize)]
struct EnvRef {
    #[serde(flatten)]
    owner: EnvOwner,
    #[serde(rename = "envId")]
    env_id: u64,
}

#[derive(Deserialize)]
struct EnvCreate {
    #[serde(flatten)]
    owner: EnvOwner,
    #[serde(flatten)]
    request: CreateEnvironmentVariableRequest,
}

const ENV_KEYS: &[&str] = &["resourceType", "resourceUuid", "envId"];

/// Routes tool calls onto the API client
pub struct ToolRouter<T: Transport> {
    client: CoolifyClient<T>,
}

impl<T: Transport> ToolRouter<T> {
    pub fn new(client: CoolifyClient<T>) -> Self {
        Self { client }
    }

    /// Run one tool call.
    ///
    /// Validation and API failures come back as error outputs; only an
    /// unknown tool name is an `Err`.
    pub async fn call(&self, name: &str, arguments: Option<&Value>) -> Result<ToolOutput, UnknownTool> {
        let operation = Operation::from_name(name).ok_or_else(|| UnknownTool(name.to_string()))?;
        debug!("Calling tool {}", name);

        let outcome = match operation.spec().validate(arguments) {
            Ok(args) => self.execute(operation, args).await,
            Err(e) => {
                debug!("Rejected arguments for {}: {}", name, e);
                Err(e.into())
            }
        };

        Ok(match outcome {
            Ok(text) => ToolOutput::text(text),
            Err(err) => {
                if let CallError::Remote(e) = &err {
                    match e.status() {
                        Some(status) => warn!("{} failed with status {}: {}", name, status, e),
                        None => warn!("{} failed: {}", name, e),
                    }
                }
                failure_output(&err)
            }
        })
    }

    async fn execute(&self, operation: Operation, args: ValidatedArgs) -> CallResult {
        use Operation::*;

        let client = &self.client;
        let text = match operation {
            CoolifyVersion => format::version(&client.get_version().await?),
            CoolifyHealth => format::health(&client.check_health().await?),

            ListTeams => format::list(
                &client.list_teams().await?,
                format::team_summary,
                "No teams found",
            ),
            GetTeam => {
                let TeamRef { team_id } = args.parse()?;
                format::team_detail(&client.get_team(team_id).await?)
            }
            GetCurrentTeam => format::current_team(&client.get_current_team().await?),
            GetCurrentTeamMembers => format::list(
                &client.get_current_team_members().await?,
                format::team_member,
                "No team members found",
            ),

            ListServers => format::list(
                &client.list_servers().await?,
                format::server_summary,
                "No servers found",
            ),
            CreateServer => {
                let request: CreateServerRequest = args.parse()?;
                format::server_created(&client.create_server(&request).await?)
            }
            ValidateServer => {
                let UuidRef { uuid } = args.parse()?;
                format::server_validation(&client.validate_server(&uuid).await?)
            }
            GetServerResources => {
                let UuidRef { uuid } = args.parse()?;
                format::list(
                    &client.get_server_resources(&uuid).await?,
                    format::resource,
                    "No resources found on this server",
                )
            }
            GetServerDomains => {
                let UuidRef { uuid } = args.parse()?;
                format::list(
                    &client.get_server_domains(&uuid).await?,
                    format::domain,
                    "No domains found on this server",
                )
            }

            ListProjects => format::list(
                &client.list_projects().await?,
                format::project_summary,
                "No projects found",
            ),
            GetProject => {
                let ProjectRef { project_id } = args.parse()?;
                format::project_detail(&client.get_project(project_id).await?)
            }
            CreateProject => {
                let request: CreateProjectRequest = args.parse()?;
                let project = client.create_project(&request).await?;
                format::changed("Project", "created", &project.uuid, &project.name)
            }
            UpdateProject => {
                let ProjectRef { project_id } = args.parse()?;
                let data = args.without(&["projectId"]);
                let project = client.update_project(project_id, data).await?;
                format::changed("Project", "updated", &project.uuid, &project.name)
            }
            DeleteProject => {
                let ProjectRef { project_id } = args.parse()?;
                client.delete_project(project_id).await?;
                "Project deleted successfully".to_string()
            }

            ListApplications => format::list(
                &client.list_applications().await?,
                format::application_summary,
                "No applications found",
            ),
            GetApplication => {
                let UuidRef { uuid } = args.parse()?;
                format::application_detail(&client.get_application(&uuid).await?)
            }
            CreateApplication => {
                let request: CreateApplicationRequest = args.parse()?;
                format::application_created(&client.create_application(&request).await?)
            }
            UpdateApplication => {
                let UuidRef { uuid } = args.parse()?;
                let app = client.update_application(&uuid, args.without(&["uuid"])).await?;
                format::changed("Application", "updated", &app.uuid, &app.name)
            }
            DeleteApplication => {
                let UuidRef { uuid } = args.parse()?;
                client.delete_application(&uuid).await?;
                "Application deleted successfully".to_string()
            }
            StartApplication => {
                let UuidRef { uuid } = args.parse()?;
                client.start_application(&uuid).await?.message
            }
            StopApplication => {
                let UuidRef { uuid } = args.parse()?;
                client.stop_application(&uuid).await?.message
            }
            RestartApplication => {
                let UuidRef { uuid } = args.parse()?;
                client.restart_application(&uuid).await?.message
            }
            ExecuteCommand => {
                let CommandCall { uuid, request } = args.parse()?;
                format::command_output(&client.execute_command(&uuid, &request).await?)
            }
            GetApplicationLogs => {
                let LogsQuery { uuid, since } = args.parse()?;
                format::logs(&client.get_application_logs(&uuid, since).await?)
            }

            ListDatabases => format::list(
                &client.list_databases().await?,
                format::database_summary,
                "No databases found",
            ),
            GetDatabase => {
                let UuidRef { uuid } = args.parse()?;
                format::database_detail(&client.get_database(&uuid).await?)
            }
            CreateDatabase => {
                let request: CreateDatabaseRequest = args.parse()?;
                format::database_created(&client.create_database(&request).await?)
            }
            UpdateDatabase => {
                let UuidRef { uuid } = args.parse()?;
                let db = client.update_database(&uuid, args.without(&["uuid"])).await?;
                format::changed("Database", "updated", &db.uuid, &db.name)
            }
            DeleteDatabase => {
                let UuidRef { uuid } = args.parse()?;
                client.delete_database(&uuid).await?;
                "Database deleted successfully".to_string()
            }
            StartDatabase => {
                let UuidRef { uuid } = args.parse()?;
                client.start_database(&uuid).await?.message
            }
            StopDatabase => {
                let UuidRef { uuid } = args.parse()?;
                client.stop_database(&uuid).await?.message
            }
            RestartDatabase => {
                let UuidRef { uuid } = args.parse()?;
                client.restart_database(&uuid).await?.message
            }

            ListServices => format::list(
                &client.list_services().await?,
                format::service_summary,
                "No services found",
            ),
            GetService => {
                let UuidRef { uuid } = args.parse()?;
                format::service_detail(&client.get_service(&uuid).await?)
            }
            CreateService => {
                let request: CreateServiceRequest = args.parse()?;
                format::service_created(&client.create_service(&request).await?)
            }
            UpdateService => {
                let UuidRef { uuid } = args.parse()?;
                let service = client.update_service(&uuid, args.without(&["uuid"])).await?;
                format::changed("Service", "updated", &service.uuid, &service.name)
            }
            DeleteService => {
                let UuidRef { uuid } = args.parse()?;
                client.delete_service(&uuid).await?;
                "Service deleted successfully".to_string()
            }
            StartService => {
                let UuidRef { uuid } = args.parse()?;
                client.start_service(&uuid).await?.message
            }
            StopService => {
                let UuidRef { uuid } = args.parse()?;
                client.stop_service(&uuid).await?.message
            }
            RestartService => {
                let UuidRef { uuid } = args.parse()?;
                client.restart_service(&uuid).await?.message
            }

            ListEnvironmentVariables => {
                let owner: EnvOwner = args.parse()?;
                format::environment_variables(
                    &client
                        .list_environment_variables(owner.resource_type, &owner.resource_uuid)
                        .await?,
                )
            }
            CreateEnvironmentVariable => {
                let EnvCreate { owner, request } = args.parse()?;
                let env = client
                    .create_environment_variable(
                        owner.resource_type,
                        &owner.resource_uuid,
                        &request,
                    )
                    .await?;
                format::environment_variable_changed("created", &env)
            }
            UpdateEnvironmentVariable => {
                let EnvRef { owner, env_id } = args.parse()?;
                let env = client
                    .update_environment_variable(
                        owner.resource_type,
                        &owner.resource_uuid,
                        env_id,
                        args.without(ENV_KEYS),
                    )
                    .await?;
                format::environment_variable_changed("updated", &env)
            }
            DeleteEnvironmentVariable => {
                let EnvRef { owner, env_id } = args.parse()?;
                client
                    .delete_environment_variable(owner.resource_type, &owner.resource_uuid, env_id)
                    .await?;
                "Environment variable deleted successfully".to_string()
            }

            ListDeployments => format::list(
                &client.list_deployments().await?,
                format::deployment_summary,
                "No deployments found",
            ),
            GetDeployment => {
                let UuidRef { uuid } = args.parse()?;
                format::deployment_detail(&client.get_deployment(&uuid).await?)
            }
            DeployWebhook => {
                let request: DeployRequest = args.parse()?;
                format::deploy_response(&client.deploy_by_webhook(&request).await?)
            }

            ListPrivateKeys => format::list(
                &client.list_private_keys().await?,
                format::private_key_summary,
                "No private keys found",
            ),
            CreatePrivateKey => {
                let request: CreatePrivateKeyRequest = args.parse()?;
                let key = client.create_private_key(&request).await?;
                format::changed("Private key", "created", &key.uuid, &key.name)
            }
            UpdatePrivateKey => {
                let UuidRef { uuid } = args.parse()?;
                let key = client.update_private_key(&uuid, args.without(&["uuid"])).await?;
                format::changed("Private key", "updated", &key.uuid, &key.name)
            }
            DeletePrivateKey => {
                let UuidRef { uuid } = args.parse()?;
                client.delete_private_key(&uuid).await?;
                "Private key deleted successfully".to_string()
            }
        };

        Ok(text)
    }
}
