//! Tool catalog
//!
//! Every callable tool has an [`Operation`] variant and an [`OperationSpec`]
//! describing its input. The specs are built once on first use and never
//! change afterwards.

use super::schema::{FieldDefault, FieldSpec, OperationSpec};
use once_cell::sync::Lazy;

const APPLICATION_TYPES: &[&str] = &["public", "private"];
const DATABASE_TYPES: &[&str] = &["postgresql", "mysql", "mariadb", "mongodb", "redis"];
const RESOURCE_TYPES: &[&str] = &["application", "service", "database"];

/// A tool exposed over the protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // Version & health
    CoolifyVersion,
    CoolifyHealth,
    // Teams
    ListTeams,
    GetTeam,
    GetCurrentTeam,
    GetCurrentTeamMembers,
    // Servers
    ListServers,
    CreateServer,
    ValidateServer,
    GetServerResources,
    GetServerDomains,
    // Projects
    ListProjects,
    GetProject,
    CreateProject,
    UpdateProject,
    DeleteProject,
    // Applications
    ListApplications,
    GetApplication,
    CreateApplication,
    UpdateApplication,
    DeleteApplication,
    StartApplication,
    StopApplication,
    RestartApplication,
    ExecuteCommand,
    GetApplicationLogs,
    // Databases
    ListDatabases,
    GetDatabase,
    CreateDatabase,
    UpdateDatabase,
    DeleteDatabase,
    StartDatabase,
    StopDatabase,
    RestartDatabase,
    // Services
    ListServices,
    GetService,
    CreateService,
    UpdateService,
    DeleteService,
    StartService,
    StopService,
    RestartService,
    // Environment variables
    ListEnvironmentVariables,
    CreateEnvironmentVariable,
    UpdateEnvironmentVariable,
    DeleteEnvironmentVariable,
    // Deployments
    ListDeployments,
    GetDeployment,
    DeployWebhook,
    // Private keys
    ListPrivateKeys,
    CreatePrivateKey,
    UpdatePrivateKey,
    DeletePrivateKey,
}

impl Operation {
    /// Every operation, in listing order
    pub const ALL: [Operation; 53] = [
        Operation::CoolifyVersion,
        Operation::CoolifyHealth,
        Operation::ListTeams,
        Operation::GetTeam,
        Operation::GetCurrentTeam,
        Operation::GetCurrentTeamMembers,
        Operation::ListServers,
        Operation::CreateServer,
        Operation::ValidateServer,
        Operation::GetServerResources,
        Operation::GetServerDomains,
        Operation::ListProjects,
        Operation::GetProject,
        Operation::CreateProject,
        Operation::UpdateProject,
        Operation::DeleteProject,
        Operation::ListApplications,
        Operation::GetApplication,
        Operation::CreateApplication,
        Operation::UpdateApplication,
        Operation::DeleteApplication,
        Operation::StartApplication,
        Operation::StopApplication,
        Operation::RestartApplication,
        Operation::ExecuteCommand,
        Operation::GetApplicationLogs,
        Operation::ListDatabases,
        Operation::GetDatabase,
        Operation::CreateDatabase,
        Operation::UpdateDatabase,
        Operation::DeleteDatabase,
        Operation::StartDatabase,
        Operation::StopDatabase,
        Operation::RestartDatabase,
        Operation::ListServices,
        Operation::GetService,
        Operation::CreateService,
        Operation::UpdateService,
        Operation::DeleteService,
        Operation::StartService,
        Operation::StopService,
        Operation::RestartService,
        Operation::ListEnvironmentVariables,
        Operation::CreateEnvironmentVariable,
        Operation::UpdateEnvironmentVariable,
        Operation::DeleteEnvironmentVariable,
        Operation::ListDeployments,
        Operation::GetDeployment,
        Operation::DeployWebhook,
        Operation::ListPrivateKeys,
        Operation::CreatePrivateKey,
        Operation::UpdatePrivateKey,
        Operation::DeletePrivateKey,
    ];

    /// Tool name as seen by clients
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CoolifyVersion => "coolify_version",
            Operation::CoolifyHealth => "coolify_health",
            Operation::ListTeams => "list_teams",
            Operation::GetTeam => "get_team",
            Operation::GetCurrentTeam => "get_current_team",
            Operation::GetCurrentTeamMembers => "get_current_team_members",
            Operation::ListServers => "list_servers",
            Operation::CreateServer => "create_server",
            Operation::ValidateServer => "validate_server",
            Operation::GetServerResources => "get_server_resources",
            Operation::GetServerDomains => "get_server_domains",
            Operation::ListProjects => "list_projects",
            Operation::GetProject => "get_project",
            Operation::CreateProject => "create_project",
            Operation::UpdateProject => "update_project",
            Operation::DeleteProject => "delete_project",
            Operation::ListApplications => "list_applications",
            Operation::GetApplication => "get_application",
            Operation::CreateApplication => "create_application",
            Operation::UpdateApplication => "update_application",
            Operation::DeleteApplication => "delete_application",
            Operation::StartApplication => "start_application",
            Operation::StopApplication => "stop_application",
            Operation::RestartApplication => "restart_application",
            Operation::ExecuteCommand => "execute_command",
            Operation::GetApplicationLogs => "get_application_logs",
            Operation::ListDatabases => "list_databases",
            Operation::GetDatabase => "get_database",
            Operation::CreateDatabase => "create_database",
            Operation::UpdateDatabase => "update_database",
            Operation::DeleteDatabase => "delete_database",
            Operation::StartDatabase => "start_database",
            Operation::StopDatabase => "stop_database",
            Operation::RestartDatabase => "restart_database",
            Operation::ListServices => "list_services",
            Operation::GetService => "get_service",
            Operation::CreateService => "create_service",
            Operation::UpdateService => "update_service",
            Operation::DeleteService => "delete_service",
            Operation::StartService => "start_service",
            Operation::StopService => "stop_service",
            Operation::RestartService => "restart_service",
            Operation::ListEnvironmentVariables => "list_environment_variables",
            Operation::CreateEnvironmentVariable => "create_environment_variable",
            Operation::UpdateEnvironmentVariable => "update_environment_variable",
            Operation::DeleteEnvironmentVariable => "delete_environment_variable",
            Operation::ListDeployments => "list_deployments",
            Operation::GetDeployment => "get_deployment",
            Operation::DeployWebhook => "deploy_webhook",
            Operation::ListPrivateKeys => "list_private_keys",
            Operation::CreatePrivateKey => "create_private_key",
            Operation::UpdatePrivateKey => "update_private_key",
            Operation::DeletePrivateKey => "delete_private_key",
        }
    }

    /// Resolve a tool name
    pub fn from_name(name: &str) -> Option<Operation> {
        Operation::ALL.iter().copied().find(|op| op.name() == name)
    }

    /// Input contract of this tool
    pub fn spec(&self) -> &'static OperationSpec {
        &CATALOG[*self as usize]
    }
}

/// Every tool contract, indexed by `Operation as usize`
static CATALOG: Lazy<Vec<OperationSpec>> =
    Lazy::new(|| Operation::ALL.iter().map(|op| build_spec(*op)).collect());

/// All tool contracts, in listing order
pub fn catalog() -> &'static [OperationSpec] {
    &CATALOG
}

// =============================================================================
// Shared field sets
// =============================================================================

const TEAM_ID: FieldSpec = FieldSpec::integer("teamId", "The team ID").required();
const PROJECT_ID: FieldSpec = FieldSpec::integer("projectId", "The project ID").required();
const SERVER_UUID: FieldSpec = FieldSpec::string("uuid", "The server UUID").required();
const APPLICATION_UUID: FieldSpec = FieldSpec::string("uuid", "The application UUID").required();
const DATABASE_UUID: FieldSpec = FieldSpec::string("uuid", "The database UUID").required();
const SERVICE_UUID: FieldSpec = FieldSpec::string("uuid", "The service UUID").required();
const DEPLOYMENT_UUID: FieldSpec = FieldSpec::string("uuid", "The deployment UUID").required();
const PRIVATE_KEY_UUID: FieldSpec = FieldSpec::string("uuid", "The private key UUID").required();
const RESOURCE_TYPE: FieldSpec =
    FieldSpec::one_of("resourceType", RESOURCE_TYPES, "Resource type").required();
const RESOURCE_UUID: FieldSpec = FieldSpec::string("resourceUuid", "Resource UUID").required();
const ENV_ID: FieldSpec = FieldSpec::integer("envId", "Environment variable ID").required();

const CREATE_SERVER: &[FieldSpec] = &[
    FieldSpec::string("name", "Server name").required(),
    FieldSpec::string("description", "Server description"),
    FieldSpec::string("ip", "Server IP address").required(),
    FieldSpec::integer("port", "SSH port").with_default(FieldDefault::Integer(22)),
    FieldSpec::string("user", "SSH user").with_default(FieldDefault::Text("root")),
    FieldSpec::string("private_key_uuid", "UUID of the private key to use for SSH").required(),
    FieldSpec::boolean("is_build_server", "Whether this is a build server"),
    FieldSpec::boolean(
        "instant_validate",
        "Validate server immediately after creation",
    ),
];

const CREATE_PROJECT: &[FieldSpec] = &[
    FieldSpec::string("name", "Project name").required(),
    FieldSpec::string("description", "Project description"),
];

const CREATE_APPLICATION: &[FieldSpec] = &[
    FieldSpec::string("project_uuid", "Project UUID").required(),
    FieldSpec::string("environment_name", "Environment name"),
    FieldSpec::string("server_uuid", "Server UUID").required(),
    FieldSpec::one_of("type", APPLICATION_TYPES, "Application type").required(),
    FieldSpec::string("name", "Application name").required(),
    FieldSpec::string("description", "Application description"),
    FieldSpec::string("git_repository", "Git repository URL"),
    FieldSpec::string("git_branch", "Git branch"),
    FieldSpec::string("git_commit_sha", "Git commit SHA"),
    FieldSpec::string("ports_exposes", "Exposed ports"),
    FieldSpec::string("ports_mappings", "Port mappings"),
    FieldSpec::string("build_pack", "Build pack to use"),
    FieldSpec::string("install_command", "Install command"),
    FieldSpec::string("build_command", "Build command"),
    FieldSpec::string("start_command", "Start command"),
    FieldSpec::string("base_directory", "Base directory"),
    FieldSpec::string("publish_directory", "Publish directory"),
    FieldSpec::boolean("health_check_enabled", "Enable health check"),
    FieldSpec::string("health_check_path", "Health check path"),
    FieldSpec::string("limits_memory", "Memory limit"),
    FieldSpec::string("limits_cpus", "CPU limit"),
    FieldSpec::boolean("instant_deploy", "Deploy immediately after creation"),
];

const CREATE_DATABASE: &[FieldSpec] = &[
    FieldSpec::string("project_uuid", "Project UUID").required(),
    FieldSpec::string("environment_name", "Environment name"),
    FieldSpec::string("server_uuid", "Server UUID").required(),
    FieldSpec::one_of("type", DATABASE_TYPES, "Database type").required(),
    FieldSpec::string("name", "Database name").required(),
    FieldSpec::string("description", "Database description"),
    FieldSpec::string("version", "Database version"),
    FieldSpec::integer("public_port", "Public port"),
    FieldSpec::string("limits_memory", "Memory limit"),
    FieldSpec::string("limits_cpus", "CPU limit"),
    FieldSpec::string("postgres_user", "PostgreSQL user"),
    FieldSpec::string("postgres_password", "PostgreSQL password"),
    FieldSpec::string("postgres_db", "PostgreSQL database name"),
    FieldSpec::string("mysql_user", "MySQL user"),
    FieldSpec::string("mysql_password", "MySQL password"),
    FieldSpec::string("mysql_database", "MySQL database name"),
    FieldSpec::string("mysql_root_password", "MySQL root password"),
    FieldSpec::string("mariadb_user", "MariaDB user"),
    FieldSpec::string("mariadb_password", "MariaDB password"),
    FieldSpec::string("mariadb_database", "MariaDB database name"),
    FieldSpec::string("mariadb_root_password", "MariaDB root password"),
    FieldSpec::string("mongo_initdb_root_username", "MongoDB root username"),
    FieldSpec::string("mongo_initdb_root_password", "MongoDB root password"),
    FieldSpec::string("mongo_initdb_database", "MongoDB database name"),
    FieldSpec::string("redis_password", "Redis password"),
    FieldSpec::boolean("instant_deploy", "Deploy immediately after creation"),
];

const CREATE_SERVICE: &[FieldSpec] = &[
    FieldSpec::string("project_uuid", "Project UUID").required(),
    FieldSpec::string("environment_name", "Environment name"),
    FieldSpec::string("server_uuid", "Server UUID").required(),
    FieldSpec::string("type", "Service type (e.g., plausible, umami, etc.)").required(),
    FieldSpec::string("name", "Service name").required(),
    FieldSpec::string("description", "Service description"),
    FieldSpec::boolean("instant_deploy", "Deploy immediately after creation"),
];

const ENV_VAR_BODY: &[FieldSpec] = &[
    FieldSpec::string("key", "Environment variable key").required(),
    FieldSpec::string("value", "Environment variable value").required(),
    FieldSpec::boolean("is_build_time", "Available at build time"),
    FieldSpec::boolean("is_preview", "Available in preview deployments"),
    FieldSpec::boolean("is_shared", "Shared across environments"),
];

const CREATE_PRIVATE_KEY: &[FieldSpec] = &[
    FieldSpec::string("name", "Private key name").required(),
    FieldSpec::string("description", "Private key description"),
    FieldSpec::string("private_key", "Private key content").required(),
];

fn build_spec(op: Operation) -> OperationSpec {
    use Operation::*;

    let name = op.name();
    let simple = |description: &'static str, fields: &[FieldSpec]| {
        OperationSpec::new(name, description, fields.to_vec())
    };

    match op {
        CoolifyVersion => simple("Get the Coolify version information", &[]),
        CoolifyHealth => simple("Check the health status of Coolify and its services", &[]),

        ListTeams => simple("List all teams", &[]),
        GetTeam => simple("Get details of a specific team", &[TEAM_ID]),
        GetCurrentTeam => simple("Get details of the current team", &[]),
        GetCurrentTeamMembers => simple("Get members of the current team", &[]),

        ListServers => simple("List all servers", &[]),
        CreateServer => simple("Create a new server", CREATE_SERVER),
        ValidateServer => simple("Validate server connection and configuration", &[SERVER_UUID]),
        GetServerResources => simple(
            "Get all resources (applications, services, databases) on a server",
            &[SERVER_UUID],
        ),
        GetServerDomains => simple("Get all domains configured on a server", &[SERVER_UUID]),

        ListProjects => simple("List all projects", &[]),
        GetProject => simple("Get details of a specific project", &[PROJECT_ID]),
        CreateProject => simple("Create a new project", CREATE_PROJECT),
        UpdateProject => OperationSpec::update(
            name,
            "Update an existing project",
            &[PROJECT_ID],
            CREATE_PROJECT,
        ),
        DeleteProject => simple("Delete a project", &[PROJECT_ID]),

        ListApplications => simple("List all applications", &[]),
        GetApplication => simple("Get details of a specific application", &[APPLICATION_UUID]),
        CreateApplication => simple("Create a new application", CREATE_APPLICATION),
        UpdateApplication => OperationSpec::update(
            name,
            "Update an existing application",
            &[APPLICATION_UUID],
            CREATE_APPLICATION,
        ),
        DeleteApplication => simple("Delete an application", &[APPLICATION_UUID]),
        StartApplication => simple("Start an application", &[APPLICATION_UUID]),
        StopApplication => simple("Stop an application", &[APPLICATION_UUID]),
        RestartApplication => simple("Restart an application", &[APPLICATION_UUID]),
        ExecuteCommand => simple(
            "Execute a command in an application container",
            &[
                APPLICATION_UUID,
                FieldSpec::string("command", "Command to execute").required(),
                FieldSpec::string("workDir", "Working directory"),
            ],
        ),
        GetApplicationLogs => simple(
            "Get logs from an application",
            &[
                APPLICATION_UUID,
                FieldSpec::integer("since", "Unix timestamp to get logs since"),
            ],
        ),

        ListDatabases => simple("List all databases", &[]),
        GetDatabase => simple("Get details of a specific database", &[DATABASE_UUID]),
        CreateDatabase => simple("Create a new database", CREATE_DATABASE),
        UpdateDatabase => OperationSpec::update(
            name,
            "Update an existing database",
            &[DATABASE_UUID],
            CREATE_DATABASE,
        ),
        DeleteDatabase => simple("Delete a database", &[DATABASE_UUID]),
        StartDatabase => simple("Start a database", &[DATABASE_UUID]),
        StopDatabase => simple("Stop a database", &[DATABASE_UUID]),
        RestartDatabase => simple("Restart a database", &[DATABASE_UUID]),

        ListServices => simple("List all services", &[]),
        GetService => simple("Get details of a specific service", &[SERVICE_UUID]),
        CreateService => simple("Create a new service", CREATE_SERVICE),
        UpdateService => OperationSpec::update(
            name,
            "Update an existing service",
            &[SERVICE_UUID],
            CREATE_SERVICE,
        ),
        DeleteService => simple("Delete a service", &[SERVICE_UUID]),
        StartService => simple("Start a service", &[SERVICE_UUID]),
        StopService => simple("Stop a service", &[SERVICE_UUID]),
        RestartService => simple("Restart a service", &[SERVICE_UUID]),

        ListEnvironmentVariables => simple(
            "List environment variables for a resource",
            &[RESOURCE_TYPE, RESOURCE_UUID],
        ),
        CreateEnvironmentVariable => {
            let fields = [RESOURCE_TYPE, RESOURCE_UUID]
                .into_iter()
                .chain(ENV_VAR_BODY.iter().copied())
                .collect();
            OperationSpec::new(name, "Create a new environment variable", fields)
        }
        UpdateEnvironmentVariable => {
            let fields = [RESOURCE_TYPE, RESOURCE_UUID]
                .into_iter()
                .chain(ENV_VAR_BODY.iter().map(|f| f.partial()))
                .chain([ENV_ID])
                .collect();
            OperationSpec::new(name, "Update an existing environment variable", fields)
        }
        DeleteEnvironmentVariable => simple(
            "Delete an environment variable",
            &[RESOURCE_TYPE, RESOURCE_UUID, ENV_ID],
        ),

        ListDeployments => simple("List all deployments", &[]),
        GetDeployment => simple("Get details of a specific deployment", &[DEPLOYMENT_UUID]),
        DeployWebhook => simple(
            "Trigger deployment via webhook",
            &[
                FieldSpec::string("uuid", "Application or service UUID").required(),
                FieldSpec::string("tag", "Docker image tag"),
            ],
        ),

        ListPrivateKeys => simple("List all private keys", &[]),
        CreatePrivateKey => simple("Create a new private key", CREATE_PRIVATE_KEY),
        UpdatePrivateKey => OperationSpec::update(
            name,
            "Update an existing private key",
            &[PRIVATE_KEY_UUID],
            CREATE_PRIVATE_KEY,
        ),
        DeletePrivateKey => simple("Delete a private key", &[PRIVATE_KEY_UUID]),
    }
}
