//! Text rendering of successful tool results
//!
//! Records render as `Label: value` lines in a fixed order. Optional values
//! are left out when absent or empty, and list entries are separated by a
//! blank line.

use crate::platform::api::types::{
    Application, Database, DeployResponse, Deployment, Domain, EnvironmentVariable,
    ExecuteCommandResponse, Health, PrivateKey, Project, Resource, Server, ServerValidation,
    Service, Team, TeamMember, Version,
};
use std::fmt::Display;

/// Line-by-line builder for a record block
#[derive(Debug, Default)]
struct Block {
    lines: Vec<String>,
}

impl Block {
    fn new() -> Self {
        Self::default()
    }

    fn line(mut self, label: &str, value: impl Display) -> Self {
        self.lines.push(format!("{}: {}", label, value));
        self
    }

    fn raw(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// Line only when the value is present and non-empty
    fn text(self, label: &str, value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => self.line(label, v),
            None => self,
        }
    }

    /// Line only when the value is present and non-zero
    fn number(self, label: &str, value: Option<u64>) -> Self {
        match value.filter(|v| *v != 0) {
            Some(v) => self.line(label, v),
            None => self,
        }
    }

    fn flag(self, label: &str, value: bool) -> Self {
        self.line(label, yes_no(value))
    }

    /// Blank line, heading, then a body
    fn section(self, heading: &str, body: &str) -> Self {
        self.raw(format!("\n{}:\n{}", heading, body))
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn check_mark(value: bool) -> &'static str {
    if value { "✅" } else { "❌" }
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.is_empty())
}

/// Render each record, separated by a blank line, or `empty` when there are none
pub fn list<T>(items: &[T], render: impl Fn(&T) -> String, empty: &str) -> String {
    join_or(items, render, "\n\n", empty)
}

fn join_or<T>(items: &[T], render: impl Fn(&T) -> String, separator: &str, empty: &str) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    items.iter().map(render).collect::<Vec<_>>().join(separator)
}

// =============================================================================
// Version & health
// =============================================================================

pub fn version(version: &Version) -> String {
    Block::new()
        .line("Coolify Version", &version.version)
        .text("Build Date", version.build_date.as_deref())
        .text("Commit", version.commit_hash.as_deref())
        .finish()
}

pub fn health(health: &Health) -> String {
    let mut block = Block::new()
        .line("Status", &health.status)
        .line("Timestamp", &health.timestamp);
    if let Some(services) = &health.services {
        block = block
            .raw("\nServices:")
            .line("- Database", check_mark(services.database))
            .line("- Redis", check_mark(services.redis))
            .line("- Docker", check_mark(services.docker));
    }
    block.finish()
}

// =============================================================================
// Teams
// =============================================================================

fn team_block(team: &Team) -> Block {
    Block::new()
        .line("ID", team.id)
        .line("Name", &team.name)
        .flag("Personal", team.personal_team)
        .text("Description", team.description.as_deref())
}

pub fn team_summary(team: &Team) -> String {
    team_block(team).finish()
}

pub fn team_detail(team: &Team) -> String {
    team_block(team)
        .line("Created", &team.created_at)
        .line("Updated", &team.updated_at)
        .finish()
}

pub fn current_team(team: &Team) -> String {
    format!("Current Team:\n{}", team_summary(team))
}

pub fn team_member(member: &TeamMember) -> String {
    Block::new()
        .line("ID", member.id)
        .line("Name", &member.name)
        .line("Email", &member.email)
        .line("Role", &member.role)
        .line("Joined", &member.joined_at)
        .finish()
}

// =============================================================================
// Servers
// =============================================================================

pub fn server_summary(server: &Server) -> String {
    let mut block = Block::new()
        .line("UUID", &server.uuid)
        .line("Name", &server.name)
        .line("IP", format!("{}:{}", server.ip, server.port))
        .line("User", &server.user);
    if let Some(proxy) = &server.proxy {
        block = block.line("Proxy", format!("{} ({})", proxy.proxy_type, proxy.status));
    }
    block
        .text("Description", server.description.as_deref())
        .finish()
}

pub fn server_created(server: &Server) -> String {
    Block::new()
        .raw("Server created successfully!")
        .line("UUID", &server.uuid)
        .line("Name", &server.name)
        .line("IP", format!("{}:{}", server.ip, server.port))
        .finish()
}

pub fn server_validation(validation: &ServerValidation) -> String {
    let mut block = Block::new()
        .line("Server", &validation.server)
        .line("Status", &validation.status)
        .text("Message", validation.message.as_deref());
    if let Some(errors) = validation.errors.as_ref().filter(|e| !e.is_empty()) {
        block = block.raw("Errors:");
        for error in errors {
            block = block.raw(format!("- {}", error));
        }
    }
    block.finish()
}

pub fn resource(resource: &Resource) -> String {
    Block::new()
        .line("UUID", &resource.uuid)
        .line("Name", &resource.name)
        .line("Type", &resource.resource_type)
        .line("Status", &resource.status)
        .text("URL", resource.fqdn.as_deref())
        .finish()
}

pub fn domain(domain: &Domain) -> String {
    Block::new()
        .line("Domain", &domain.domain)
        .line("Resource Type", &domain.resource_type)
        .line("Resource ID", domain.resource_id)
        .finish()
}

// =============================================================================
// Projects
// =============================================================================

pub fn project_summary(project: &Project) -> String {
    Block::new()
        .line("UUID", &project.uuid)
        .line("Name", &project.name)
        .text("Description", project.description.as_deref())
        .finish()
}

pub fn project_detail(project: &Project) -> String {
    Block::new()
        .line("UUID", &project.uuid)
        .line("Name", &project.name)
        .text("Description", project.description.as_deref())
        .line("Team ID", project.team_id)
        .line("Created", &project.created_at)
        .line("Updated", &project.updated_at)
        .finish()
}

/// `<Entity> <verb> successfully!` followed by the identifying lines
pub fn changed(entity: &str, verb: &str, uuid: &str, name: &str) -> String {
    Block::new()
        .raw(format!("{} {} successfully!", entity, verb))
        .line("UUID", uuid)
        .line("Name", name)
        .finish()
}

// =============================================================================
// Applications
// =============================================================================

pub fn application_summary(app: &Application) -> String {
    Block::new()
        .line("UUID", &app.uuid)
        .line("Name", &app.name)
        .line("Status", &app.status)
        .line("Build Pack", &app.build_pack)
        .text("URL", app.fqdn.as_deref())
        .text("Repository", app.git_repository.as_deref())
        .text("Branch", app.git_branch.as_deref())
        .finish()
}

pub fn application_detail(app: &Application) -> String {
    Block::new()
        .line("UUID", &app.uuid)
        .line("Name", &app.name)
        .line("Status", &app.status)
        .line("Build Pack", &app.build_pack)
        .text("Description", app.description.as_deref())
        .text("URL", app.fqdn.as_deref())
        .text("Repository", app.git_repository.as_deref())
        .text("Branch", app.git_branch.as_deref())
        .text("Commit", app.git_commit_sha.as_deref())
        .text("Port Mappings", app.port_mappings.as_deref())
        .text("Exposed Ports", app.port_exposes.as_deref())
        .finish()
}

pub fn application_created(app: &Application) -> String {
    Block::new()
        .raw("Application created successfully!")
        .line("UUID", &app.uuid)
        .line("Name", &app.name)
        .line("Status", &app.status)
        .finish()
}

pub fn command_output(result: &ExecuteCommandResponse) -> String {
    let mut block = Block::new().line("Exit Code", result.exit_code);
    if let Some(stdout) = non_empty(&result.stdout) {
        block = block.section("Stdout", stdout);
    }
    if let Some(stderr) = non_empty(&result.stderr) {
        block = block.section("Stderr", stderr);
    }
    block.finish()
}

pub fn logs(logs: &str) -> String {
    non_empty(logs).unwrap_or("No logs available").to_string()
}

// =============================================================================
// Databases
// =============================================================================

fn database_type(db: &Database) -> String {
    format!("{} v{}", db.database_type, db.version)
}

pub fn database_summary(db: &Database) -> String {
    Block::new()
        .line("UUID", &db.uuid)
        .line("Name", &db.name)
        .line("Type", database_type(db))
        .line("Status", &db.status)
        .number("Public Port", db.public_port)
        .finish()
}

pub fn database_detail(db: &Database) -> String {
    Block::new()
        .line("UUID", &db.uuid)
        .line("Name", &db.name)
        .line("Type", database_type(db))
        .line("Status", &db.status)
        .text("Description", db.description.as_deref())
        .number("Public Port", db.public_port)
        .line("Environment ID", db.environment_id)
        .line("Destination ID", db.destination_id)
        .finish()
}

pub fn database_created(db: &Database) -> String {
    Block::new()
        .raw("Database created successfully!")
        .line("UUID", &db.uuid)
        .line("Name", &db.name)
        .line("Type", database_type(db))
        .finish()
}

// =============================================================================
// Services
// =============================================================================

fn service_type(service: &Service) -> String {
    match service.version.as_deref().and_then(non_empty) {
        Some(version) => format!("{} v{}", service.service_type, version),
        None => service.service_type.clone(),
    }
}

pub fn service_summary(service: &Service) -> String {
    Block::new()
        .line("UUID", &service.uuid)
        .line("Name", &service.name)
        .line("Type", service_type(service))
        .line("Status", &service.status)
        .text("URL", service.fqdn.as_deref())
        .finish()
}

pub fn service_detail(service: &Service) -> String {
    Block::new()
        .line("UUID", &service.uuid)
        .line("Name", &service.name)
        .line("Type", service_type(service))
        .line("Status", &service.status)
        .text("Description", service.description.as_deref())
        .text("URL", service.fqdn.as_deref())
        .line("Environment ID", service.environment_id)
        .line("Server ID", service.server_id)
        .finish()
}

pub fn service_created(service: &Service) -> String {
    Block::new()
        .raw("Service created successfully!")
        .line("UUID", &service.uuid)
        .line("Name", &service.name)
        .line("Type", &service.service_type)
        .finish()
}

// =============================================================================
// Environment variables
// =============================================================================

fn env_pair(env: &EnvironmentVariable) -> String {
    format!("{}={}", env.key, env.value)
}

/// One line per variable, flags appended
pub fn environment_variables(vars: &[EnvironmentVariable]) -> String {
    join_or(
        vars,
        |env| {
            let mut line = env_pair(env);
            if env.is_build_time {
                line.push_str(" (build-time)");
            }
            if env.is_preview {
                line.push_str(" (preview)");
            }
            line
        },
        "\n",
        "No environment variables found",
    )
}

pub fn environment_variable_changed(verb: &str, env: &EnvironmentVariable) -> String {
    format!("Environment variable {}: {}", verb, env_pair(env))
}

// =============================================================================
// Deployments
// =============================================================================

fn deployment_block(deployment: &Deployment) -> Block {
    let mut block = Block::new()
        .line("UUID", &deployment.uuid)
        .line("Status", &deployment.status)
        .line("Application ID", deployment.application_id)
        .text("Commit", deployment.commit.as_deref());
    if let Some(pr) = deployment.pull_request_id.filter(|id| *id != 0) {
        block = block.raw(format!("PR #{}", pr));
    }
    block
}

pub fn deployment_summary(deployment: &Deployment) -> String {
    deployment_block(deployment)
        .line("Created", &deployment.created_at)
        .finish()
}

pub fn deployment_detail(deployment: &Deployment) -> String {
    let mut block = deployment_block(deployment)
        .flag("Webhook", deployment.is_webhook)
        .flag("Force Rebuild", deployment.force_rebuild)
        .line("Created", &deployment.created_at);
    if let Some(logs) = deployment.logs.as_deref().and_then(non_empty) {
        block = block.section("Logs", logs);
    }
    block.finish()
}

pub fn deploy_response(response: &DeployResponse) -> String {
    Block::new()
        .raw(response.message.as_str())
        .line("Deployment UUID", &response.deployment_uuid)
        .finish()
}

// =============================================================================
// Private keys
// =============================================================================

pub fn private_key_summary(key: &PrivateKey) -> String {
    Block::new()
        .line("UUID", &key.uuid)
        .line("Name", &key.name)
        .text("Description", key.description.as_deref())
        .finish()
}
