//! Prompt templates
//!
//! Static multi-step task outlines clients can fetch through `prompts/get`.
//! `{{name}}` placeholders are filled from the supplied arguments.

use super::protocol::{PromptArgumentDescriptor, PromptContent, PromptDescriptor, PromptMessage};
use serde_json::{Map, Value};

/// Declared argument of a prompt
#[derive(Debug, Clone, Copy)]
pub struct PromptArgument {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

const fn arg(name: &'static str, description: &'static str, required: bool) -> PromptArgument {
    PromptArgument {
        name,
        description,
        required,
    }
}

/// A named prompt template
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: &'static [PromptArgument],
    pub template: &'static str,
}

impl PromptTemplate {
    /// Fill supplied string arguments; other placeholders stay as written
    pub fn render(&self, arguments: Option<&Map<String, Value>>) -> String {
        let mut text = self.template.to_string();
        let Some(arguments) = arguments else {
            return text;
        };
        for argument in self.arguments {
            if let Some(value) = arguments.get(argument.name).and_then(Value::as_str) {
                text = text.replace(&format!("{{{{{}}}}}", argument.name), value);
            }
        }
        text
    }

    pub fn descriptor(&self) -> PromptDescriptor {
        PromptDescriptor {
            name: self.name,
            description: self.description,
            arguments: self
                .arguments
                .iter()
                .map(|a| PromptArgumentDescriptor {
                    name: a.name,
                    description: a.description,
                    required: a.required,
                })
                .collect(),
        }
    }

    /// The single user message returned by `prompts/get`
    pub fn message(&self, arguments: Option<&Map<String, Value>>) -> PromptMessage {
        PromptMessage {
            role: "user",
            content: PromptContent {
                content_type: "text",
                text: self.render(arguments),
            },
        }
    }
}

/// Find a prompt by name
pub fn find(name: &str) -> Option<&'static PromptTemplate> {
    PROMPTS.iter().find(|p| p.name == name)
}

pub static PROMPTS: &[PromptTemplate] = &[
    PromptTemplate {
        name: "deploy-git-app",
        description: "Deploy a new application from a Git repository",
        arguments: &[
            arg("repository", "Git repository URL", true),
            arg("appName", "Application name", true),
            arg("branch", "Git branch (default: main)", false),
        ],
        template: "Deploy a new application with these settings:
- Repository: {{repository}}
- Application name: {{appName}}
- Branch: {{branch}}

Steps:
1. List available projects and servers
2. Create the application in an appropriate project/server
3. Configure it with the Git repository
4. Start the deployment",
    },
    PromptTemplate {
        name: "setup-database",
        description: "Set up a new database with proper configuration",
        arguments: &[
            arg(
                "type",
                "Database type (postgresql, mysql, mariadb, mongodb, redis)",
                true,
            ),
            arg("name", "Database name", true),
            arg("projectName", "Project name to deploy to", false),
        ],
        template: "Set up a new {{type}} database:
- Database name: {{name}}
- Project: {{projectName}}

Steps:
1. Find or create the project
2. List available servers
3. Create the database with appropriate settings
4. Configure necessary environment variables
5. Start the database
6. Provide connection details",
    },
    PromptTemplate {
        name: "deploy-service",
        description: "Deploy a pre-configured service (like Plausible, Umami, etc.)",
        arguments: &[
            arg("serviceType", "Service type (e.g., plausible, umami, n8n)", true),
            arg("name", "Service instance name", true),
        ],
        template: "Deploy a {{serviceType}} service:
- Service name: {{name}}

Steps:
1. List available projects and servers
2. Create the service in an appropriate location
3. Configure any required environment variables
4. Start the service
5. Provide the access URL",
    },
    PromptTemplate {
        name: "environment-setup",
        description: "Set up environment variables for an application",
        arguments: &[
            arg("appName", "Application name or UUID", true),
            arg("envFile", "Environment variables (KEY=value format)", true),
        ],
        template: "Configure environment variables for {{appName}}:

Environment variables to set:
{{envFile}}

Steps:
1. Find the application by name or UUID
2. Parse and validate the environment variables
3. Create each environment variable
4. Restart the application if needed",
    },
    PromptTemplate {
        name: "server-health-check",
        description: "Check the health and resources of all servers",
        arguments: &[],
        template: "Perform a comprehensive health check:

Steps:
1. Check Coolify system health
2. List all servers
3. Validate each server connection
4. List resources on each server
5. Check the status of all applications, databases, and services
6. Provide a summary report",
    },
    PromptTemplate {
        name: "backup-database",
        description: "Create a backup of a database",
        arguments: &[arg("databaseName", "Database name or UUID", true)],
        template: "Create a backup for database {{databaseName}}:

Steps:
1. Find the database by name or UUID
2. Check database type and status
3. Execute appropriate backup command
4. Store backup safely
5. Provide backup location and instructions for restoration",
    },
    PromptTemplate {
        name: "scale-application",
        description: "Scale an application by adjusting resources",
        arguments: &[
            arg("appName", "Application name or UUID", true),
            arg("memory", "Memory limit (e.g., 512M, 2G)", false),
            arg("cpu", "CPU limit (e.g., 0.5, 2)", false),
        ],
        template: "Scale application {{appName}}:
- Memory: {{memory}}
- CPU: {{cpu}}

Steps:
1. Find the application
2. Update resource limits
3. Restart the application with new limits
4. Monitor the application status",
    },
    PromptTemplate {
        name: "setup-ssl",
        description: "Configure SSL/TLS for an application",
        arguments: &[
            arg("appName", "Application name or UUID", true),
            arg("domain", "Domain name for SSL", true),
        ],
        template: "Configure SSL for {{appName}} on domain {{domain}}:

Steps:
1. Find the application
2. Update application settings with the domain
3. Ensure SSL is enabled
4. Trigger SSL certificate generation
5. Verify SSL configuration",
    },
    PromptTemplate {
        name: "migrate-application",
        description: "Migrate an application between servers",
        arguments: &[
            arg("appName", "Application to migrate", true),
            arg("targetServer", "Target server name or UUID", true),
        ],
        template: "Migrate {{appName}} to {{targetServer}}:

Steps:
1. Find the application and current server
2. Validate target server
3. Back up application data and configuration
4. Create application on target server
5. Restore configuration and data
6. Update DNS/proxy settings
7. Verify application on new server
8. Clean up old instance",
    },
    PromptTemplate {
        name: "troubleshoot-deployment",
        description: "Troubleshoot a failed deployment",
        arguments: &[arg("appName", "Application name or UUID", true)],
        template: "Troubleshoot deployment issues for {{appName}}:

Steps:
1. Check application status
2. Review recent deployments
3. Examine deployment logs
4. Check server resources
5. Verify environment variables
6. Check build configuration
7. Provide diagnosis and recommendations",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog_names() {
        let names: Vec<&str> = PROMPTS.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), 10);
        assert!(names.contains(&"troubleshoot-deployment"));
        assert!(find("server-health-check").is_some());
        assert!(find("format-disk").is_none());
    }

    #[test]
    fn test_render_substitutes_supplied_arguments() {
        let prompt = find("setup-ssl").unwrap();
        let args = json!({"appName": "shop", "domain": "shop.example.com"});
        let text = prompt.render(args.as_object());
        assert!(text.starts_with("Configure SSL for shop on domain shop.example.com:"));
    }

    #[test]
    fn test_render_keeps_missing_placeholders() {
        let prompt = find("deploy-git-app").unwrap();
        let args = json!({"repository": "https://github.com/acme/web", "appName": "web"});
        let text = prompt.render(args.as_object());
        assert!(text.contains("- Repository: https://github.com/acme/web"));
        assert!(text.contains("- Branch: {{branch}}"));
        assert_eq!(prompt.render(None), prompt.template);
    }

    #[test]
    fn test_descriptor_lists_arguments() {
        let descriptor = find("scale-application").unwrap().descriptor();
        assert_eq!(descriptor.arguments.len(), 3);
        assert!(descriptor.arguments[0].required);
        assert!(!descriptor.arguments[2].required);
    }
}
