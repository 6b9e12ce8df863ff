mod common;

use common::{MockTransport, Reply, assert_request, router};
use coolify_mcp::platform::api::Method;
use coolify_mcp::tools::{Operation, UnknownTool};
use serde_json::{Value, json};

async fn call(transport: &MockTransport, name: &str, args: Value) -> (bool, String) {
    let output = router(transport)
        .call(name, Some(&args))
        .await
        .expect("known tool");
    (output.is_error, output.joined_text())
}

#[tokio::test]
async fn test_get_team_renders_detail() {
    let transport = MockTransport::replying(json!({
        "id": 1,
        "name": "Team Alpha",
        "description": "Main team",
        "personal_team": false,
        "created_at": "2024-01-01",
        "updated_at": "2024-01-01"
    }));

    let (is_error, text) = call(&transport, "get_team", json!({"teamId": 1})).await;

    assert!(!is_error);
    assert_eq!(
        text,
        "ID: 1\nName: Team Alpha\nPersonal: No\nDescription: Main team\nCreated: 2024-01-01\nUpdated: 2024-01-01"
    );
    assert_request(&transport.single_request(), Method::Get, "/teams/1");
}

#[tokio::test]
async fn test_create_application_without_server_is_rejected_locally() {
    let transport = MockTransport::new();
    let (is_error, text) = call(
        &transport,
        "create_application",
        json!({"project_uuid": "p-1", "type": "public", "name": "web"}),
    )
    .await;

    assert!(is_error);
    assert_eq!(text, "Invalid argument 'server_uuid': Required");
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_remote_validation_failure_keeps_status_and_fields() {
    let transport = MockTransport::failing(
        422,
        r#"{"message":"Validation failed","errors":{"name":["Name is required"]}}"#,
    );
    let (is_error, text) = call(&transport, "create_project", json!({"name": "x"})).await;

    assert!(is_error);
    assert_eq!(text, "[422] Validation failed\nname: Name is required");
}

#[tokio::test]
async fn test_list_teams_empty() {
    let transport = MockTransport::replying(json!([]));
    let (is_error, text) = call(&transport, "list_teams", json!({})).await;
    assert!(!is_error);
    assert_eq!(text, "No teams found");
}

#[tokio::test]
async fn test_unknown_tool_is_not_a_failure_envelope() {
    let transport = MockTransport::new();
    let result = router(&transport).call("drop_everything", None).await;
    assert_eq!(result, Err(UnknownTool("drop_everything".to_string())));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_missing_required_field_never_reaches_the_api() {
    for op in Operation::ALL {
        if op.spec().required_fields().next().is_none() {
            continue;
        }
        let transport = MockTransport::new();
        let output = router(&transport).call(op.name(), None).await.unwrap();

        assert!(output.is_error, "{} should fail without arguments", op.name());
        assert!(output.joined_text().ends_with(": Required"), "{}", op.name());
        assert!(transport.requests().is_empty(), "{} called the API", op.name());
    }
}

#[tokio::test]
async fn test_empty_lists_render_fixed_sentences() {
    let cases = [
        ("list_teams", json!({}), "No teams found"),
        ("get_current_team_members", json!({}), "No team members found"),
        ("list_servers", json!({}), "No servers found"),
        ("get_server_resources", json!({"uuid": "s"}), "No resources found on this server"),
        ("get_server_domains", json!({"uuid": "s"}), "No domains found on this server"),
        ("list_projects", json!({}), "No projects found"),
        ("list_applications", json!({}), "No applications found"),
        ("list_databases", json!({}), "No databases found"),
        ("list_services", json!({}), "No services found"),
        (
            "list_environment_variables",
            json!({"resourceType": "application", "resourceUuid": "a"}),
            "No environment variables found",
        ),
        ("list_deployments", json!({}), "No deployments found"),
        ("list_private_keys", json!({}), "No private keys found"),
    ];

    for (name, args, sentence) in cases {
        let transport = MockTransport::replying(json!({"data": [], "meta": {"total": 0}}));
        let (is_error, text) = call(&transport, name, args).await;
        assert!(!is_error, "{}", name);
        assert_eq!(text, sentence, "{}", name);
    }
}

#[tokio::test]
async fn test_every_operation_hits_its_endpoint() {
    let record = json!({});
    let list = json!([]);
    let cases: Vec<(&str, Value, Method, &str, Value)> = vec![
        ("coolify_version", json!({}), Method::Get, "/version", json!("4.0.0")),
        ("coolify_health", json!({}), Method::Get, "/health", json!("OK")),
        ("list_teams", json!({}), Method::Get, "/teams", list.clone()),
        ("get_team", json!({"teamId": 3}), Method::Get, "/teams/3", record.clone()),
        ("get_current_team", json!({}), Method::Get, "/teams/current", record.clone()),
        ("get_current_team_members", json!({}), Method::Get, "/teams/current/members", list.clone()),
        ("list_servers", json!({}), Method::Get, "/servers", list.clone()),
        (
            "create_server",
            json!({"name": "n", "ip": "1.2.3.4", "private_key_uuid": "k"}),
            Method::Post,
            "/servers",
            record.clone(),
        ),
        ("validate_server", json!({"uuid": "s-1"}), Method::Get, "/servers/s-1/validate", record.clone()),
        ("get_server_resources", json!({"uuid": "s-1"}), Method::Get, "/servers/s-1/resources", list.clone()),
        ("get_server_domains", json!({"uuid": "s-1"}), Method::Get, "/servers/s-1/domains", list.clone()),
        ("list_projects", json!({}), Method::Get, "/projects", list.clone()),
        ("get_project", json!({"projectId": 5}), Method::Get, "/projects/5", record.clone()),
        ("create_project", json!({"name": "p"}), Method::Post, "/projects", record.clone()),
        ("update_project", json!({"projectId": 5, "name": "q"}), Method::Put, "/projects/5", record.clone()),
        ("delete_project", json!({"projectId": 5}), Method::Delete, "/projects/5", Value::Null),
        ("list_applications", json!({}), Method::Get, "/applications", list.clone()),
        ("get_application", json!({"uuid": "a-1"}), Method::Get, "/applications/a-1", record.clone()),
        (
            "create_application",
            json!({"project_uuid": "p", "server_uuid": "s", "type": "private", "name": "web"}),
            Method::Post,
            "/applications",
            record.clone(),
        ),
        ("update_application", json!({"uuid": "a-1"}), Method::Put, "/applications/a-1", record.clone()),
        ("delete_application", json!({"uuid": "a-1"}), Method::Delete, "/applications/a-1", Value::Null),
        ("start_application", json!({"uuid": "a-1"}), Method::Get, "/applications/a-1/start", record.clone()),
        ("stop_application", json!({"uuid": "a-1"}), Method::Get, "/applications/a-1/stop", record.clone()),
        ("restart_application", json!({"uuid": "a-1"}), Method::Get, "/applications/a-1/restart", record.clone()),
        (
            "execute_command",
            json!({"uuid": "a-1", "command": "ls"}),
            Method::Post,
            "/applications/a-1/execute",
            record.clone(),
        ),
        ("get_application_logs", json!({"uuid": "a-1"}), Method::Get, "/applications/a-1/logs", record.clone()),
        ("list_databases", json!({}), Method::Get, "/databases", list.clone()),
        ("get_database", json!({"uuid": "d-1"}), Method::Get, "/databases/d-1", record.clone()),
        (
            "create_database",
            json!({"project_uuid": "p", "server_uuid": "s", "type": "redis", "name": "cache"}),
            Method::Post,
            "/databases",
            record.clone(),
        ),
        ("update_database", json!({"uuid": "d-1"}), Method::Put, "/databases/d-1", record.clone()),
        ("delete_database", json!({"uuid": "d-1"}), Method::Delete, "/databases/d-1", Value::Null),
        ("start_database", json!({"uuid": "d-1"}), Method::Get, "/databases/d-1/start", record.clone()),
        ("stop_database", json!({"uuid": "d-1"}), Method::Get, "/databases/d-1/stop", record.clone()),
        ("restart_database", json!({"uuid": "d-1"}), Method::Get, "/databases/d-1/restart", record.clone()),
        ("list_services", json!({}), Method::Get, "/services", list.clone()),
        ("get_service", json!({"uuid": "v-1"}), Method::Get, "/services/v-1", record.clone()),
        (
            "create_service",
            json!({"project_uuid": "p", "server_uuid": "s", "type": "umami", "name": "stats"}),
            Method::Post,
            "/services",
            record.clone(),
        ),
        ("update_service", json!({"uuid": "v-1"}), Method::Put, "/services/v-1", record.clone()),
        ("delete_service", json!({"uuid": "v-1"}), Method::Delete, "/services/v-1", Value::Null),
        ("start_service", json!({"uuid": "v-1"}), Method::Get, "/services/v-1/start", record.clone()),
        ("stop_service", json!({"uuid": "v-1"}), Method::Get, "/services/v-1/stop", record.clone()),
        ("restart_service", json!({"uuid": "v-1"}), Method::Get, "/services/v-1/restart", record.clone()),
        (
            "list_environment_variables",
            json!({"resourceType": "database", "resourceUuid": "d-1"}),
            Method::Get,
            "/databases/d-1/envs",
            list.clone(),
        ),
        (
            "create_environment_variable",
            json!({"resourceType": "service", "resourceUuid": "v-1", "key": "K", "value": "V"}),
            Method::Post,
            "/services/v-1/envs",
            record.clone(),
        ),
        (
            "update_environment_variable",
            json!({"resourceType": "application", "resourceUuid": "a-1", "envId": 8, "value": "V2"}),
            Method::Put,
            "/applications/a-1/envs/8",
            record.clone(),
        ),
        (
            "delete_environment_variable",
            json!({"resourceType": "application", "resourceUuid": "a-1", "envId": 8}),
            Method::Delete,
            "/applications/a-1/envs/8",
            Value::Null,
        ),
        ("list_deployments", json!({}), Method::Get, "/deployments", list.clone()),
        ("get_deployment", json!({"uuid": "dep-1"}), Method::Get, "/deployments/dep-1", record.clone()),
        ("deploy_webhook", json!({"uuid": "a-1"}), Method::Post, "/deploy", record.clone()),
        ("list_private_keys", json!({}), Method::Get, "/security/keys", list.clone()),
        (
            "create_private_key",
            json!({"name": "k", "private_key": "-----BEGIN-----"}),
            Method::Post,
            "/security/keys",
            record.clone(),
        ),
        ("update_private_key", json!({"uuid": "k-1"}), Method::Put, "/security/keys/k-1", record.clone()),
        ("delete_private_key", json!({"uuid": "k-1"}), Method::Delete, "/security/keys/k-1", Value::Null),
    ];

    assert_eq!(cases.len(), Operation::ALL.len());

    for (name, args, method, path, reply) in cases {
        let transport = MockTransport::replying(reply);
        let (is_error, text) = call(&transport, name, args).await;
        assert!(!is_error, "{} failed: {}", name, text);
        assert_request(&transport.single_request(), method, path);
    }
}

#[tokio::test]
async fn test_create_server_sends_defaults() {
    let transport = MockTransport::replying(json!({
        "uuid": "srv-1", "name": "edge", "ip": "10.0.0.1", "port": 22
    }));
    let (_, text) = call(
        &transport,
        "create_server",
        json!({"name": "edge", "ip": "10.0.0.1", "private_key_uuid": "key-1", "bogus": 1}),
    )
    .await;

    assert_eq!(text, "Server created successfully!\nUUID: srv-1\nName: edge\nIP: 10.0.0.1:22");
    assert_eq!(
        transport.single_request().body,
        Some(json!({
            "name": "edge",
            "ip": "10.0.0.1",
            "port": 22,
            "user": "root",
            "private_key_uuid": "key-1"
        }))
    );
}

#[tokio::test]
async fn test_update_sends_only_supplied_fields() {
    let transport = MockTransport::replying(json!({"uuid": "a-1", "name": "renamed"}));
    let (_, text) = call(
        &transport,
        "update_application",
        json!({"uuid": "a-1", "name": "renamed", "git_branch": null}),
    )
    .await;

    assert_eq!(text, "Application updated successfully!\nUUID: a-1\nName: renamed");
    assert_eq!(transport.single_request().body, Some(json!({"name": "renamed"})));
}

#[tokio::test]
async fn test_environment_variable_update_body_excludes_identifiers() {
    let transport = MockTransport::replying(json!({"key": "PORT", "value": "9000"}));
    let (_, text) = call(
        &transport,
        "update_environment_variable",
        json!({"resourceType": "service", "resourceUuid": "v-1", "envId": 4, "value": "9000"}),
    )
    .await;

    assert_eq!(text, "Environment variable updated: PORT=9000");
    let request = transport.single_request();
    assert_eq!(request.path, "/services/v-1/envs/4");
    assert_eq!(request.body, Some(json!({"value": "9000"})));
}

#[tokio::test]
async fn test_update_environment_variable_requires_owner() {
    let transport = MockTransport::new();
    let (is_error, text) = call(
        &transport,
        "update_environment_variable",
        json!({"envId": 4, "value": "9000"}),
    )
    .await;

    assert!(is_error);
    assert_eq!(text, "Invalid argument 'resourceType': Required");
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_invalid_enum_rejected() {
    let transport = MockTransport::new();
    let (is_error, text) = call(
        &transport,
        "list_environment_variables",
        json!({"resourceType": "server", "resourceUuid": "s-1"}),
    )
    .await;

    assert!(is_error);
    assert!(text.starts_with("Invalid argument 'resourceType': Invalid enum value"));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_execute_command_body_and_output() {
    let transport = MockTransport::replying(json!({
        "stdout": "ok", "stderr": "warn", "exitCode": 1
    }));
    let (_, text) = call(
        &transport,
        "execute_command",
        json!({"uuid": "a-1", "command": "npm test", "workDir": "/app"}),
    )
    .await;

    assert_eq!(text, "Exit Code: 1\n\nStdout:\nok\n\nStderr:\nwarn");
    assert_eq!(
        transport.single_request().body,
        Some(json!({"command": "npm test", "workDir": "/app"}))
    );
}

#[tokio::test]
async fn test_logs_since_query() {
    let transport = MockTransport::replying(json!({"logs": "booted"}));
    let (_, text) = call(&transport, "get_application_logs", json!({"uuid": "a-1", "since": 1700000000})).await;

    assert_eq!(text, "booted");
    assert_eq!(transport.single_request().path, "/applications/a-1/logs?since=1700000000");
}

#[tokio::test]
async fn test_path_segments_are_encoded() {
    let transport = MockTransport::replying(json!({}));
    call(&transport, "get_application", json!({"uuid": "a/../b"})).await;
    assert_eq!(transport.single_request().path, "/applications/a%2F..%2Fb");
}

#[tokio::test]
async fn test_action_message_passes_through() {
    let transport = MockTransport::replying(json!({"message": "Deployment request queued."}));
    let (_, text) = call(&transport, "restart_service", json!({"uuid": "v-1"})).await;
    assert_eq!(text, "Deployment request queued.");
}

#[tokio::test]
async fn test_deploy_webhook_rendering() {
    let transport = MockTransport::replying(json!({
        "message": "Deployment started", "deployment_uuid": "dep-9"
    }));
    let (_, text) = call(&transport, "deploy_webhook", json!({"uuid": "a-1", "tag": "v2"})).await;

    assert_eq!(text, "Deployment started\nDeployment UUID: dep-9");
    assert_eq!(transport.single_request().body, Some(json!({"uuid": "a-1", "tag": "v2"})));
}

#[tokio::test]
async fn test_undecodable_body_is_a_parse_failure() {
    let transport = MockTransport::replying(json!("not a team"));
    let (is_error, text) = call(&transport, "get_team", json!({"teamId": 1})).await;

    assert!(is_error);
    assert!(text.starts_with("Failed to parse response:"));
}

#[tokio::test]
async fn test_plain_text_failure_uses_status_message() {
    let transport = MockTransport::new();
    transport.push(Reply::Status(503, "Service Unavailable".to_string()));
    let (is_error, text) = call(&transport, "list_servers", json!({})).await;

    assert!(is_error);
    assert_eq!(text, "[503] Request failed with status code 503");
}

#[tokio::test]
async fn test_health_from_plain_text_is_stamped() {
    let transport = MockTransport::replying(json!("OK"));
    let (_, text) = call(&transport, "coolify_health", json!({})).await;

    assert!(text.starts_with("Status: OK\nTimestamp: "));
    assert!(!text.contains("Services:"));
}

#[tokio::test]
async fn test_client_reads_single_environment_variable() {
    use coolify_mcp::platform::api::{CoolifyClient, ResourceType};

    let transport = MockTransport::replying(json!({"id": 8, "key": "PORT", "value": "80"}));
    let client = CoolifyClient::new(transport.clone());
    let env = client
        .get_environment_variable(ResourceType::Database, "d-1", 8)
        .await
        .unwrap();

    assert_eq!(env.key, "PORT");
    assert_request(&transport.single_request(), Method::Get, "/databases/d-1/envs/8");
}

#[tokio::test]
async fn test_null_inside_list_element_still_renders() {
    let transport = MockTransport::replying(json!([
        {"key": "EMPTY", "value": null, "is_build_time": null},
        {"key": "PORT", "value": "80"}
    ]));
    let (is_error, text) = call(
        &transport,
        "list_environment_variables",
        json!({"resourceType": "application", "resourceUuid": "a-1"}),
    )
    .await;

    assert!(!is_error, "{}", text);
    assert_eq!(text, "EMPTY=\nPORT=80");
}

#[tokio::test]
async fn test_null_on_detail_record_still_renders() {
    let transport = MockTransport::replying(json!({
        "id": 1,
        "name": "Team Alpha",
        "description": null,
        "personal_team": false,
        "created_at": "2024-01-01",
        "updated_at": null
    }));
    let (is_error, text) = call(&transport, "get_team", json!({"teamId": 1})).await;

    assert!(!is_error, "{}", text);
    assert_eq!(text, "ID: 1\nName: Team Alpha\nPersonal: No\nCreated: 2024-01-01\nUpdated: ");
}
