//! Shared fixtures for client integration tests
//!
//! [`FakePanel`] keeps cron jobs, environment variables and config files in
//! memory so round trips (create, read back, delete) can be asserted against
//! a real HTTP server.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use qinglong_client::QlClient;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const CLIENT_ID: &str = "it-client";
pub const CLIENT_SECRET: &str = "it-secret";
pub const TOKEN: &str = "it-token";
pub const INITIAL_CONFIG: &str = "export TG_BOT_TOKEN=\"\"\n";

/// Log in against `uri` with the fixture credentials.
pub fn connect(uri: &str) -> QlClient {
    QlClient::new(uri, CLIENT_ID, CLIENT_SECRET).expect("login against test panel")
}

/// Mount only the token endpoint; callers add their own expectations.
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/open/auth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": {"token": TOKEN, "token_type": "Bearer", "expiration": 1_900_000_000}
        })))
        .mount(server)
        .await;
}

/// Requests the server has seen, as `(method, path, query)`.
pub async fn request_log(server: &MockServer) -> Vec<(String, String, Option<String>)> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|r| (r.method.to_string(), r.url.path().to_string(), r.url.query().map(str::to_string)))
        .collect()
}

#[derive(Default)]
struct PanelState {
    next_id: i64,
    crons: BTreeMap<i64, Value>,
    envs: BTreeMap<i64, Value>,
    subscriptions: BTreeMap<i64, Value>,
    configs: BTreeMap<String, String>,
}

impl PanelState {
    fn allocate(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory stand-in for the panel's open API
#[derive(Clone, Default)]
pub struct FakePanel {
    state: Arc<Mutex<PanelState>>,
}

impl FakePanel {
    pub async fn start() -> (MockServer, Self) {
        let server = MockServer::start().await;
        let panel = Self::default();
        panel
            .state
            .lock()
            .unwrap()
            .configs
            .insert("config.sh".to_string(), INITIAL_CONFIG.to_string());

        Mock::given(path_regex("^/open/")).respond_with(panel.clone()).mount(&server).await;
        (server, panel)
    }

    pub fn cron_count(&self) -> usize {
        self.state.lock().unwrap().crons.len()
    }

    pub fn env_count(&self) -> usize {
        self.state.lock().unwrap().envs.len()
    }

    pub fn subscription_count(&self) -> usize {
        self.state.lock().unwrap().subscriptions.len()
    }

    /// Last body stored for an environment variable, as the panel saw it.
    pub fn env(&self, id: i64) -> Option<Value> {
        self.state.lock().unwrap().envs.get(&id).cloned()
    }
}

fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"code": 200, "data": data}))
}

fn ok_empty() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"code": 200}))
}

fn failure(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({"code": status, "message": message}))
}

fn query(request: &Request, key: &str) -> Option<String> {
    request.url.query_pairs().find(|(k, _)| k == key).map(|(_, v)| v.into_owned())
}

fn authorized(request: &Request) -> bool {
    request
        .headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {TOKEN}"))
}

impl Respond for FakePanel {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let path = request.url.path().trim_start_matches("/open/").to_string();
        let segments: Vec<&str> = path.split('/').collect();

        if segments.as_slice() == ["auth", "token"] {
            let valid = query(request, "client_id").as_deref() == Some(CLIENT_ID)
                && query(request, "client_secret").as_deref() == Some(CLIENT_SECRET);
            return if valid {
                ok(json!({"token": TOKEN, "token_type": "Bearer", "expiration": 1_900_000_000}))
            } else {
                failure(400, "invalid client")
            };
        }
        if !authorized(request) {
            return failure(401, "unauthorized");
        }

        let mut state = self.state.lock().unwrap();
        let body: Value = request.body_json().unwrap_or(Value::Null);

        match (request.method.as_str(), segments.as_slice()) {
            ("POST", ["crons"]) => {
                let id = state.allocate();
                let mut job = body;
                job["id"] = json!(id);
                job["isDisabled"] = json!(0);
                state.crons.insert(id, job.clone());
                ok(job)
            }
            ("PUT", ["crons"]) => {
                let id = body["id"].as_i64().unwrap_or_default();
                match state.crons.get_mut(&id) {
                    Some(job) => {
                        *job = body;
                        ok(job.clone())
                    }
                    None => failure(404, "cron not found"),
                }
            }
            ("DELETE", ["crons"]) => {
                let ids: Vec<i64> = serde_json::from_value(body).unwrap_or_default();
                for id in ids {
                    state.crons.remove(&id);
                }
                ok_empty()
            }
            ("GET", ["crons"]) => ok(json!({
                "data": state.crons.values().cloned().collect::<Vec<_>>(),
                "total": state.crons.len()
            })),
            ("GET", ["crons", id]) => {
                match id.parse::<i64>().ok().and_then(|id| state.crons.get(&id)) {
                    Some(job) => ok(job.clone()),
                    None => failure(404, "cron not found"),
                }
            }
            ("GET", ["envs"]) => {
                let needle = query(request, "searchValue").unwrap_or_default();
                let found: Vec<Value> = state
                    .envs
                    .values()
                    .filter(|env| {
                        env["name"].as_str().is_some_and(|n| n.contains(&needle))
                            || env["value"].as_str().is_some_and(|v| v.contains(&needle))
                    })
                    .cloned()
                    .collect();
                ok(Value::Array(found))
            }
            ("POST", ["envs"]) => {
                let specs: Vec<Value> = serde_json::from_value(body).unwrap_or_default();
                let mut created = Vec::with_capacity(specs.len());
                for mut env in specs {
                    let id = state.allocate();
                    env["id"] = json!(id);
                    env["status"] = json!(0);
                    state.envs.insert(id, env.clone());
                    created.push(env);
                }
                ok(Value::Array(created))
            }
            ("PUT", ["envs"]) => {
                let id = body["id"].as_i64().unwrap_or_default();
                match state.envs.get_mut(&id) {
                    Some(env) => {
                        *env = body;
                        ok(env.clone())
                    }
                    None => failure(404, "env not found"),
                }
            }
            ("DELETE", ["envs"]) => {
                let ids: Vec<i64> = serde_json::from_value(body).unwrap_or_default();
                for id in ids {
                    state.envs.remove(&id);
                }
                ok_empty()
            }
            ("GET", ["envs", id]) => {
                match id.parse::<i64>().ok().and_then(|id| state.envs.get(&id)) {
                    Some(env) => ok(env.clone()),
                    None => failure(404, "env not found"),
                }
            }
            ("POST", ["subscriptions"]) => {
                let id = state.allocate();
                let mut subscription = body;
                subscription["id"] = json!(id);
                state.subscriptions.insert(id, subscription.clone());
                ok(subscription)
            }
            ("PUT", ["subscriptions"]) => {
                let id = body["id"].as_i64().unwrap_or_default();
                match state.subscriptions.get_mut(&id) {
                    Some(subscription) => {
                        *subscription = body;
                        ok(subscription.clone())
                    }
                    None => failure(404, "subscription not found"),
                }
            }
            ("DELETE", ["subscriptions"]) => {
                let ids: Vec<i64> = serde_json::from_value(body).unwrap_or_default();
                for id in ids {
                    state.subscriptions.remove(&id);
                }
                ok_empty()
            }
            ("GET", ["subscriptions"]) => {
                ok(Value::Array(state.subscriptions.values().cloned().collect()))
            }
            ("GET", ["subscriptions", id]) => {
                match id.parse::<i64>().ok().and_then(|id| state.subscriptions.get(&id)) {
                    Some(subscription) => ok(subscription.clone()),
                    None => failure(404, "subscription not found"),
                }
            }
            ("GET", ["configs", "files"]) => ok(json!(state
                .configs
                .keys()
                .map(|name| json!({"title": name, "value": name}))
                .collect::<Vec<_>>())),
            ("GET", ["configs", "detail"]) => {
                let name = query(request, "path").unwrap_or_default();
                match state.configs.get(&name) {
                    Some(content) => ok(json!(content)),
                    None => failure(404, "config not found"),
                }
            }
            ("POST", ["configs", "save"]) => {
                let name = body["name"].as_str().unwrap_or_default().to_string();
                let content = body["content"].as_str().unwrap_or_default().to_string();
                state.configs.insert(name, content);
                ok_empty()
            }
            _ => failure(404, "no such endpoint"),
        }
    }
}
