//! Thin data-access layer over the HTTP surface, one wrapper per
//! endpoint. No caching, no retry, no request de-duplication: each call
//! awaits a single request to completion.

use anyhow::{Result, anyhow, bail};
use awc::Client;
use serde_json::{Value, json};

pub struct HrClient {
    http: Client,
    base_url: String,
}

impl HrClient {
    /// `base_url` is the server origin, e.g. `http://127.0.0.1:3001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::default(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // -------------------- Generic CRUD --------------------

    pub async fn list(&self, resource: &str) -> Result<Vec<Value>> {
        let mut resp = self
            .http
            .get(self.url(&format!("/api/{resource}")))
            .send()
            .await
            .map_err(|e| anyhow!("list {resource}: {e}"))?;
        if !resp.status().is_success() {
            bail!("list {resource}: {}", resp.status());
        }
        Ok(resp.json().await.map_err(|e| anyhow!("list {resource}: {e}"))?)
    }

    pub async fn get(&self, resource: &str, id: &str) -> Result<Value> {
        let mut resp = self
            .http
            .get(self.url(&format!("/api/{resource}/{id}")))
            .send()
            .await
            .map_err(|e| anyhow!("get {resource}/{id}: {e}"))?;
        if !resp.status().is_success() {
            bail!("get {resource}/{id}: {}", resp.status());
        }
        Ok(resp.json().await.map_err(|e| anyhow!("get {resource}/{id}: {e}"))?)
    }

    pub async fn create(&self, resource: &str, body: Value) -> Result<Value> {
        self.send_json("create", awc::http::Method::POST, &format!("/api/{resource}"), body)
            .await
    }

    pub async fn update(&self, resource: &str, id: &str, patch: Value) -> Result<Value> {
        self.send_json(
            "update",
            awc::http::Method::PATCH,
            &format!("/api/{resource}/{id}"),
            patch,
        )
        .await
    }

    pub async fn delete(&self, resource: &str, id: &str) -> Result<()> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/{resource}/{id}")))
            .send()
            .await
            .map_err(|e| anyhow!("delete {resource}/{id}: {e}"))?;
        if !resp.status().is_success() {
            bail!("delete {resource}/{id}: {}", resp.status());
        }
        Ok(())
    }

    // -------------------- Domain actions --------------------

    pub async fn login(&self, email: &str, password: &str) -> Result<Value> {
        self.send_json(
            "login",
            awc::http::Method::POST,
            "/auth/login",
            json!({ "email": email, "password": password }),
        )
        .await
    }

    pub async fn check_in(&self, employee_id: &str) -> Result<Value> {
        self.send_json(
            "check-in",
            awc::http::Method::POST,
            "/api/attendance/check-in",
            json!({ "employeeId": employee_id }),
        )
        .await
    }

    pub async fn check_out(&self, employee_id: &str) -> Result<Value> {
        self.send_json(
            "check-out",
            awc::http::Method::POST,
            "/api/attendance/check-out",
            json!({ "employeeId": employee_id }),
        )
        .await
    }

    pub async fn approve_leave(&self, id: &str) -> Result<Value> {
        self.leave_action(id, "approve").await
    }

    pub async fn reject_leave(&self, id: &str) -> Result<Value> {
        self.leave_action(id, "reject").await
    }

    pub async fn cancel_leave(&self, id: &str) -> Result<Value> {
        self.leave_action(id, "cancel").await
    }

    async fn leave_action(&self, id: &str, action: &str) -> Result<Value> {
        self.send_json(
            action,
            awc::http::Method::PUT,
            &format!("/api/leave-requests/{id}/{action}"),
            json!({}),
        )
        .await
    }

    pub async fn acknowledge_policy(&self, policy_id: &str, employee_id: &str) -> Result<Value> {
        self.send_json(
            "acknowledge",
            awc::http::Method::POST,
            &format!("/api/policies/{policy_id}/acknowledge"),
            json!({ "employeeId": employee_id }),
        )
        .await
    }

    pub async fn process_payroll_cycle(&self, id: &str) -> Result<Value> {
        self.send_json(
            "process",
            awc::http::Method::POST,
            &format!("/api/payroll-cycles/{id}/process"),
            json!({}),
        )
        .await
    }

    pub async fn create_mentoring(&self, mentor_id: &str, mentee_id: &str) -> Result<Value> {
        self.send_json(
            "mentoring",
            awc::http::Method::POST,
            "/api/mentoring-relationships",
            json!({ "mentorId": mentor_id, "menteeId": mentee_id }),
        )
        .await
    }

    async fn send_json(
        &self,
        op: &str,
        method: awc::http::Method,
        path: &str,
        body: Value,
    ) -> Result<Value> {
        let mut resp = self
            .http
            .request(method, self.url(path))
            .send_json(&body)
            .await
            .map_err(|e| anyhow!("{op} {path}: {e}"))?;
        if !resp.status().is_success() {
            bail!("{op} {path}: {}", resp.status());
        }
        Ok(resp.json().await.map_err(|e| anyhow!("{op} {path}: {e}"))?)
    }
}
