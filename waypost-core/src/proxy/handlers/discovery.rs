use crate::settings::{ProxySettings, ProxySettingsResolver};
use http::{Method, StatusCode, header};
use pingora::prelude::Session;
use pingora::{Custom, Error};
use pingora_http::ResponseHeader;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Body of `GET /webapi/find`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryResponse {
    pub proxy: ProxySettings,
    pub server_version: String,
}

#[derive(Debug, PartialEq)]
enum DiscoveryEndpoint {
    Find,
    Health,
}

impl FromStr for DiscoveryEndpoint {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "/webapi/find" => Ok(DiscoveryEndpoint::Find),
            "/healthz" => Ok(DiscoveryEndpoint::Health),
            _ => Err("unknown discovery endpoint"),
        }
    }
}

pub struct DiscoveryHandler {
    resolver: Arc<ProxySettingsResolver>,
    fetch_timeout: Duration,
}

impl DiscoveryHandler {
    pub fn new(resolver: Arc<ProxySettingsResolver>, fetch_timeout: Duration) -> Self {
        Self {
            resolver,
            fetch_timeout,
        }
    }

    pub(crate) async fn handle(&self, session: &mut Session, path: &str) -> pingora::Result<bool> {
        let Ok(endpoint) = path.parse::<DiscoveryEndpoint>() else {
            self.send_error(session, StatusCode::NOT_FOUND, "not found")
                .await?;
            return Ok(true);
        };

        // Return early when not a GET request.
        if session.req_header().method != Method::GET {
            let mut resp = ResponseHeader::build(StatusCode::METHOD_NOT_ALLOWED, None)?;
            resp.insert_header(header::ALLOW, "GET")?;
            resp.insert_header(header::CONTENT_LENGTH, "0")?;
            session.write_response_header(Box::new(resp), true).await?;
            return Ok(true);
        }

        match endpoint {
            DiscoveryEndpoint::Health => {
                let body = to_json(&serde_json::json!({ "status": "ok" }))?;
                self.send_json_response(session, StatusCode::OK, body)
                    .await?;
            }

            DiscoveryEndpoint::Find => {
                match self.resolver.get_settings_within(self.fetch_timeout).await {
                    Ok(proxy) => {
                        let body = to_json(&DiscoveryResponse {
                            proxy,
                            server_version: env!("CARGO_PKG_VERSION").to_string(),
                        })?;
                        self.send_json_response(session, StatusCode::OK, body)
                            .await?;
                    }
                    Err(e) => {
                        let message = error_chain(&e);
                        tracing::error!(error = %message, "failed to resolve proxy settings");
                        self.send_error(session, StatusCode::SERVICE_UNAVAILABLE, &message)
                            .await?;
                    }
                }
            }
        }

        Ok(true)
    }

    async fn send_error(
        &self,
        session: &mut Session,
        status: StatusCode,
        message: &str,
    ) -> pingora::Result<()> {
        let body = to_json(&serde_json::json!({ "error": message }))?;
        self.send_json_response(session, status, body).await
    }

    async fn send_json_response(
        &self,
        session: &mut Session,
        status: StatusCode,
        body: Vec<u8>,
    ) -> pingora::Result<()> {
        let mut resp = ResponseHeader::build(status, None)?;
        resp.insert_header(header::CONTENT_TYPE, "application/json")?;
        resp.insert_header(header::CONTENT_LENGTH, body.len().to_string())?;

        session.write_response_header(Box::new(resp), false).await?;
        session.write_response_body(Some(body.into()), true).await?;

        Ok(())
    }
}

fn to_json<T: Serialize>(value: &T) -> pingora::Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|_| Error::new(Custom("json serialization failed")))
}

/// Joins an error and its sources: "outer: inner: root".
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
