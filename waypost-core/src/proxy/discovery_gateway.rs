use crate::proxy::handlers::DiscoveryHandler;
use crate::settings::ProxySettingsResolver;
use async_trait::async_trait;
use pingora::prelude::{HttpPeer, ProxyHttp, Session};
use pingora::{Custom, Error};
use std::sync::Arc;
use std::time::Duration;

/// Web listener front door for client bootstrap requests.
pub struct DiscoveryGateway {
    handler: DiscoveryHandler,
}

impl DiscoveryGateway {
    pub fn new(resolver: Arc<ProxySettingsResolver>, fetch_timeout: Duration) -> Self {
        Self {
            handler: DiscoveryHandler::new(resolver, fetch_timeout),
        }
    }
}

#[async_trait]
impl ProxyHttp for DiscoveryGateway {
    type CTX = ();

    fn new_ctx(&self) -> Self::CTX {}

    async fn upstream_peer(
        &self,
        _session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> pingora::Result<Box<HttpPeer>> {
        // request_filter always answers, so nothing is ever proxied.
        Err(Error::new(Custom(
            "DiscoveryGateway attempted to proxy upstream (bug)",
        )))
    }

    async fn request_filter(
        &self,
        session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> pingora::Result<bool> {
        let path = session.req_header().uri.path().to_owned();
        self.handler.handle(session, &path).await
    }
}
