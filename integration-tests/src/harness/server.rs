use crate::harness::{CapturedEvent, init_test_tracing};
use reqwest::blocking::{Client, RequestBuilder, Response};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};
use std::thread;
use std::time::{Duration, Instant};
use waypost_core::conf::types::NetAddr;
use waypost_core::conf::{DeploymentConfig, load_config};
use waypost_core::networking::{
    ClusterNetworkingConfig, NetworkingConfigProvider, ProxyListenerMode, SharedNetworkingConfig,
};
use waypost_core::proxy::DiscoveryResponse;
use waypost_core::server::build_pingora_server;
use waypost_core::settings::{ProxySettingsResolver, SshListenAddr};

/// Handle to a running discovery server.
pub struct TestServer {
    base_url: String,
    web_addr: String,
    client: Client,
    networking: Arc<SharedNetworkingConfig>,
    ssh_listen_addr: Arc<SshListenAddr>,
    // Keeps the SSH listener bound for the lifetime of the test.
    ssh_listener: Mutex<Option<TcpListener>>,
}

impl TestServer {
    /// Start a server from an HCL fixture, backed by the in-process
    /// networking snapshot.
    ///
    /// The web listener is moved to a free local port so tests can run in
    /// parallel.
    pub fn start(fixture: &str) -> Self {
        Self::start_inner(fixture, None)
    }

    /// Same as [`start`](Self::start), but the listener mode is fetched from
    /// `provider` instead.
    pub fn start_with_provider(
        fixture: &str,
        provider: Arc<dyn NetworkingConfigProvider>,
    ) -> Self {
        Self::start_inner(fixture, Some(provider))
    }

    fn start_inner(fixture: &str, provider: Option<Arc<dyn NetworkingConfigProvider>>) -> Self {
        init_test_tracing(events());

        let fixture_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("config")
            .join(fixture);

        assert!(
            fixture_dir.exists(),
            "fixture config directory does not exist: {:?}",
            fixture_dir
        );

        let validated = load_config(&fixture_dir).expect("failed to load fixture config");

        let listen_port = free_port();
        let config = Arc::new(patch_web_listener(validated.config, listen_port));

        let networking = Arc::new(SharedNetworkingConfig::new(config.networking));
        let ssh_listen_addr = Arc::new(SshListenAddr::new());
        let provider: Arc<dyn NetworkingConfigProvider> = match provider {
            Some(provider) => provider,
            None => networking.clone(),
        };

        let resolver = Arc::new(ProxySettingsResolver::new(
            config.clone(),
            ssh_listen_addr.clone(),
            provider,
        ));

        let server =
            build_pingora_server(&config, resolver).expect("failed to build waypost server");

        thread::spawn(move || {
            server.run_forever();
        });

        let web_addr = format!("127.0.0.1:{listen_port}");
        wait_for_server(&web_addr);

        let client = Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .expect("failed to build client");

        Self {
            base_url: format!("http://{web_addr}"),
            web_addr,
            client,
            networking,
            ssh_listen_addr,
            ssh_listener: Mutex::new(None),
        }
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(format!("{}{}", self.base_url, path))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(format!("{}{}", self.base_url, path))
    }

    /// Fetch and decode `/webapi/find`.
    pub fn find(&self) -> DiscoveryResponse {
        let res: Response = self.get("/webapi/find").send().expect("request failed");
        assert!(
            res.status().is_success(),
            "unexpected status from /webapi/find: {}",
            res.status()
        );
        res.json().expect("invalid discovery response")
    }

    /// Address the web listener was patched to.
    pub fn web_addr(&self) -> &str {
        &self.web_addr
    }

    /// Switch the cluster listener mode, as a reload would.
    pub fn set_listener_mode(&self, mode: ProxyListenerMode) {
        self.networking.store(ClusterNetworkingConfig::new(mode));
    }

    /// Bind an SSH listener on an ephemeral port and record it.
    pub fn bind_ssh_listener(&self) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind ssh listener");
        self.ssh_listen_addr
            .record_bound(&listener)
            .expect("failed to record ssh listener");
        let addr = listener.local_addr().expect("no local addr").to_string();
        *self.ssh_listener.lock().unwrap() = Some(listener);
        addr
    }
}

fn patch_web_listener(mut config: DeploymentConfig, port: u16) -> DeploymentConfig {
    config.proxy.web_listen_addr = format!("127.0.0.1:{port}")
        .parse::<NetAddr>()
        .expect("invalid patched web address");
    config
}

/// Poll until the server accepts connections (or panic).
fn wait_for_server(addr: &str) {
    let deadline = Instant::now() + Duration::from_secs(2);

    loop {
        match TcpStream::connect(addr) {
            Ok(_) => return,
            Err(_) => {
                if Instant::now() > deadline {
                    panic!("server failed to start at {}", addr);
                }
                thread::sleep(Duration::from_millis(25));
            }
        }
    }
}

static EVENTS: OnceLock<Arc<Mutex<Vec<CapturedEvent>>>> = OnceLock::new();

/// Events captured from every server in this test binary.
pub fn events() -> Arc<Mutex<Vec<CapturedEvent>>> {
    EVENTS
        .get_or_init(|| Arc::new(Mutex::new(Vec::new())))
        .clone()
}

/// Allocate a free port on localhost.
fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}
