//! Server harness and shared world for the registry endpoint scenarios.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. The `WorldFixture` stops the server
//! even if a step panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

use registry_backend::Trace;
use registry_backend::inbound::http::configure;
use registry_backend::inbound::http::health::HealthState;
use registry_backend::test_support::{InMemoryRegistry, http_state_for};

pub(crate) struct RegistryWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) registry: Arc<InMemoryRegistry>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_cache_control: Option<String>,
    pub(crate) last_trace_id: Option<String>,
}

pub(crate) type SharedWorld = Rc<RefCell<RegistryWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        shutdown(self.world.clone());
    }
}

pub(crate) fn shutdown(world: SharedWorld) {
    // `LocalSet` must be driven on the thread that owns it, so we lock the world
    // while calling `block_on`. The future must not try to lock the world.
    let ctx = world.borrow();
    let server = ctx.server.clone();
    ctx.local.block_on(&ctx.runtime, async move {
        server.stop(true).await;
    });
}

/// Response fields captured from the last request.
pub(crate) struct Captured {
    pub(crate) status: u16,
    pub(crate) body: Option<Value>,
    pub(crate) cache_control: Option<String>,
    pub(crate) trace_id: Option<String>,
}

/// Issue a GET against the running server and record the response.
pub(crate) fn perform_get(world: &SharedWorld, path: &str) {
    let captured = {
        let ctx = world.borrow();
        let url = format!("{}{path}", ctx.base_url);
        ctx.local.block_on(&ctx.runtime, async move {
            let client = awc::Client::default();
            let mut response = client.get(url).send().await.expect("request should send");
            let header = |name: &str| {
                response
                    .headers()
                    .get(name)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_owned)
            };
            let cache_control = header("cache-control");
            let trace_id = header("trace-id");
            let status = response.status().as_u16();
            let bytes = response.body().await.expect("response body");
            Captured {
                status,
                body: serde_json::from_slice(&bytes).ok(),
                cache_control,
                trace_id,
            }
        })
    };

    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(captured.status);
    ctx.last_body = captured.body;
    ctx.last_cache_control = captured.cache_control;
    ctx.last_trace_id = captured.trace_id;
}

async fn spawn_registry_server(
    registry: Arc<InMemoryRegistry>,
) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;

    let http_data = web::Data::new(http_state_for(&registry));
    let health_data = web::Data::new(HealthState::new(registry, Arc::new(DefaultClock)));
    health_data.mark_ready();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_data.clone())
            .app_data(health_data.clone())
            .wrap(Trace)
            .configure(configure)
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

fn create_runtime_and_local() -> (Runtime, LocalSet) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();

    (runtime, local)
}

#[fixture]
pub(crate) fn world() -> WorldFixture {
    let (runtime, local) = create_runtime_and_local();
    let registry = Arc::new(InMemoryRegistry::new());

    let (base_url, server) = local
        .block_on(&runtime, spawn_registry_server(Arc::clone(&registry)))
        .expect("server should start");

    let world = Rc::new(RefCell::new(RegistryWorld {
        runtime,
        local,
        base_url,
        server,
        registry,
        last_status: None,
        last_body: None,
        last_cache_control: None,
        last_trace_id: None,
    }));

    WorldFixture { world }
}
