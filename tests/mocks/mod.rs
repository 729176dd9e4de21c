//! Mock webhook servers for integration tests
//!
//! Each server plays one market maker with a scripted behavior, tracking how
//! many calls it received and the payloads it was sent.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

use rfq_quoter::mocks::mock_quote_body;
use rfq_quoter::serde_json::{json, Value};
use rfq_quoter::EndpointConfig;

/// Scripted behavior for one mock market maker
#[derive(Clone)]
pub enum WebhookBehavior {
	/// Answer 200 with a well-formed quote echoing the incoming payload
	ValidEcho { filler: String },
	/// Answer a fixed non-2xx status with an empty body
	HttpError(u16),
	/// Answer a well-formed quote carrying someone else's request id
	WrongRequestId { filler: String },
	/// Answer 200 with amountOut and filler stripped from the body
	MissingFields,
	/// Answer a well-formed quote with a zero amountOut
	ZeroAmountOut { filler: String },
	/// Sleep before answering, to trip the caller's timeout
	Slow { delay: Duration, filler: String },
}

#[derive(Clone)]
struct ServerState {
	behavior: WebhookBehavior,
	calls: Arc<AtomicUsize>,
	payloads: Arc<Mutex<Vec<Value>>>,
}

/// One spawned mock market maker
pub struct MockWebhookServer {
	pub base_url: String,
	calls: Arc<AtomicUsize>,
	payloads: Arc<Mutex<Vec<Value>>>,
	#[allow(dead_code)]
	handle: JoinHandle<()>,
}

impl MockWebhookServer {
	pub async fn spawn(behavior: WebhookBehavior) -> Self {
		let calls = Arc::new(AtomicUsize::new(0));
		let payloads = Arc::new(Mutex::new(Vec::new()));
		let state = ServerState {
			behavior,
			calls: calls.clone(),
			payloads: payloads.clone(),
		};

		let app = Router::new().route("/quote", post(handler)).with_state(state);

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind test port");
		let addr = listener.local_addr().unwrap();
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give the server time to start
		tokio::time::sleep(Duration::from_millis(10)).await;

		Self {
			base_url,
			calls,
			payloads,
			handle,
		}
	}

	/// Endpoint configuration pointing at this server's quote route
	pub fn endpoint(&self, name: &str, hash: &str) -> EndpointConfig {
		EndpointConfig::new(name, format!("{}/quote", self.base_url), hash)
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	#[allow(dead_code)]
	pub fn received_payloads(&self) -> Vec<Value> {
		self.payloads.lock().unwrap().clone()
	}
}

async fn handler(
	State(state): State<ServerState>,
	Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
	state.calls.fetch_add(1, Ordering::SeqCst);
	state.payloads.lock().unwrap().push(payload.clone());

	match &state.behavior {
		WebhookBehavior::ValidEcho { filler } => {
			(StatusCode::OK, Json(mock_quote_body(&payload, filler)))
		},
		WebhookBehavior::HttpError(status) => (
			StatusCode::from_u16(*status).expect("valid status code"),
			Json(json!({})),
		),
		WebhookBehavior::WrongRequestId { filler } => {
			let mut body = mock_quote_body(&payload, filler);
			body["requestId"] = json!("req-of-someone-else");
			(StatusCode::OK, Json(body))
		},
		WebhookBehavior::MissingFields => {
			let mut body = mock_quote_body(&payload, "0xfiller");
			let obj = body.as_object_mut().unwrap();
			obj.remove("amountOut");
			obj.remove("filler");
			(StatusCode::OK, Json(body))
		},
		WebhookBehavior::ZeroAmountOut { filler } => {
			let mut body = mock_quote_body(&payload, filler);
			body["amountOut"] = json!("0");
			(StatusCode::OK, Json(body))
		},
		WebhookBehavior::Slow { delay, filler } => {
			tokio::time::sleep(*delay).await;
			(StatusCode::OK, Json(mock_quote_body(&payload, filler)))
		},
	}
}
