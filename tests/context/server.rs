use {
    axum::{
        extract::State,
        headers::{authorization::Basic, Authorization},
        http::StatusCode,
        routing::post,
        Json,
        Router,
        TypedHeader,
    },
    regex::Regex,
    registration_conformance::types::RegistrationRequest,
    serde_json::{json, Value},
    std::{
        collections::HashSet,
        net::{SocketAddr, TcpListener},
        sync::{Arc, Mutex},
        time::Duration,
    },
    tokio::{sync::oneshot, task::JoinHandle},
};

pub const USERNAME: &str = "stubuser";
pub const PASSWORD: &str = "stubpassword";
pub const BASE_PATH: &str = "/api/v1/account";

const MIN_PASSWORD_LEN: usize = 8;
const MAX_TEXT_LEN: usize = 255;

/// How the stub registration service answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    /// Honours the registration contract.
    Conforming,
    /// Answers 201 with a login link to every POST, valid or not.
    AcceptEverything,
    /// Conforming, but every POST is held for the given delay first.
    Slow(Duration),
    /// Conforming, except a second registration of the same email succeeds too.
    NoDuplicateCheck,
    /// Conforming, except credentials are never looked at.
    NoAuthCheck,
    /// Conforming, except a payload without `email` is accepted.
    EmailOptional,
}

struct StubState {
    behaviour: Behaviour,
    email: Regex,
    registered: Mutex<HashSet<String>>,
}

pub struct StubServer {
    pub addr: SocketAddr,
    state: Arc<StubState>,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl StubServer {
    pub async fn start(behaviour: Behaviour) -> Self {
        let state = Arc::new(StubState {
            behaviour,
            email: Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap(),
            registered: Mutex::new(HashSet::new()),
        });

        let app = Router::new()
            .route(&format!("{BASE_PATH}/register"), post(register))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub listener");
        listener.set_nonblocking(true).unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown, signal) = oneshot::channel();
        let server = axum::Server::from_tcp(listener)
            .expect("Failed to start stub server")
            .serve(app.into_make_service())
            .with_graceful_shutdown(async {
                signal.await.ok();
            });

        let handle = tokio::spawn(async move {
            server.await.expect("Stub server crashed");
        });

        Self {
            addr,
            state,
            shutdown,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, BASE_PATH)
    }

    pub fn registered(&self) -> usize {
        self.state.registered.lock().unwrap().len()
    }

    pub async fn shutdown(self) {
        self.shutdown.send(()).ok();
        self.handle.await.ok();
    }
}

fn reject(status: StatusCode, reason: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "reason": reason })))
}

async fn register(
    State(state): State<Arc<StubState>>,
    auth: Option<TypedHeader<Authorization<Basic>>>,
    Json(body): Json<RegistrationRequest>,
) -> (StatusCode, Json<Value>) {
    let accepted = (
        StatusCode::CREATED,
        Json(json!({ "login_link": format!("https://stub.local/login/{}", uuid::Uuid::new_v4()) })),
    );

    match state.behaviour {
        Behaviour::AcceptEverything => return accepted,
        Behaviour::Slow(delay) => tokio::time::sleep(delay).await,
        _ => {}
    }

    if state.behaviour != Behaviour::NoAuthCheck {
        let authorized = auth
            .map(|TypedHeader(Authorization(basic))| {
                basic.username() == USERNAME && basic.password() == PASSWORD
            })
            .unwrap_or(false);
        if !authorized {
            return reject(StatusCode::UNAUTHORIZED, "authentication required");
        }
    }

    let required = [
        ("name", &body.name),
        ("patronymic", &body.patronymic),
        ("surname", &body.surname),
        ("phone", &body.phone),
        ("address", &body.address),
        ("refovod_code", &body.referral_code),
        ("password", &body.password),
    ];
    if let Some((key, _)) = required.iter().find(|(_, value)| value.is_none()) {
        return reject(StatusCode::BAD_REQUEST, &format!("{key} is required"));
    }

    let email = match body.email.as_deref() {
        Some(email) => email,
        None if state.behaviour == Behaviour::EmailOptional => return accepted,
        None => return reject(StatusCode::BAD_REQUEST, "email is required"),
    };
    if !state.email.is_match(email) {
        return reject(StatusCode::BAD_REQUEST, "email is invalid");
    }

    let password = body.password.as_deref().unwrap_or_default();
    if password.chars().count() < MIN_PASSWORD_LEN {
        return reject(StatusCode::BAD_REQUEST, "password is too short");
    }

    let too_long = [&body.name, &body.patronymic, &body.surname, &body.address]
        .into_iter()
        .flatten()
        .any(|value| value.chars().count() > MAX_TEXT_LEN);
    if too_long {
        return reject(StatusCode::BAD_REQUEST, "value is too long");
    }

    let fresh = state.registered.lock().unwrap().insert(email.to_owned());
    if !fresh && state.behaviour != Behaviour::NoDuplicateCheck {
        return reject(StatusCode::BAD_REQUEST, "email is already registered");
    }

    accepted
}
