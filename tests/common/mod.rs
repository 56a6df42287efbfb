#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use parking_lot::Mutex;
use short_link_registry::infrastructure::memory::InMemoryLinkRepository;
use short_link_registry::routes;
use short_link_registry::state::AppState;
use short_link_registry::utils::code_generator::{CodeGenerator, generate_code};
use std::collections::VecDeque;
use std::sync::Arc;

pub const TEST_BASE_URL: &str = "https://s.example.com";
pub const TEST_MAX_URL_LENGTH: usize = 2048;

/// Hands out queued codes first, then falls back to random ones.
pub struct ScriptedGenerator {
    codes: Mutex<VecDeque<String>>,
}

impl ScriptedGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
        }
    }
}

impl CodeGenerator for ScriptedGenerator {
    fn generate(&self) -> String {
        self.codes.lock().pop_front().unwrap_or_else(generate_code)
    }
}

pub fn create_test_repository() -> Arc<InMemoryLinkRepository> {
    Arc::new(InMemoryLinkRepository::new())
}

pub fn create_test_state(repository: Arc<InMemoryLinkRepository>) -> AppState {
    AppState::new(repository, TEST_BASE_URL, TEST_MAX_URL_LENGTH)
}

pub fn create_test_server() -> TestServer {
    create_test_server_with(create_test_repository())
}

pub fn create_test_server_with(repository: Arc<InMemoryLinkRepository>) -> TestServer {
    TestServer::new(routes::router(create_test_state(repository))).unwrap()
}

/// Server whose registry issues `codes` in order, trying at most `max_attempts`
/// candidates per registration.
pub fn create_scripted_server(codes: &[&str], max_attempts: usize) -> TestServer {
    let repository = Arc::new(InMemoryLinkRepository::with_generator(
        Arc::new(ScriptedGenerator::new(codes)),
        max_attempts,
    ));
    create_test_server_with(repository)
}

/// Server over the full production service, trailing-slash normalization included.
pub fn create_app_server_with(repository: Arc<InMemoryLinkRepository>) -> TestServer {
    let app = routes::app_router(create_test_state(repository));
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}
