//! Test doubles for scenario checks: an in-memory gateway and a local HTTP
//! stub for the checks that write.

use std::io::Read;
use std::thread;

use blog_client::{BlogClient, BlogGateway, ClientError};
use blog_config::{ApiConfig, HttpConfig};
use blog_core::entities::{Comment, Post, User};

const USERS: &str = include_str!("../../../blog-core/tests/fixtures/users.json");
const POSTS: &str = include_str!("../../../blog-core/tests/fixtures/posts.json");
const COMMENTS: &str = include_str!("../../../blog-core/tests/fixtures/comments.json");

/// Gateway answering from fixed collections.
#[derive(Clone, Debug, Default)]
pub struct FixtureGateway {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

impl FixtureGateway {
    /// The recorded API sample shared with `blog-core`'s tests.
    pub fn recorded() -> Self {
        Self {
            users: serde_json::from_str(USERS).unwrap(),
            posts: serde_json::from_str(POSTS).unwrap(),
            comments: serde_json::from_str(COMMENTS).unwrap(),
        }
    }
}

impl BlogGateway for FixtureGateway {
    async fn fetch_users(&self) -> Result<Vec<User>, ClientError> {
        Ok(self.users.clone())
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, ClientError> {
        Ok(self.posts.clone())
    }

    async fn fetch_comments(&self) -> Result<Vec<Comment>, ClientError> {
        Ok(self.comments.clone())
    }
}

/// Status and JSON body for a stubbed request.
pub type Reply = (u16, String);

/// Serve requests on a random local port, answering each with
/// `handler(method, path, body)`. Runs until the test process exits.
pub fn serve<F>(handler: F) -> String
where
    F: FnMut(&str, &str, &str) -> Reply + Send + 'static,
{
    let mut handler = handler;
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().map(|a| a.port()).unwrap();

    thread::spawn(move || {
        for mut request in server.incoming_requests() {
            let mut body = String::new();
            let _ = request.as_reader().read_to_string(&mut body);
            let (status, payload) = handler(request.method().as_str(), request.url(), &body);
            let response = tiny_http::Response::from_string(payload)
                .with_status_code(status)
                .with_header(
                    tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
                );
            let _ = request.respond(response);
        }
    });

    format!("http://127.0.0.1:{port}")
}

pub fn client(base_url: &str) -> BlogClient {
    let api = ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    };
    let http = HttpConfig {
        timeout_secs: 5,
        ..HttpConfig::default()
    };
    BlogClient::new(&api, &http).unwrap()
}

/// A base URL nothing listens on.
pub fn unreachable_base_url() -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().map(|a| a.port()).unwrap();
    drop(server);
    format!("http://127.0.0.1:{port}")
}
