pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const PATCH: Method = Method::PATCH;
    pub const DELETE: Method = Method::DELETE;

    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    #[derive(Default)]
    struct Inner {
        routes: Vec<Route>,
        received: Vec<ReceivedRequest>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        query: Vec<(String, String)>,
        response: MockResponse,
    }

    /// A request the mock answered (or refused), kept for assertions.
    #[derive(Debug, Clone)]
    pub struct ReceivedRequest {
        pub method: Method,
        pub path: String,
        pub query: Vec<(String, String)>,
        pub headers: Vec<(String, String)>,
        pub body: Option<Value>,
    }

    impl ReceivedRequest {
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str())
        }

        pub fn query_value(&self, name: &str) -> Option<&str> {
            self.query
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        }
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            Self::start()
        }

        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Arc::new(Mutex::new(Inner::default())),
                base: format!("http://mock-{}", id),
            }
        }

        pub fn url(&self, path: &str) -> String {
            let base_url = format!("{}{}", self.base, path);
            register_mock(base_url.clone(), Arc::new(self.clone()));
            base_url
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let status = then.status.unwrap_or(200);
            let response = match then.text {
                Some(text) => MockResponse::text(status, text),
                None => MockResponse::json(
                    status,
                    then.body.unwrap_or_else(|| serde_json::json!({})),
                ),
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                query: when.query,
                response,
            });
        }

        pub fn received(&self) -> Vec<ReceivedRequest> {
            self.inner.lock().expect("mock lock").received.clone()
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            self.received()
                .iter()
                .filter(|r| r.method == method && r.path == path)
                .count()
        }

        pub fn last_request(&self, method: Method, path: &str) -> Option<ReceivedRequest> {
            self.received()
                .into_iter()
                .rev()
                .find(|r| r.method == method && r.path == path)
        }

        pub fn last_body(&self, method: Method, path: &str) -> Option<Value> {
            self.last_request(method, path).and_then(|r| r.body)
        }
    }

    fn capture(request: &reqwest::Request) -> ReceivedRequest {
        ReceivedRequest {
            method: request.method().clone(),
            path: request.url().path().to_string(),
            query: request
                .url()
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
            headers: request
                .headers()
                .iter()
                .filter_map(|(k, v)| Some((k.to_string(), v.to_str().ok()?.to_string())))
                .collect(),
            body: request
                .body()
                .and_then(|b| b.as_bytes())
                .and_then(|bytes| serde_json::from_slice(bytes).ok()),
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let received = capture(request);
            let mut inner = self.inner.lock().map_err(|_| ApiError::unknown("mock lock"))?;

            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| {
                    route.method == received.method
                        && route.path == received.path
                        && route
                            .query
                            .iter()
                            .all(|(k, v)| received.query_value(k) == Some(v.as_str()))
                })
                .cloned();
            let method = received.method.clone();
            let path = received.path.clone();
            inner.received.push(received);

            route
                .map(|route| route.response)
                .ok_or_else(|| ApiError::unknown(format!("No mock for {} {}", method, path)))
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
        query: Vec<(String, String)>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }

        pub fn query_param(&mut self, name: &str, value: &str) -> &mut Self {
            self.query.push((name.to_string(), value.to_string()));
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        text: Option<String>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn body(&mut self, text: &str) -> &mut Self {
            self.text = Some(text.to_string());
            self
        }
    }
}
