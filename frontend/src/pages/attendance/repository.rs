use crate::api::ApiClient;

/// Attendance calls live in `state::attendance`; this only picks the client.
#[derive(Clone)]
pub struct AttendanceRepository {
    api: ApiClient,
}

impl AttendanceRepository {
    pub fn new_with_client(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn from_context() -> Self {
        Self::new_with_client(leptos::use_context::<ApiClient>().unwrap_or_else(ApiClient::new))
    }

    pub fn client(&self) -> &ApiClient {
        &self.api
    }
}
