use serde::Serialize;

/// Body sent to `POST /api/v1/mining/heartbeat`.
#[derive(Serialize)]
pub(crate) struct HeartbeatRequest<'a> {
    pub device_id: &'a str,
    pub session_token: &'a str,
    pub timestamp: i64,
}
