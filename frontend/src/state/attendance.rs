use crate::api::{ApiClient, ApiError, AttendanceRecord, PunchKind, PunchResponse};
use crate::geo::{self, AddressResolver, GeoError, LocationFix, PositionSource};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PunchStatus {
    #[default]
    Loading,
    NotPunched,
    PunchedIn,
    Completed,
}

impl PunchStatus {
    pub fn from_today(today: Option<&AttendanceRecord>) -> Self {
        match today {
            None => PunchStatus::NotPunched,
            Some(record) if record.punch_out.is_some() => PunchStatus::Completed,
            Some(record) if record.punch_in.is_some() => PunchStatus::PunchedIn,
            Some(_) => PunchStatus::NotPunched,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PunchStatus::Loading => "loading",
            PunchStatus::NotPunched => "not_punched",
            PunchStatus::PunchedIn => "punched_in",
            PunchStatus::Completed => "completed",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            PunchStatus::Loading => "Loading...",
            PunchStatus::NotPunched => "Not Checked In",
            PunchStatus::PunchedIn => "Checked In",
            PunchStatus::Completed => "Day Completed",
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self {
            PunchStatus::PunchedIn => "Punch Out",
            PunchStatus::Completed => "Done",
            _ => "Punch In",
        }
    }
}

/// Progress of a single punch, from locating to the server round trip.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PunchFlow {
    #[default]
    Idle,
    Locating,
    Confirming(LocationFix),
    Punching(LocationFix),
}

impl PunchFlow {
    pub fn fix(&self) -> Option<&LocationFix> {
        match self {
            PunchFlow::Confirming(fix) | PunchFlow::Punching(fix) => Some(fix),
            _ => None,
        }
    }

    pub fn is_locating(&self) -> bool {
        matches!(self, PunchFlow::Locating)
    }

    pub fn dialog_open(&self) -> bool {
        self.fix().is_some()
    }

    /// Only a confirmed location that is not already being submitted.
    pub fn can_submit(&self) -> bool {
        matches!(self, PunchFlow::Confirming(_))
    }

    pub fn is_punching(&self) -> bool {
        matches!(self, PunchFlow::Punching(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct AttendanceState {
    pub today: Option<AttendanceRecord>,
    pub status: PunchStatus,
    pub history: Vec<AttendanceRecord>,
    pub flow: PunchFlow,
    pub loading: bool,
}

pub fn use_attendance() -> (ReadSignal<AttendanceState>, WriteSignal<AttendanceState>) {
    create_signal(AttendanceState::default())
}

pub fn punch_success_message(kind: PunchKind) -> &'static str {
    match kind {
        PunchKind::In => "Successfully punched in!",
        PunchKind::Out => "Successfully punched out!",
    }
}

pub async fn load_today(
    api: &ApiClient,
    set_state: WriteSignal<AttendanceState>,
) -> Result<(), ApiError> {
    set_state.update(|state| state.loading = true);
    match api.get_today_attendance().await {
        Ok(today) => {
            set_state.update(|state| {
                state.status = PunchStatus::from_today(today.as_ref());
                state.today = today;
                state.loading = false;
            });
            Ok(())
        }
        Err(err) => {
            set_state.update(|state| state.loading = false);
            Err(err)
        }
    }
}

pub async fn load_history(
    api: &ApiClient,
    set_state: WriteSignal<AttendanceState>,
    month: u32,
    year: i32,
) -> Result<(), ApiError> {
    let history = api.get_attendance_history(month, year).await?;
    set_state.update(|state| state.history = history);
    Ok(())
}

/// Locates the user and opens the confirmation step. No-op once the day is
/// complete or while another punch is in progress.
pub async fn begin_punch<S, R>(
    source: &S,
    resolver: &R,
    state: ReadSignal<AttendanceState>,
    set_state: WriteSignal<AttendanceState>,
) -> Result<(), GeoError>
where
    S: PositionSource + ?Sized,
    R: AddressResolver + ?Sized,
{
    let busy = state.with_untracked(|s| {
        s.status == PunchStatus::Completed || !matches!(s.flow, PunchFlow::Idle)
    });
    if busy {
        return Ok(());
    }
    set_state.update(|s| s.flow = PunchFlow::Locating);
    match geo::acquire_fix(source, resolver).await {
        Ok(fix) => {
            set_state.update(|s| s.flow = PunchFlow::Confirming(fix));
            Ok(())
        }
        Err(err) => {
            log::warn!("locating for punch failed: {}", err);
            set_state.update(|s| s.flow = PunchFlow::Idle);
            Err(err)
        }
    }
}

pub fn cancel_punch(set_state: WriteSignal<AttendanceState>) {
    set_state.update(|s| {
        if !s.flow.is_punching() {
            s.flow = PunchFlow::Idle;
        }
    });
}

/// Submits the confirmed location. Leaves the dialog open on failure so the
/// user can retry.
pub async fn confirm_punch(
    api: &ApiClient,
    state: ReadSignal<AttendanceState>,
    set_state: WriteSignal<AttendanceState>,
) -> Result<PunchResponse, ApiError> {
    let fix = state
        .with_untracked(|s| match &s.flow {
            PunchFlow::Confirming(fix) => Some(fix.clone()),
            _ => None,
        })
        .ok_or_else(|| ApiError::validation("Confirm your location before punching"))?;

    set_state.update(|s| s.flow = PunchFlow::Punching(fix.clone()));
    match api.punch(&fix.address).await {
        Ok(response) => {
            set_state.update(|s| {
                s.flow = PunchFlow::Idle;
                if let Some(record) = response.data.clone() {
                    s.status = PunchStatus::from_today(Some(&record));
                    s.today = Some(record);
                }
            });
            Ok(response)
        }
        Err(err) => {
            set_state.update(|s| s.flow = PunchFlow::Confirming(fix));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(punch_in: Option<&str>, punch_out: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            date: "2025-03-05".into(),
            punch_in: punch_in.map(str::to_string),
            punch_out: punch_out.map(str::to_string),
            ..AttendanceRecord::default()
        }
    }

    #[test]
    fn status_follows_today_record() {
        assert_eq!(PunchStatus::from_today(None), PunchStatus::NotPunched);
        assert_eq!(
            PunchStatus::from_today(Some(&record(Some("09:00"), None))),
            PunchStatus::PunchedIn
        );
        assert_eq!(
            PunchStatus::from_today(Some(&record(Some("09:00"), Some("17:00")))),
            PunchStatus::Completed
        );
        assert_eq!(PunchStatus::Completed.as_str(), "completed");
    }

    #[test]
    fn only_confirming_flow_can_submit() {
        let fix = LocationFix {
            coords: crate::geo::fakes::coords(),
            address: "here".into(),
        };
        assert!(!PunchFlow::Idle.can_submit());
        assert!(!PunchFlow::Locating.can_submit());
        assert!(PunchFlow::Confirming(fix.clone()).can_submit());
        assert!(!PunchFlow::Punching(fix.clone()).can_submit());
        assert!(PunchFlow::Punching(fix).dialog_open());
    }

    #[test]
    fn success_messages_follow_direction() {
        assert_eq!(punch_success_message(PunchKind::In), "Successfully punched in!");
        assert_eq!(punch_success_message(PunchKind::Out), "Successfully punched out!");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::geo::fakes::{coords, FixedResolver, ScriptedSource};
    use serde_json::json;

    fn punch_response(kind: &str) -> serde_json::Value {
        json!({
            "message": "ok",
            "type": kind,
            "data": {
                "date": "2025-03-05",
                "punch_in": "2025-03-05T09:00:00Z",
                "punch_out": if kind == "out" { json!("2025-03-05T17:00:00Z") } else { json!(null) },
                "location": "MG Road"
            }
        })
    }

    #[tokio::test]
    async fn punch_is_refused_without_confirmed_location() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        let api = ApiClient::new_with_base_url(server.url(""));
        let (state, set_state) = use_attendance();

        let err = confirm_punch(&api, state, set_state).await.unwrap_err();

        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(server.hits(POST, "/api/attendance/punch"), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn located_then_confirmed_punch_submits_address() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/attendance/punch");
            then.status(200).json_body(punch_response("in"));
        });
        let api = ApiClient::new_with_base_url(server.url(""));
        let (state, set_state) = use_attendance();
        set_state.update(|s| s.status = PunchStatus::NotPunched);
        let source = ScriptedSource::new(vec![Ok(coords())]);

        begin_punch(&source, &FixedResolver(Ok("MG Road".into())), state, set_state)
            .await
            .unwrap();
        assert!(state.get_untracked().flow.can_submit());

        let response = confirm_punch(&api, state, set_state).await.unwrap();

        assert_eq!(response.kind, PunchKind::In);
        assert_eq!(
            server.last_body(POST, "/api/attendance/punch").unwrap(),
            json!({"location": "MG Road"})
        );
        let snapshot = state.get_untracked();
        assert_eq!(snapshot.flow, PunchFlow::Idle);
        assert_eq!(snapshot.status, PunchStatus::PunchedIn);
        runtime.dispose();
    }

    #[tokio::test]
    async fn cancelled_dialog_never_submits() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        let api = ApiClient::new_with_base_url(server.url(""));
        let (state, set_state) = use_attendance();
        let source = ScriptedSource::new(vec![Ok(coords())]);

        begin_punch(&source, &FixedResolver(Ok("x".into())), state, set_state)
            .await
            .unwrap();
        cancel_punch(set_state);

        assert!(confirm_punch(&api, state, set_state).await.is_err());
        assert_eq!(server.hits(POST, "/api/attendance/punch"), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_punch_keeps_dialog_for_retry() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/attendance/punch");
            then.status(400)
                .json_body(json!({"error": "Already punched out for today."}));
        });
        let api = ApiClient::new_with_base_url(server.url(""));
        let (state, set_state) = use_attendance();
        let source = ScriptedSource::new(vec![Ok(coords())]);
        begin_punch(&source, &FixedResolver(Ok("x".into())), state, set_state)
            .await
            .unwrap();

        let err = confirm_punch(&api, state, set_state).await.unwrap_err();

        assert_eq!(err.error, "Already punched out for today.");
        assert!(state.get_untracked().flow.can_submit());
        runtime.dispose();
    }

    #[tokio::test]
    async fn completed_day_does_not_locate() {
        let runtime = create_runtime();
        let (state, set_state) = use_attendance();
        set_state.update(|s| s.status = PunchStatus::Completed);
        let source = ScriptedSource::new(vec![Ok(coords())]);

        begin_punch(&source, &FixedResolver(Ok("x".into())), state, set_state)
            .await
            .unwrap();

        assert!(source.requests.borrow().is_empty());
        assert_eq!(state.get_untracked().flow, PunchFlow::Idle);
        runtime.dispose();
    }

    #[tokio::test]
    async fn location_failure_returns_to_idle() {
        let runtime = create_runtime();
        let (state, set_state) = use_attendance();
        let source = ScriptedSource::new(vec![Err(GeoError::Timeout), Err(GeoError::Timeout)]);

        let err = begin_punch(&source, &FixedResolver(Ok("x".into())), state, set_state)
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Unable to retrieve location.");
        assert_eq!(state.get_untracked().flow, PunchFlow::Idle);
        runtime.dispose();
    }

    #[tokio::test]
    async fn today_and_history_load() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/today");
            then.status(200).json_body(punch_response("out")["data"].clone());
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/history");
            then.status(200)
                .json_body(json!([punch_response("out")["data"].clone()]));
        });
        let api = ApiClient::new_with_base_url(server.url(""));
        let (state, set_state) = use_attendance();

        load_today(&api, set_state).await.unwrap();
        load_history(&api, set_state, 3, 2025).await.unwrap();

        let snapshot = state.get_untracked();
        assert_eq!(snapshot.status, PunchStatus::Completed);
        assert_eq!(snapshot.history.len(), 1);
        runtime.dispose();
    }
}
