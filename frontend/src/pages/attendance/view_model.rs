use super::{repository::AttendanceRepository, utils::HistoryPeriod};
use crate::api::{ApiError, PunchResponse};
use crate::geo::{GeoError, PositionSource};
use crate::state::attendance::{
    begin_punch, cancel_punch, confirm_punch, load_history, load_today, punch_success_message,
    use_attendance, AttendanceState,
};
use crate::state::toast::{use_toast, ToastContext};
use crate::utils::time::today_local;
use leptos::*;

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub state: ReadSignal<AttendanceState>,
    set_state: WriteSignal<AttendanceState>,
    pub period: RwSignal<HistoryPeriod>,
    pub history_loading: RwSignal<bool>,
    repo: StoredValue<AttendanceRepository>,
    toasts: ToastContext,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        Self::with_repository(AttendanceRepository::from_context())
    }

    pub fn with_repository(repo: AttendanceRepository) -> Self {
        let (state, set_state) = use_attendance();
        let vm = Self {
            state,
            set_state,
            period: create_rw_signal(HistoryPeriod::containing(today_local())),
            history_loading: create_rw_signal(false),
            repo: store_value(repo),
            toasts: use_toast(),
        };
        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            vm.refresh().await;
        });
        vm
    }

    pub async fn refresh(&self) {
        futures::join!(self.load_today(), self.load_history());
    }

    async fn load_today(&self) {
        let repo = self.repo.get_value();
        if let Err(err) = load_today(repo.client(), self.set_state).await {
            log::error!("loading today's attendance failed: {}", err);
        }
    }

    pub async fn load_history(&self) {
        let HistoryPeriod { month, year } = self.period.get_untracked();
        self.history_loading.set(true);
        let repo = self.repo.get_value();
        if let Err(err) = load_history(repo.client(), self.set_state, month, year).await {
            log::error!("loading attendance history failed: {}", err);
            self.toasts.error("Failed to load attendance history");
        }
        self.history_loading.set(false);
    }

    pub async fn select_period(&self, period: HistoryPeriod) {
        self.period.set(period);
        self.load_history().await;
    }

    /// Locates the user and opens the confirmation dialog.
    pub async fn start_punch<S>(&self, source: &S) -> Result<(), GeoError>
    where
        S: PositionSource + ?Sized,
    {
        let repo = self.repo.get_value();
        let result = begin_punch(source, repo.client(), self.state, self.set_state).await;
        if let Err(err) = &result {
            self.toasts.error(err.user_message());
        }
        result
    }

    pub fn cancel(&self) {
        cancel_punch(self.set_state);
    }

    pub async fn confirm(&self) -> Result<PunchResponse, ApiError> {
        let repo = self.repo.get_value();
        match confirm_punch(repo.client(), self.state, self.set_state).await {
            Ok(response) => {
                self.toasts.success(punch_success_message(response.kind));
                self.refresh().await;
                Ok(response)
            }
            Err(err) => {
                self.toasts.error(err.message_or("Error punching"));
                Err(err)
            }
        }
    }
}
