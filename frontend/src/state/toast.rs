use leptos::*;

pub const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
            ToastKind::Warning => "toast toast-warning",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Info => "i",
            ToastKind::Warning => "!",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub kind: ToastKind,
}

/// Application-wide toast queue, shared through context.
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn push(&self, message: impl Into<String>, kind: ToastKind) -> String {
        self.push_for(message, kind, DEFAULT_TOAST_DURATION_MS)
    }

    /// Queues a toast; a zero duration keeps it until dismissed.
    pub fn push_for(&self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let toast = Toast {
            id: id.clone(),
            message: message.into(),
            kind,
        };
        self.toasts.update(|toasts| toasts.push(toast));
        if duration_ms > 0 {
            self.schedule_dismiss(id.clone(), duration_ms);
        }
        id
    }

    pub fn success(&self, message: impl Into<String>) -> String {
        self.push(message, ToastKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> String {
        self.push(message, ToastKind::Error)
    }

    pub fn info(&self, message: impl Into<String>) -> String {
        self.push(message, ToastKind::Info)
    }

    pub fn warning(&self, message: impl Into<String>) -> String {
        self.push(message, ToastKind::Warning)
    }

    pub fn dismiss(&self, id: &str) {
        self.toasts
            .try_update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: String, duration_ms: u32) {
        let ctx = *self;
        gloo_timers::callback::Timeout::new(duration_ms, move || ctx.dismiss(&id)).forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: String, _duration_ms: u32) {}
}

pub fn provide_toasts() -> ToastContext {
    let ctx = ToastContext::new();
    provide_context(ctx);
    ctx
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(|| {
        log::warn!("toast context missing; messages will not be shown");
        ToastContext::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn pushes_keep_order_and_unique_ids() {
        with_runtime(|| {
            let ctx = ToastContext::new();
            let first = ctx.success("Saved");
            let second = ctx.error("Failed");
            assert_ne!(first, second);
            let toasts = ctx.toasts().get();
            assert_eq!(toasts.len(), 2);
            assert_eq!(toasts[0].kind, ToastKind::Success);
            assert_eq!(toasts[1].message, "Failed");
        });
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        with_runtime(|| {
            let ctx = ToastContext::new();
            let keep = ctx.info("Keep");
            let drop = ctx.warning("Drop");
            ctx.dismiss(&drop);
            let toasts = ctx.toasts().get();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].id, keep);
        });
    }

    #[test]
    fn use_toast_reads_provided_context() {
        with_runtime(|| {
            let provided = provide_toasts();
            use_toast().success("From context");
            assert_eq!(provided.toasts().get().len(), 1);
        });
    }
}
