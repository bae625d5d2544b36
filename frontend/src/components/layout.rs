use crate::{
    components::{
        common::Avatar, notification_bell::NotificationBell, search::GlobalSearch,
    },
    router::use_app_navigate,
    state::auth::{self, use_auth},
};
use leptos::*;

pub const BRAND: &str = "DIGIANCHORZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

const fn item(label: &'static str, href: &'static str, icon: &'static str) -> NavItem {
    NavItem { label, href, icon }
}

/// Sidebar entries in display order. Reports only exists for admins.
pub fn nav_items(is_admin: bool) -> Vec<NavItem> {
    let mut items = vec![
        item("Dashboard", "/", "home"),
        item("Tasks", "/tasks", "clipboard-list"),
        item("Projects", "/projects", "folder"),
        item("Attendance", "/attendance", "clock"),
        item("Calendar", "/calendar", "calendar"),
    ];
    if is_admin {
        items.push(item("Reports", "/reports", "chart-bar"));
    }
    items.push(item("Team", "/team", "users"));
    items.push(item("Settings", "/settings", "cog"));
    items
}

pub fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href || (href != "/" && pathname.starts_with(href))
}

#[component]
pub fn Sidebar(
    #[prop(into)] current_path: Signal<String>,
    open: RwSignal<bool>,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_admin = auth::use_is_admin();
    let navigate = use_app_navigate();
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();

    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            navigate.call("/login".to_string());
        }
    });

    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        open.set(false);
        logout_action.dispatch(());
    };

    let user_name = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .map(|u| u.display_name())
                .unwrap_or_else(|| "User".to_string())
        })
    };
    let user_role = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .map(|u| u.role.as_str().to_string())
                .unwrap_or_default()
        })
    };
    let avatar = move || auth.with(|state| state.user.as_ref().and_then(|u| u.avatar_url.clone()));

    view! {
        <Show when=move || open.get()>
            <div class="sidebar-backdrop fixed inset-0 bg-overlay-backdrop z-40 lg:hidden" on:click=move |_| open.set(false)></div>
        </Show>
        <aside class=move || {
            format!(
                "sidebar fixed inset-y-0 left-0 w-72 bg-surface-elevated border-r border-border flex flex-col z-50 transition-transform lg:translate-x-0 {}",
                if open.get() { "translate-x-0" } else { "-translate-x-full" }
            )
        }>
            <div class="p-6 flex items-center justify-between border-b border-border">
                <div class="flex items-center space-x-3">
                    <div class="brand-mark w-10 h-10 rounded-xl flex items-center justify-center text-white font-bold text-xl bg-brand">"D"</div>
                    <span class="font-black text-fg text-lg tracking-tighter uppercase">{BRAND}</span>
                </div>
                <button type="button" class="lg:hidden p-2 text-fg-muted" aria-label="Close menu" on:click=move |_| open.set(false)>
                    {"✕"}
                </button>
            </div>
            <nav class="flex-1 px-4 space-y-1.5 mt-6 overflow-y-auto">
                {move || {
                    let path = current_path.get();
                    nav_items(is_admin.get())
                        .into_iter()
                        .map(|entry| {
                            let class = if is_active(&path, entry.href) {
                                "nav-link active flex items-center space-x-3 px-4 py-3 rounded-xl font-medium bg-brand text-white"
                            } else {
                                "nav-link flex items-center space-x-3 px-4 py-3 rounded-xl font-medium text-fg-muted hover:bg-brand-muted hover:text-brand"
                            };
                            view! {
                                <a href=entry.href class=class on:click=move |_| open.set(false)>
                                    <i class=format!("fas fa-{} w-5", entry.icon)></i>
                                    <span>{entry.label}</span>
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </nav>
            <div class="user-card p-4 border-t border-border">
                <div class="flex items-center p-3 rounded-xl">
                    <div class="mr-3">
                        {move || view! { <Avatar name=user_name() image_url=avatar().unwrap_or_default() /> }}
                    </div>
                    <div class="flex-1 min-w-0">
                        <h4 class="text-sm font-bold text-fg truncate">{user_name}</h4>
                        <p class="text-xs text-fg-muted">{user_role}</p>
                        <button
                            type="button"
                            class="text-xs text-status-error-text font-medium mt-0.5 disabled:opacity-50"
                            on:click=on_logout
                            disabled=move || logout_pending.get()
                        >
                            "Sign Out"
                        </button>
                    </div>
                </div>
            </div>
        </aside>
    }
}

#[component]
pub fn Header(sidebar_open: RwSignal<bool>, search_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <header class="app-header flex justify-between items-center mb-6 lg:mb-8">
            <div class="flex items-center gap-3">
                <button
                    type="button"
                    class="lg:hidden p-2 text-fg-muted rounded-lg"
                    aria-label="Open menu"
                    on:click=move |_| sidebar_open.set(true)
                >
                    <i class="fas fa-bars"></i>
                </button>
                <h1 class="text-lg sm:text-xl lg:text-2xl font-black tracking-tight uppercase">{BRAND}</h1>
            </div>
            <div class="flex items-center space-x-1 lg:space-x-4">
                <button
                    type="button"
                    class="search-button p-2 text-fg-muted hover:text-fg rounded-full"
                    title="Search (Ctrl+K)"
                    aria-label="Search"
                    on:click=move |_| search_open.set(true)
                >
                    <i class="fas fa-search"></i>
                </button>
                <NotificationBell />
            </div>
        </header>
    }
}

#[cfg(target_arch = "wasm32")]
fn bind_search_shortcut(search_open: RwSignal<bool>) {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if (ev.meta_key() || ev.ctrl_key()) && ev.key().eq_ignore_ascii_case("k") {
            ev.prevent_default();
            search_open.set(true);
        }
    });
    on_cleanup(move || handle.remove());
}

#[component]
pub fn Layout(#[prop(into)] current_path: Signal<String>, children: Children) -> impl IntoView {
    let sidebar_open = create_rw_signal(false);
    let search_open = create_rw_signal(false);
    #[cfg(target_arch = "wasm32")]
    bind_search_shortcut(search_open);

    view! {
        <div class="app-shell bg-surface min-h-screen text-fg">
            <Sidebar current_path=current_path open=sidebar_open />
            <main class="flex-1 lg:ml-72 p-4 lg:p-8 min-h-screen">
                <Header sidebar_open=sidebar_open search_open=search_open />
                <div class="page">{children()}</div>
            </main>
            <GlobalSearch is_open=search_open on_close=Callback::new(move |_| search_open.set(false)) />
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional)] full_page: bool) -> impl IntoView {
    let class = if full_page {
        "flex justify-center items-center min-h-screen"
    } else {
        "flex justify-center items-center p-8"
    };
    view! {
        <div class=class>
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-brand"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_entry_is_admin_only() {
        let member: Vec<_> = nav_items(false).iter().map(|i| i.label).collect();
        assert!(!member.contains(&"Reports"));
        assert_eq!(
            member,
            vec!["Dashboard", "Tasks", "Projects", "Attendance", "Calendar", "Team", "Settings"]
        );

        let admin: Vec<_> = nav_items(true).iter().map(|i| i.label).collect();
        assert_eq!(admin[5], "Reports");
    }

    #[test]
    fn active_entry_matches_prefixes_except_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/tasks", "/"));
        assert!(is_active("/projects/42", "/projects"));
        assert!(!is_active("/team", "/tasks"));
    }
}
