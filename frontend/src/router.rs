use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{
        guard::{RequireAdmin, RequireAuth},
        layout::{Layout, BRAND},
        toast::ToastHost,
    },
    identity::IdentityClient,
    pages::{
        attendance::AttendancePage, calendar::CalendarPage, dashboard::DashboardPage,
        login::LoginPage, project_details::ProjectDetailsPage, projects::ProjectsPage,
        reports::ReportsPage, settings::SettingsPage, tasks::TasksPage, team::TeamPage,
    },
    state::{
        auth::{use_auth, AuthProvider},
        notifications::{follow_session, provide_inbox},
        toast::provide_toasts,
    },
    utils::browser,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/login",
    "/",
    "/tasks",
    "/projects",
    "/projects/:id",
    "/attendance",
    "/calendar",
    "/team",
    "/settings",
    "/reports",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/",
    "/tasks",
    "/projects",
    "/projects/:id",
    "/attendance",
    "/calendar",
    "/team",
    "/settings",
    "/reports",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/reports"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/login"];

/// Client-side navigation, provided from inside the router.
#[derive(Clone, Copy)]
pub struct AppNavigator(pub Callback<String>);

/// Navigates inside the router when there is one, otherwise loads the page.
pub fn use_app_navigate() -> Callback<String> {
    match use_context::<AppNavigator>() {
        Some(AppNavigator(navigate)) => navigate,
        None => Callback::new(|path: String| browser::assign(&path)),
    }
}

/// Ties the app-wide inbox to whoever is signed in.
#[component]
fn InboxSession() -> impl IntoView {
    let (auth, _) = use_auth();
    follow_session(auth);
}

#[component]
fn NavigatorProvider(children: Children) -> impl IntoView {
    let navigate = use_navigate();
    provide_context(AppNavigator(Callback::new(move |path: String| {
        navigate(&path, Default::default());
    })));
    children()
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    let api = ApiClient::new();
    provide_context(api.clone());
    provide_context(IdentityClient::new());
    let toasts = provide_toasts();
    provide_inbox(api, toasts);
    view! {
        <Title text=format!("{} | Anchorz PM", BRAND) />
        <AuthProvider>
            <InboxSession/>
            <Router>
                <NavigatorProvider>
                    <Routes>
                        <Route path="/login" view=LoginPage/>
                        <Route path="/" view=ProtectedDashboard/>
                        <Route path="/tasks" view=ProtectedTasks/>
                        <Route path="/projects" view=ProtectedProjects/>
                        <Route path="/projects/:id" view=ProtectedProjectDetails/>
                        <Route path="/attendance" view=ProtectedAttendance/>
                        <Route path="/calendar" view=ProtectedCalendar/>
                        <Route path="/team" view=ProtectedTeam/>
                        <Route path="/settings" view=ProtectedSettings/>
                        <Route path="/reports" view=ProtectedReports/>
                        <Route path="/*any" view=|| view! { <Redirect path="/"/> }/>
                    </Routes>
                </NavigatorProvider>
            </Router>
            <ToastHost/>
        </AuthProvider>
    }
}

/// Authenticated page inside the sidebar layout.
#[component]
fn Shell(#[prop(optional)] admin: bool, children: ChildrenFn) -> impl IntoView {
    let location = use_location();
    let path = Signal::derive(move || location.pathname.get());
    let children = store_value(children);
    let page = move || view! { <Layout current_path=path>{children.with_value(|c| c())}</Layout> };
    if admin {
        view! { <RequireAdmin>{page}</RequireAdmin> }.into_view()
    } else {
        view! { <RequireAuth>{page}</RequireAuth> }.into_view()
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <Shell><DashboardPage/></Shell> }
}

#[component]
fn ProtectedTasks() -> impl IntoView {
    view! { <Shell><TasksPage/></Shell> }
}

#[component]
fn ProtectedProjects() -> impl IntoView {
    view! { <Shell><ProjectsPage/></Shell> }
}

#[component]
fn ProtectedProjectDetails() -> impl IntoView {
    view! { <Shell><ProjectDetailsPage/></Shell> }
}

#[component]
fn ProtectedAttendance() -> impl IntoView {
    view! { <Shell><AttendancePage/></Shell> }
}

#[component]
fn ProtectedCalendar() -> impl IntoView {
    view! { <Shell><CalendarPage/></Shell> }
}

#[component]
fn ProtectedTeam() -> impl IntoView {
    view! { <Shell><TeamPage/></Shell> }
}

#[component]
fn ProtectedSettings() -> impl IntoView {
    view! { <Shell><SettingsPage/></Shell> }
}

#[component]
fn ProtectedReports() -> impl IntoView {
    view! { <Shell admin=true><ReportsPage/></Shell> }
}
