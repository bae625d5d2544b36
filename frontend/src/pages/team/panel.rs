use super::{components::MemberCard, utils::can_remove, view_model::TeamViewModel};
use crate::{
    api::{InviteRole, User},
    components::{confirm_dialog::ConfirmDialog, layout::LoadingSpinner, modal::Modal},
    state::auth::{use_auth, use_is_admin},
};
use leptos::*;

const FIELD: &str = "w-full px-4 py-2 rounded-xl border border-border bg-form-control-bg text-sm";

#[component]
pub fn TeamPage() -> impl IntoView {
    let vm = TeamViewModel::new();
    let (auth, _) = use_auth();
    let is_admin = use_is_admin();
    let on_remove = Callback::new(move |member: User| vm.pending_remove.set(Some(member)));
    let on_invite = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let _ = vm.send_invite().await;
        });
    };
    let remove_message = Signal::derive(move || {
        vm.pending_remove.with(|m| {
            m.as_ref()
                .map(|m| format!("Remove {} from the team? They will lose access immediately.", m.display_name()))
                .unwrap_or_default()
        })
    });

    view! {
        <div class="team-page space-y-6">
            <header class="flex justify-between items-center bg-surface-elevated p-6 rounded-2xl border border-border">
                <div>
                    <h2 class="text-xl font-black text-fg">"Team Directory"</h2>
                    <p class="text-sm text-fg-muted">"Manage your team members and their roles."</p>
                </div>
                <Show when=move || is_admin.get()>
                    <button type="button" class="px-4 py-2 rounded-xl bg-brand text-white text-sm font-bold" on:click=move |_| vm.open_invite()>
                        <i class="fas fa-envelope mr-2"></i>"Invite Member"
                    </button>
                </Show>
            </header>

            {move || if vm.loading.get() {
                view! { <LoadingSpinner /> }.into_view()
            } else {
                let viewer = auth.with(|a| a.user.clone());
                view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                        {vm.members
                            .get()
                            .into_iter()
                            .map(|member| {
                                let removable = can_remove(&member, viewer.as_ref());
                                let is_self = viewer.as_ref().is_some_and(|v| v.id == member.id);
                                view! { <MemberCard member=member removable=removable is_self=is_self on_remove=on_remove /> }
                            })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }}

            <Modal is_open=vm.invite_open title="Invite New Member" on_close=Callback::new(move |_| vm.invite_open.set(false))>
                <form class="p-6 space-y-4" on:submit=on_invite>
                    <div>
                        <label class="block text-xs font-black text-fg-muted uppercase tracking-widest mb-2" for="invite-email">"Email"</label>
                        <input
                            id="invite-email"
                            type="email"
                            class=FIELD
                            placeholder="colleague@company.com"
                            prop:value=move || vm.invite_email.get()
                            on:input=move |ev| vm.invite_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-xs font-black text-fg-muted uppercase tracking-widest mb-2" for="invite-role">"Role"</label>
                        <select
                            id="invite-role"
                            class=FIELD
                            prop:value=move || vm.invite_role.get().as_str()
                            on:change=move |ev| {
                                let role = if event_target_value(&ev) == InviteRole::Admin.as_str() { InviteRole::Admin } else { InviteRole::Member };
                                vm.invite_role.set(role);
                            }
                        >
                            <option value=InviteRole::Member.as_str()>"Team Member"</option>
                            <option value=InviteRole::Admin.as_str()>"Admin"</option>
                        </select>
                    </div>
                    <div class="flex justify-end gap-3">
                        <button type="button" class="px-4 py-2 text-fg-muted rounded-lg" on:click=move |_| vm.invite_open.set(false)>"Cancel"</button>
                        <button type="submit" class="px-4 py-2 bg-brand text-white rounded-lg disabled:opacity-50" disabled=move || vm.sending.get()>
                            {move || if vm.sending.get() { "Sending..." } else { "Send Invite" }}
                        </button>
                    </div>
                </form>
            </Modal>

            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_remove.with(Option::is_some))
                title="Remove Member?"
                message=remove_message
                confirm_label="Remove"
                destructive=true
                on_confirm=Callback::new(move |_| spawn_local(async move {
                    let _ = vm.confirm_remove().await;
                }))
                on_cancel=Callback::new(move |_| vm.pending_remove.set(None))
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use crate::test_support::helpers::{admin_user, provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn member_cannot_invite() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <TeamPage /> }
        });
        assert!(html.contains("Team Directory"));
        assert!(!html.contains("Invite Member"));
    }

    #[test]
    fn admin_can_invite() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <TeamPage /> }
        });
        assert!(html.contains("Invite Member"));
    }

    #[test]
    fn card_offers_removal_only_when_allowed() {
        let render = |removable: bool| {
            render_to_string(move || {
                let member = User {
                    id: "u-1".into(),
                    full_name: "Ann Lee".into(),
                    email: "ann@x.io".into(),
                    role: Role::Member,
                    avatar_url: None,
                };
                view! { <MemberCard member=member removable=removable on_remove=Callback::new(|_| {}) /> }
            })
        };
        let with = render(true);
        assert!(with.contains("Ann Lee"));
        assert!(with.contains("Team Member"));
        assert!(with.contains("Remove Member"));
        assert!(!render(false).contains("Remove Member"));
    }
}
