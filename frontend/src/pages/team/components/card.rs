use crate::{
    api::User,
    components::common::Avatar,
    pages::team::utils::role_class,
};
use leptos::*;

#[component]
pub fn MemberCard(
    member: User,
    #[prop(optional)] removable: bool,
    #[prop(optional)] is_self: bool,
    on_remove: Callback<User>,
) -> impl IntoView {
    let target = member.clone();
    view! {
        <div class="member-card bg-surface-elevated rounded-2xl border border-border p-5 flex items-start gap-4">
            <Avatar name=member.display_name() image_url=member.avatar_url.clone().unwrap_or_default() />
            <div class="flex-1 min-w-0">
                <p class="font-bold text-fg truncate">
                    {member.display_name()}
                    {is_self.then(|| view! { <span class="ml-2 text-xs text-fg-muted">"(You)"</span> })}
                </p>
                <p class="text-xs text-fg-muted truncate" title=member.email.clone()>{member.email.clone()}</p>
                <span class=format!("inline-block mt-2 px-2 py-0.5 rounded-full text-xs font-semibold {}", role_class(&member))>
                    {member.role.as_str()}
                </span>
            </div>
            {removable.then(|| view! {
                <button
                    type="button"
                    class="p-2 text-fg-muted hover:text-status-error-text"
                    title="Remove Member"
                    aria-label="Remove Member"
                    on:click=move |_| on_remove.call(target.clone())
                >
                    <i class="fas fa-trash"></i>
                </button>
            })}
        </div>
    }
}
