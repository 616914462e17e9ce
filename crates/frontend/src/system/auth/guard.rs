use leptos::prelude::*;

use super::context::AuthHandle;

/// Component that requires authentication
/// Shows fallback if not authenticated
#[component]
pub fn RequireAuth(
    auth: AuthHandle,
    #[prop(into)] fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || auth.is_authenticated() fallback=fallback>
            {children()}
        </Show>
    }
}
