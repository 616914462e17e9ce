pub mod footer;
pub mod navbar;

use leptos::prelude::*;

use crate::routes::Navigator;
use crate::shared::toast::ToastService;
use crate::system::auth::AuthHandle;
use footer::Footer;
use navbar::Navbar;

/// Page frame: navigation bar on top, content, footer.
///
/// ```text
/// +------------------------------+
/// |            Navbar            |
/// +------------------------------+
/// |           content            |
/// +------------------------------+
/// |            Footer            |
/// +------------------------------+
/// ```
#[component]
pub fn Shell<C>(auth: AuthHandle, nav: Navigator, toasts: ToastService, content: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <Navbar auth=auth nav=nav toasts=toasts />
            <main class="app-main">{content}</main>
            <Footer />
        </div>
    }
}
