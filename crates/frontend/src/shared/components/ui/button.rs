use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button--primary",
            ButtonVariant::Secondary => "button--secondary",
            ButtonVariant::Ghost => "button--ghost",
        }
    }
}

/// Plain `type="button"` button in one of the three styles
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    on_click: Callback<leptos::ev::MouseEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!("button {}", variant.class())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| on_click.run(ev)
        >
            {children()}
        </button>
    }
}
