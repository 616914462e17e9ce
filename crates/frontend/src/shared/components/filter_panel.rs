use crate::shared::handles::FilterHandle;
use crate::shared::icons::icon;
use crate::shared::components::ui::{Button, ButtonVariant, Select};
use contracts::shared::constants::{
    job_type_options, work_mode_options, LOCATIONS, SALARY_DEBOUNCE_MS, SALARY_MAX, SALARY_MIN,
    SALARY_STEP,
};
use contracts::shared::debounce::{DebounceTicket, SalaryStage};
use contracts::shared::filter::FilterKey;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Sidebar with the job filters.
///
/// Selects write straight to the filter model. The salary sliders are staged
/// locally and reach the model as one `(min, max)` update after
/// `SALARY_DEBOUNCE_MS` without further movement. A pending update is
/// dropped when the panel is unmounted.
#[component]
pub fn JobFilterPanel(filters: FilterHandle) -> impl IntoView {
    let stage = StoredValue::new(SalaryStage::new(&filters.state_untracked()));
    let (staged, set_staged) = signal(filters.state_untracked().salary_pair());

    let schedule = move |ticket: DebounceTicket| {
        spawn_local(async move {
            TimeoutFuture::new(SALARY_DEBOUNCE_MS).await;
            filters.mutate(|model| {
                stage
                    .try_update_value(|s| s.commit(ticket, model))
                    .unwrap_or(false)
            });
            if let Some(pair) = stage.try_with_value(|s| s.staged()) {
                let _ = set_staged.try_set(pair);
            }
        });
    };

    on_cleanup(move || {
        let _ = stage.try_update_value(|s| s.cancel());
    });

    let on_min_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev).parse::<i64>().unwrap_or(SALARY_MIN);
        if let Some(ticket) = stage.try_update_value(|s| s.set_min(value)) {
            set_staged.update(|pair| pair.0 = value);
            schedule(ticket);
        }
    };

    let on_max_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev).parse::<i64>().unwrap_or(SALARY_MAX);
        if let Some(ticket) = stage.try_update_value(|s| s.set_max(value)) {
            set_staged.update(|pair| pair.1 = value);
            schedule(ticket);
        }
    };

    let on_reset = move |_: leptos::ev::MouseEvent| {
        filters.reset_filters();
        let state = filters.state_untracked();
        stage.update_value(|s| s.sync_from(&state));
        set_staged.set(state.salary_pair());
    };

    let active_count = move || filters.active_count();

    view! {
        <aside class="filter-panel">
            <div class="filter-panel-header">
                {icon("filter")}
                <span class="filter-panel__title">"Filters"</span>
                {move || {
                    let count = active_count();
                    if count > 0 {
                        view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                {count}
                            </Badge>
                        }
                        .into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </div>

            <div class="filter-panel-content">
                <Select
                    id="filter-location"
                    label="Location"
                    value=Signal::derive(move || filters.state().location)
                    on_change=Callback::new(move |v: String| filters.update_filter(FilterKey::Location, v))
                    options=LOCATIONS.to_vec()
                />
                <Select
                    id="filter-work-mode"
                    label="Work Mode"
                    value=Signal::derive(move || filters.state().work_mode)
                    on_change=Callback::new(move |v: String| filters.update_filter(FilterKey::WorkMode, v))
                    options=work_mode_options()
                />
                <Select
                    id="filter-job-type"
                    label="Job Type"
                    value=Signal::derive(move || filters.state().job_type)
                    on_change=Callback::new(move |v: String| filters.update_filter(FilterKey::JobType, v))
                    options=job_type_options()
                />

                <div class="form__group">
                    <label class="form__label">
                        {move || {
                            let (min, max) = staged.get();
                            format!("Salary (LPA): {} - {}", min, max)
                        }}
                    </label>
                    <input
                        type="range"
                        class="salary-slider"
                        aria-label="Minimum salary"
                        min=SALARY_MIN.to_string()
                        max=SALARY_MAX.to_string()
                        step=SALARY_STEP.to_string()
                        prop:value=move || staged.get().0.to_string()
                        on:input=on_min_input
                    />
                    <input
                        type="range"
                        class="salary-slider"
                        aria-label="Maximum salary"
                        min=SALARY_MIN.to_string()
                        max=SALARY_MAX.to_string()
                        step=SALARY_STEP.to_string()
                        prop:value=move || staged.get().1.to_string()
                        on:input=on_max_input
                    />
                    {move || {
                        filters
                            .state()
                            .salary_range_error()
                            .map(|e| view! { <div class="form__error">{e.to_string()}</div> })
                    }}
                </div>

                <Button variant=ButtonVariant::Secondary on_click=Callback::new(on_reset)>
                    "Reset Filters"
                </Button>
            </div>
        </aside>
    }
}
