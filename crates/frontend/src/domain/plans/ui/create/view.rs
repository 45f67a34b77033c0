use super::view_model::CreatePlanViewModel;
use crate::domain::plans::model::PlanStore;
use crate::shared::components::ui::{Dropdown, Input};
use crate::shared::icons::icon;
use contracts::domain::plans::schedule::{Period, Recurrence};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::rc::Rc;

/// Matches the page's CSS slide-out transition
const EXIT_ANIMATION_MS: u32 = 300;

#[component]
pub fn CreatePlanPage() -> impl IntoView {
    let store = use_context::<PlanStore>().expect("PlanStore not found in context");
    let vm = CreatePlanViewModel::new(store);
    let navigate = use_navigate();

    let (is_exiting, set_is_exiting) = signal(false);

    // Back navigation is deferred so the exit transition can play. The
    // timer handle is kept so teardown can cancel it instead of letting
    // it fire against a disposed view.
    let exit_timer = StoredValue::new_local(None::<Timeout>);
    let handle_back = {
        let navigate = navigate.clone();
        move |_| {
            set_is_exiting.set(true);
            let navigate = navigate.clone();
            exit_timer.set_value(Some(Timeout::new(EXIT_ANIMATION_MS, move || {
                navigate("/", Default::default());
            })));
        }
    };
    on_cleanup(move || {
        if let Some(timer) = exit_timer.try_update_value(|t| t.take()).flatten() {
            timer.cancel();
        }
    });

    let on_saved: Rc<dyn Fn(())> = Rc::new({
        let navigate = navigate.clone();
        move |_| navigate("/", Default::default())
    });

    let frequency_value = Signal::derive(move || vm.form.with(|f| f.frequency.label()));
    let frequency_options = Signal::derive(move || vm.frequency_options());
    let period_value = Signal::derive(move || vm.form.with(|f| f.period.label().to_string()));
    let period_options = Signal::derive(|| {
        Period::all()
            .iter()
            .map(|p| p.label().to_string())
            .collect::<Vec<_>>()
    });

    view! {
        <div class=move || {
            if is_exiting.get() { "page page--exiting" } else { "page page--entering" }
        }>
            <button class="page__back" on:click=handle_back>
                {icon("arrow-left")}
            </button>

            <h1 class="page__title">"Criar Plano"</h1>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form__section">
                <div class="form__section-title">"Informações Básicas"</div>

                <Input
                    label="Nome"
                    value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |name: String| vm.set_name(name))
                />

                <div class="form__group">
                    <label class="form__label">"Frequência das aulas"</label>
                    <div class="form__row">
                        <Dropdown
                            value=frequency_value
                            options=frequency_options
                            on_select=Callback::new(move |label: String| vm.set_frequency(&label))
                        />
                        <Dropdown
                            value=period_value
                            options=period_options
                            on_select=Callback::new(move |label: String| vm.set_period(&label))
                        />
                    </div>
                </div>
            </div>

            <div class="divider"></div>

            <div class="form__section">
                <div class="form__section-title">"Cobrança"</div>

                <div class="form__group">
                    <label class="form__label">"Recorrência"</label>
                    <div class="btn-group">
                        {Recurrence::all()
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if vm.form.with(|f| f.recurrence) == option {
                                                "btn-group__item btn-group__item--active"
                                            } else {
                                                "btn-group__item"
                                            }
                                        }
                                        on:click=move |_| vm.set_recurrence(option)
                                    >
                                        {option.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <Input
                    label="Valor"
                    value=Signal::derive(move || vm.value_display())
                    on_input=Callback::new(move |raw: String| vm.set_value(&raw))
                    placeholder="R$ 0,00"
                />
            </div>

            <button
                class="btn btn-primary"
                disabled=move || !vm.is_form_valid()
                on:click={
                    let on_saved = on_saved.clone();
                    move |_| vm.save_command(on_saved.clone())
                }
            >
                "Criar Plano"
            </button>
        </div>
    }
}
