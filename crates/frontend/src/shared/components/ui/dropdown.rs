use crate::shared::dom_utils::on_click_outside;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dropdown field: a trigger button showing the current value plus a
/// panel of selectable options.
///
/// Each instance owns its open/closed state. The panel closes when an
/// option is selected or when a mousedown lands outside the field.
#[component]
pub fn Dropdown(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Currently selected option, shown on the trigger
    #[prop(into)]
    value: Signal<String>,
    /// Selectable options, in display order
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Called with the chosen option; the panel closes afterwards
    on_select: Callback<String>,
) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let root_ref = NodeRef::<leptos::html::Div>::new();

    on_click_outside(root_ref, move || set_is_open.set(false));

    view! {
        <div class="form__group" node_ref=root_ref>
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <div class="dropdown">
                <button
                    type="button"
                    class="dropdown__trigger"
                    on:click=move |_| set_is_open.update(|open| *open = !*open)
                >
                    <span>{move || value.get()}</span>
                    {icon("chevron-down")}
                </button>
                <Show when=move || is_open.get()>
                    <div class="dropdown__options">
                        <For
                            each=move || options.get()
                            key=|opt| opt.clone()
                            children=move |opt| {
                                let opt_value = opt.clone();
                                view! {
                                    <button
                                        type="button"
                                        class="dropdown__option"
                                        on:click=move |_| {
                                            on_select.run(opt_value.clone());
                                            set_is_open.set(false);
                                        }
                                    >
                                        {opt}
                                    </button>
                                }
                            }
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}
