use crate::domain::plans::model::PlanStore;
use crate::layout::header::Navigation;
use crate::shared::icons::icon;
use contracts::domain::plans::aggregate::Plan;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Case-insensitive substring filter over plan names. A blank or
/// whitespace-only term returns the collection unchanged; matches keep
/// their original relative order.
pub fn filter_plans(plans: &[Plan], term: &str) -> Vec<Plan> {
    let term = term.trim();
    if term.is_empty() {
        return plans.to_vec();
    }
    let needle = term.to_lowercase();
    plans
        .iter()
        .filter(|plan| plan.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[component]
pub fn PlansPage() -> impl IntoView {
    let store = use_context::<PlanStore>().expect("PlanStore not found in context");
    let plans = store.plans();
    let (search_term, set_search_term) = signal(String::new());
    let navigate = use_navigate();

    let filtered = move || filter_plans(&plans.get(), &search_term.get());

    view! {
        <div class="page">
            <Navigation />

            <h1 class="page__title">"Planos"</h1>

            <div class="search">
                {icon("search")}
                <input
                    type="text"
                    class="search__input"
                    placeholder="Pesquisar"
                    prop:value=move || search_term.get()
                    on:input=move |ev| set_search_term.set(event_target_value(&ev))
                />
            </div>

            <div class="page__body">
                <Show
                    when=move || !filtered().is_empty()
                    fallback=|| view! {
                        <div class="empty-state">
                            <p>"Nenhum plano encontrado"</p>
                            <p class="empty-state__hint">"Tente buscar por outro termo"</p>
                        </div>
                    }
                >
                    <div class="plan-list">
                        <For
                            each=filtered
                            key=|plan| plan.id
                            children=move |plan| view! { <PlanCard plan /> }
                        />
                    </div>
                </Show>
            </div>

            <button
                class="btn btn-primary"
                on:click=move |_| navigate("/criar-plano", Default::default())
            >
                "Novo Plano"
            </button>
        </div>
    }
}

#[component]
fn PlanCard(plan: Plan) -> impl IntoView {
    view! {
        <div class="plan-card">
            <div class="plan-card__info">
                <div class="plan-card__meta">
                    <span>{plan.name}</span>
                    <span>{plan.frequency_label}</span>
                </div>
                <div class="plan-card__price">
                    <span class="plan-card__amount">{plan.price_label}</span>
                    <span class="plan-card__period">{plan.period_label}</span>
                </div>
            </div>
            <button class="btn btn-secondary">"Configurações"</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plans::model::mock_plans;

    #[test]
    fn test_blank_term_is_identity() {
        let plans = mock_plans();
        assert_eq!(filter_plans(&plans, ""), plans);
        assert_eq!(filter_plans(&plans, "   "), plans);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let plans = mock_plans();
        let matched = filter_plans(&plans, "premium");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Plano Vôlei Premium");

        assert_eq!(filter_plans(&plans, "Premium"), matched);
    }

    #[test]
    fn test_result_preserves_order() {
        let plans = mock_plans();
        let matched = filter_plans(&plans, "plano");
        assert_eq!(matched, plans);

        // A subsequence of the original, in relative order
        let partial = filter_plans(&plans, "P");
        let names: Vec<&str> = partial.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["Plano Vôlei Pro", "Plano Vôlei Premium", "Plano Vôlei Livre"]
        );
    }

    #[test]
    fn test_no_match_yields_empty() {
        let plans = mock_plans();
        assert!(filter_plans(&plans, "natação").is_empty());
    }
}
