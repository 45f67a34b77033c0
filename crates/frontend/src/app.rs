use crate::domain::plans::model::PlanStore;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the plan store to the whole app via context. The pages only
    // see its API, so a real backend client can replace the in-memory
    // stand-in without touching them.
    provide_context(PlanStore::with_mock_plans());

    view! {
        <AppRoutes />
    }
}
