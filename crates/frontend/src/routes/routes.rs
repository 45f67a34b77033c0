use crate::domain::plans::ui::create::CreatePlanPage;
use crate::domain::plans::ui::list::PlansPage;
use crate::domain::students::StudentsPage;
use crate::domain::turmas::TurmasPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=PlansPage />
                <Route path=path!("/alunos") view=StudentsPage />
                <Route path=path!("/turmas") view=TurmasPage />
                <Route path=path!("/criar-plano") view=CreatePlanPage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Página não encontrada"</h1>
        </div>
    }
}
