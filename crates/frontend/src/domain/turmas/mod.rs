use crate::layout::header::Navigation;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Placeholder until class ("turma") management ships.
#[component]
pub fn TurmasPage() -> impl IntoView {
    view! {
        <div class="page">
            <Navigation />

            <h1 class="page__title">"Turmas"</h1>

            <div class="empty-state">
                {icon("users")}
                <h2>"Página em Desenvolvimento"</h2>
                <p class="empty-state__hint">
                    "A funcionalidade de gestão de turmas estará disponível em breve. "
                    "Continue explorando outras seções do app."
                </p>
            </div>

            <button class="btn btn-primary">"Nova Turma"</button>
        </div>
    }
}
