use crate::layout::header::Navigation;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Placeholder until student management ships.
#[component]
pub fn StudentsPage() -> impl IntoView {
    view! {
        <div class="page">
            <Navigation />

            <h1 class="page__title">"Alunos"</h1>

            <div class="empty-state">
                {icon("users")}
                <h2>"Página em Desenvolvimento"</h2>
                <p class="empty-state__hint">
                    "A funcionalidade de gestão de alunos estará disponível em breve. "
                    "Continue explorando outras seções do app."
                </p>
            </div>

            <button class="btn btn-primary">"Novo Aluno"</button>
        </div>
    }
}
