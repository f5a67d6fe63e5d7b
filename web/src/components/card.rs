use leptos::prelude::*;

#[component]
pub fn Card(
    #[prop(optional)] dashed: bool,
    #[prop(optional)] title: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = if dashed { "card-dashed" } else { "card" };
    view! {
        <section class=class>
            {title.map(|title| view! { <h2 class="card-title">{title}</h2> })}
            {children()}
        </section>
    }
}
