use leptos::prelude::*;
use shared::route::AdminRoute;

use crate::components::{Card, EmptyState};

fn placeholder(route: &AdminRoute) -> &'static str {
    match route {
        AdminRoute::Dashboard => "Nothing to report yet.",
        AdminRoute::Analytics => "No analytics collected yet.",
        AdminRoute::GameMode => "No game mode selected.",
        AdminRoute::Users => "No users to show.",
        AdminRoute::Settings => "No settings available.",
        AdminRoute::DepositRequests => "No pending deposit requests.",
        AdminRoute::WithdrawalRequests => "No pending withdrawal requests.",
    }
}

#[component]
pub fn AdminPage(route: AdminRoute) -> impl IntoView {
    view! {
        <div class="container">
            <h1>{route.label()}</h1>
            <Card dashed=true title=route.to_str()>
                <EmptyState message=placeholder(&route) />
            </Card>
        </div>
    }
}
