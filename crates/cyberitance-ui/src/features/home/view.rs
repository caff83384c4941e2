//! Landing page view.

use crate::core::routes::Route;
use crate::features::home::{HOME_BODY, HOME_TITLE, STATUS_LINK_LABEL, STATUS_LINK_ROUTE};
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    html! {
        <section class="home-page">
            <div class="panel">
                <h1>{HOME_TITLE}</h1>
                <p class="muted">{HOME_BODY}</p>
                <Link<Route> to={STATUS_LINK_ROUTE} classes="btn btn-primary">
                    {STATUS_LINK_LABEL}
                </Link<Route>>
            </div>
        </section>
    }
}
