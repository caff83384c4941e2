//! Backend status page view.
//!
//! # Design
//! - Issue one health check per mount; leaving and re-entering fetches again.
//! - Read the outcome from the `AppStore` and render through `StatusView`.

use crate::app::api::ApiCtx;
use crate::core::routes::Route;
use crate::core::store::AppStore;
use crate::features::health::logic::{
    BACK_LABEL, BACK_ROUTE, REFRESH_LABEL, STATUS_TITLE, StatusView,
};
use crate::features::health::screen::{HealthSink, StatusScreen};
use crate::features::health::state::HealthEvent;
use gloo::console;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(BackendStatusPage)]
pub(crate) fn backend_status_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let screen = use_memo(
        move |_| api_ctx.map(|ctx| StatusScreen::new(ctx.source, store_sink())),
        (),
    );
    let health = use_selector(|store: &AppStore| store.health.clone());
    let view = StatusView::from_state(&health);

    {
        let screen = screen.clone();
        use_effect_with_deps(
            move |_| {
                spawn_fetch(screen.clone(), FetchTrigger::Mount);
                move || {
                    if let Some(screen) = screen.as_ref() {
                        screen.unmount();
                    }
                }
            },
            (),
        );
    }

    let on_refresh =
        Callback::from(move |_: MouseEvent| spawn_fetch(screen.clone(), FetchTrigger::Refresh));

    html! {
        <section class="status-page">
            <div class="panel">
                <h1>{STATUS_TITLE}</h1>
                {if let Some(hint) = view.idle_hint {
                    html! { <p class="muted">{hint}</p> }
                } else {
                    html! {}
                }}
                {if view.show_spinner {
                    html! { <span class="loading loading-spinner loading-lg" aria-label="Loading"></span> }
                } else {
                    html! {}
                }}
                {if let Some(line) = view.error_line.clone() {
                    html! { <p class="error-text" role="alert">{line}</p> }
                } else {
                    html! {}
                }}
                {if let Some(details) = view.details.clone() {
                    html! {
                        <div class="health-grid">
                            <div class="health-row">
                                <span class="muted">{"Status: "}</span>
                                <strong class={classes!("pill", details.tone)}>{details.status}</strong>
                            </div>
                            <div class="health-row">
                                <span class="muted">{"Message: "}</span>
                                <strong>{details.message}</strong>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }}
                <div class="actions">
                    <button class="btn" onclick={on_refresh}>{REFRESH_LABEL}</button>
                    <Link<Route> to={BACK_ROUTE} classes="btn btn-outline">
                        {BACK_LABEL}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}

#[derive(Clone, Copy)]
enum FetchTrigger {
    Mount,
    Refresh,
}

fn spawn_fetch(screen: Rc<Option<StatusScreen>>, trigger: FetchTrigger) {
    yew::platform::spawn_local(async move {
        let Some(screen) = screen.as_ref() else {
            console::error!("health check skipped: api context missing");
            return;
        };
        let settled = match trigger {
            FetchTrigger::Mount => screen.mount().await,
            FetchTrigger::Refresh => Some(screen.refresh().await),
        };
        if let Some(HealthEvent::Rejected(reason)) = settled {
            console::warn!("health check failed", reason);
        }
    });
}

fn store_sink() -> HealthSink {
    let dispatch = Dispatch::<AppStore>::new();
    Rc::new(move |event: HealthEvent| {
        dispatch.reduce_mut(|store| store.apply_health(event));
    })
}
