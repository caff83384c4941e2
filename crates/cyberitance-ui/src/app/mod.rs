use crate::app::api::ApiCtx;
use crate::core::routes::Route;
use crate::features::health::logic::BACK_LABEL;
use crate::features::health::view::BackendStatusPage;
use crate::features::home::view::HomePage;
use gloo::console;
use preferences::api_base_url;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod api;
mod preferences;

#[function_component(CyberitanceApp)]
pub(crate) fn cyberitance_app() -> Html {
    let api_ctx = use_memo(
        |_| {
            let base_url = api_base_url();
            console::info!("api base url resolved", base_url.clone());
            ApiCtx::new(base_url)
        },
        (),
    );

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <main class="app-main">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Status => html! { <BackendStatusPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <section class="not-found">
            <div class="panel">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Home} classes="btn btn-outline">{BACK_LABEL}</Link<Route>>
            </div>
        </section>
    }
}

/// Mount the application into `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CyberitanceApp>::with_root(root).render();
    } else {
        yew::Renderer::<CyberitanceApp>::new().render();
    }
}
