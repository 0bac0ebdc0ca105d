use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod motion {
    pub mod dom;
    pub mod geometry;
    pub mod hooks;
    pub mod pointer;
    pub mod reveal;
    pub mod scroll;
    pub mod source;
    pub mod spring;
    pub mod timeline;
}
mod contexts {
    pub mod page;
}
mod components {
    pub mod animated_button;
    pub mod particles;
    pub mod reveal;
    pub mod section_heading;
}
mod sections {
    pub mod about;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod roadmap;
    pub mod team;
    pub mod terms;
}
mod pages {
    pub mod landing;
}

use components::reveal::REVEAL_CSS;
use contexts::page::PageProvider;
use motion::dom::{PagePointerTracker, PageScrollTracker, WindowPointerSource, WindowScrollSource};
use pages::landing::{Landing, NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

const GLOBAL_CSS: &str = r#"
    * { box-sizing: border-box; margin: 0; }
    html { scroll-behavior: smooth; }
    body {
        background: #05171a;
        color: #fff;
        font-family: system-ui, -apple-system, sans-serif;
        overflow-x: hidden;
    }
    .spotlight-host { position: relative; }
    .spotlight-host .spotlight {
        position: absolute;
        inset: 0;
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.3s;
    }
    .spotlight-host:hover .spotlight { opacity: 1; }
"#;

#[function_component]
fn App() -> Html {
    // One window listener of each kind for the whole page, shared through context.
    let pointer = use_state(|| PagePointerTracker::new(WindowPointerSource));
    let scroll = use_state(|| PageScrollTracker::new(WindowScrollSource));

    html! {
        <ContextProvider<PagePointerTracker> context={(*pointer).clone()}>
            <ContextProvider<PageScrollTracker> context={(*scroll).clone()}>
                <PageProvider>
                    <style>{ GLOBAL_CSS }{ REVEAL_CSS }</style>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </PageProvider>
            </ContextProvider<PageScrollTracker>>
        </ContextProvider<PagePointerTracker>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
