use yew::prelude::*;

use crate::sections::{
    about::About, footer::Footer, header::Header, hero::Hero, roadmap::Roadmap, team::Team,
    terms::Terms,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <>
            <Header />
            <Hero />
            <About />
            <Team />
            <Roadmap />
            <Terms />
            <Footer />
        </>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        color: #a5f7ff;
                    }
                    .not-found h1 {
                        font-size: 4rem;
                        font-weight: 700;
                        color: #72d3f5;
                    }
                    .not-found a {
                        color: #72d3f5;
                        text-decoration: none;
                        border-bottom: 1px solid rgba(114, 211, 245, 0.4);
                    }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"This page drifted off the timeline."}</p>
            <a href="/">{"Back to the landing page"}</a>
        </div>
    }
}
