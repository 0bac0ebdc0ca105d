use yew::prelude::*;

use crate::components::reveal::{Entrance, Reveal};
use crate::motion::hooks::use_in_view;
use crate::motion::reveal::ViewportOptions;
use crate::motion::timeline::{Easing, Transition};

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    /// Final width of the underline bar, in px.
    #[prop_or(96.0)]
    pub bar_width: f64,
}

/// Section title with an underline that grows in after the title lands.
#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let bar = use_node_ref();
    let bar_visible = use_in_view(bar.clone(), ViewportOptions::default());
    let bar_style = format!(
        "width: {}px; {}",
        if bar_visible { props.bar_width } else { 0.0 },
        Transition::new(0.4, Easing::EaseOut).delayed(0.3).css()
    );

    html! {
        <Reveal class="section-heading" entrance={Entrance::Down(20.0)} transition={Transition::new(0.5, Easing::EaseOut)}>
            <style>
                {r#"
                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-heading h2 {
                        font-size: clamp(1.9rem, 4vw, 3rem);
                        font-weight: 700;
                        color: #fff;
                        margin-bottom: 1rem;
                    }
                    .section-heading .bar {
                        height: 4px;
                        margin: 0 auto;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #72d3f5, #a5f7ff);
                        transition-property: width;
                    }
                "#}
            </style>
            <h2>{ props.title.clone() }</h2>
            <div ref={bar} class="bar" style={bar_style}></div>
        </Reveal>
    }
}
