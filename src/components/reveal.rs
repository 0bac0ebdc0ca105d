use yew::prelude::*;

use crate::motion::hooks::use_in_view;
use crate::motion::reveal::ViewportOptions;
use crate::motion::timeline::Transition;

/// Shared rules for every `<Reveal>`; mounted once by the app shell.
pub const REVEAL_CSS: &str = r#"
    .reveal {
        opacity: 0;
        transition-property: opacity, transform, width;
        will-change: opacity, transform;
    }
    .reveal.from-up { transform: translateY(var(--reveal-offset, 50px)); }
    .reveal.from-down { transform: translateY(calc(-1 * var(--reveal-offset, 20px))); }
    .reveal.from-left { transform: translateX(calc(-1 * var(--reveal-offset, 50px))); }
    .reveal.from-right { transform: translateX(var(--reveal-offset, 50px)); }
    .reveal.from-scale { transform: scale(var(--reveal-scale, 0)); }
    .reveal.visible {
        opacity: 1;
        transform: none;
    }
"#;

/// Where an element comes from on its way in.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Entrance {
    Fade,
    Up(f64),
    Down(f64),
    Left(f64),
    Right(f64),
    Scale(f64),
}

impl Entrance {
    fn class(&self) -> &'static str {
        match self {
            Entrance::Fade => "from-fade",
            Entrance::Up(_) => "from-up",
            Entrance::Down(_) => "from-down",
            Entrance::Left(_) => "from-left",
            Entrance::Right(_) => "from-right",
            Entrance::Scale(_) => "from-scale",
        }
    }

    fn style(&self) -> String {
        match self {
            Entrance::Fade => String::new(),
            Entrance::Scale(from) => format!("--reveal-scale: {};", from),
            Entrance::Up(px) | Entrance::Down(px) | Entrance::Left(px) | Entrance::Right(px) => {
                format!("--reveal-offset: {}px;", px)
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(Entrance::Up(20.0))]
    pub entrance: Entrance,
    #[prop_or_default]
    pub transition: Transition,
    #[prop_or_else(ViewportOptions::default)]
    pub viewport: ViewportOptions,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), props.viewport.clone());

    let style = format!("{} {}", props.entrance.style(), props.transition.css());

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", props.entrance.class(), visible.then_some("visible"), props.class.clone())}
            style={style}
        >
            { props.children.clone() }
        </div>
    }
}
