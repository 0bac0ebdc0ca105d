use web_sys::js_sys::Math;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnimatedButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub class: Classes,
}

/// Pill button with a sweeping gradient, pulsing glow and a few sparks.
#[function_component(AnimatedButton)]
pub fn animated_button(props: &AnimatedButtonProps) -> Html {
    let sparks = use_state(|| (0..3).map(|_| (Math::random() - 0.5) * 20.0).collect::<Vec<f64>>());

    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(cb) = &onclick {
                cb.emit(e);
            }
        })
    };

    html! {
        <button class={classes!("animated-button", props.class.clone())} {onclick}>
            <style>
                {r#"
                    .animated-button {
                        position: relative;
                        padding: 0.75rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        background: transparent;
                        cursor: pointer;
                        transition: transform 0.2s cubic-bezier(0.34, 1.5, 0.64, 1);
                    }
                    .animated-button:hover { transform: scale(1.05); }
                    .animated-button:active { transform: scale(0.95); }
                    .animated-button .sweep {
                        position: absolute;
                        inset: 0;
                        border-radius: inherit;
                        overflow: hidden;
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .animated-button .sweep::before {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(90deg, #72d3f5, #a5f7ff, #72d3f5);
                        animation: button-sweep 3s linear infinite;
                    }
                    .animated-button:hover .sweep { opacity: 1; }
                    .animated-button .base {
                        position: absolute;
                        inset: 0;
                        border-radius: inherit;
                        background: #022632;
                        transition: opacity 0.3s;
                    }
                    .animated-button:hover .base { opacity: 0.9; }
                    .animated-button .glow {
                        position: absolute;
                        inset: -4px;
                        border-radius: inherit;
                        background: linear-gradient(90deg, #72d3f5, #a5f7ff);
                        filter: blur(6px);
                        opacity: 0.3;
                        z-index: -1;
                        animation: button-glow 2s ease-in-out infinite;
                        transition: opacity 0.3s;
                    }
                    .animated-button:hover .glow { opacity: 1; }
                    .animated-button .label {
                        position: relative;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #fff;
                        font-weight: 600;
                    }
                    .animated-button .arrow {
                        width: 1.25rem;
                        height: 1.25rem;
                        animation: button-arrow 0.6s cubic-bezier(0.34, 1.5, 0.64, 1) both;
                    }
                    .animated-button .spark {
                        position: absolute;
                        left: 50%;
                        top: 50%;
                        width: 4px;
                        height: 4px;
                        border-radius: 50%;
                        background: #72d3f5;
                        animation: button-spark 1s ease-out infinite;
                    }
                    @keyframes button-sweep {
                        from { transform: translateX(-100%); }
                        to { transform: translateX(100%); }
                    }
                    @keyframes button-glow {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.05); }
                    }
                    @keyframes button-arrow {
                        from { transform: translateX(-5px); }
                        to { transform: translateX(0); }
                    }
                    @keyframes button-spark {
                        0% { transform: translate(0, 0) scale(0); }
                        50% { transform: translate(calc(var(--spark-x) / 2), calc(var(--spark-y) / 2)) scale(1); }
                        100% { transform: translate(var(--spark-x), var(--spark-y)) scale(0); }
                    }
                "#}
            </style>
            <div class="sweep"></div>
            <div class="base"></div>
            <div class="glow"></div>
            <div class="label">
                <span>{ props.children.clone() }</span>
                <svg class="arrow" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 7l5 5m0 0l-5 5m5-5H6" />
                </svg>
            </div>
            { for sparks.iter().enumerate().map(|(index, dy)| html! {
                <div
                    class="spark"
                    style={format!(
                        "--spark-x: {}px; --spark-y: {:.1}px; animation-delay: {:.1}s;",
                        (index as i32 - 1) * 30, dy, index as f64 * 0.2
                    )}
                />
            }) }
        </button>
    }
}
