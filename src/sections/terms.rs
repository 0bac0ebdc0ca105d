use yew::prelude::*;

use crate::components::reveal::{Entrance, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::motion::timeline::{Easing, Stagger, Transition};

struct Term {
    title: &'static str,
    content: &'static [&'static str],
}

const TERMS: &[Term] = &[
    Term {
        title: "General Terms",
        content: &[
            "Please read these terms and conditions carefully before using our platform.",
            "By accessing or using our platform, you agree to be bound by these terms.",
            "We reserve the right to modify these terms at any time without prior notice.",
        ],
    },
    Term {
        title: "User Rights & Responsibilities",
        content: &[
            "Users must agree to our terms of service before participating in any transactions.",
            "You are responsible for maintaining the confidentiality of your account.",
            "Users must be at least 18 years old to use our platform.",
        ],
    },
    Term {
        title: "NFT Trading Rules",
        content: &[
            "All NFT transactions are final and irreversible.",
            "Users must verify all transaction details before confirmation.",
            "Platform fees apply to all successful transactions.",
        ],
    },
    Term {
        title: "Privacy & Security",
        content: &[
            "We prioritize the security of your personal information.",
            "User data is encrypted and stored securely.",
            "We never share your private keys or wallet information.",
        ],
    },
];

/// Clicking the open section closes it; clicking another one switches.
pub fn toggle_section(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// 1-based, zero-padded to two digits.
pub fn ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[function_component(Terms)]
pub fn terms() -> Html {
    let expanded = use_state(|| None::<usize>);
    let rows = Stagger::new(0.0, 0.1);
    let lines = Stagger::new(0.0, 0.1);

    html! {
        <section class="terms" id="terms">
            <style>
                {r#"
                    .terms {
                        position: relative;
                        padding: 5rem 1rem;
                        background: #05171a;
                        overflow: hidden;
                    }
                    .terms-inner {
                        max-width: 64rem;
                        margin: 0 auto;
                    }
                    .terms-list {
                        display: grid;
                        gap: 1.5rem;
                    }
                    .term {
                        border: 1px solid #72d2f54f;
                        border-radius: 1rem;
                        background: #05171a;
                        transition: border-color 0.3s;
                    }
                    .term:hover { border-color: #72d2f5; }
                    .term-toggle {
                        padding: 1.5rem;
                        cursor: pointer;
                    }
                    .term-header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .term-header h3 {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #d1d5db;
                    }
                    .term-number { color: #72d3f5; }
                    .term-chevron {
                        width: 1.5rem;
                        height: 1.5rem;
                        color: #72d3f5;
                        transition: transform 0.3s;
                    }
                    .term.open .term-chevron { transform: rotate(180deg); }
                    .term-body {
                        display: grid;
                        grid-template-rows: 0fr;
                        opacity: 0;
                        overflow: hidden;
                        transition: grid-template-rows 0.3s, opacity 0.3s;
                    }
                    .term.open .term-body {
                        grid-template-rows: 1fr;
                        opacity: 1;
                    }
                    .term-lines {
                        min-height: 0;
                        padding-top: 1rem;
                    }
                    .term-lines p {
                        color: rgba(165, 247, 255, 0.7);
                        padding-left: 2rem;
                        margin-bottom: 0.5rem;
                        border-left: 1px solid rgba(114, 211, 245, 0.3);
                        animation: term-line 0.3s ease-out both;
                    }
                    @keyframes term-line {
                        from { opacity: 0; transform: translateX(-20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                "#}
            </style>
            <Reveal class="terms-inner" entrance={Entrance::Up(20.0)} transition={Transition::new(0.6, Easing::EaseOut)}>
                <SectionHeading title="Terms & Conditions" bar_width={250.0} />
                <div class="terms-list">
                    { for TERMS.iter().enumerate().map(|(index, term)| {
                        let is_open = *expanded == Some(index);
                        let onclick = {
                            let expanded = expanded.clone();
                            Callback::from(move |_: MouseEvent| {
                                expanded.set(toggle_section(*expanded, index));
                            })
                        };
                        html! {
                            <Reveal
                                class={classes!("term", is_open.then_some("open"))}
                                entrance={Entrance::Left(50.0)}
                                transition={rows.apply(index, Transition::default())}
                            >
                                <div class="term-toggle" {onclick}>
                                    <div class="term-header">
                                        <h3>
                                            <span class="term-number">{ ordinal(index) }</span>
                                            { term.title }
                                        </h3>
                                        <svg class="term-chevron" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
                                        </svg>
                                    </div>
                                    <div class="term-body">
                                        <div class="term-lines">
                                            {
                                                if is_open {
                                                    html! {
                                                        <>
                                                            { for term.content.iter().enumerate().map(|(line, text)| html! {
                                                                <p style={format!("animation-delay: {}s;", lines.delay_for(line))}>{ *text }</p>
                                                            }) }
                                                        </>
                                                    }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                        </div>
                                    </div>
                                </div>
                            </Reveal>
                        }
                    }) }
                </div>
            </Reveal>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_one_section_is_open() {
        assert_eq!(toggle_section(None, 2), Some(2));
        assert_eq!(toggle_section(Some(2), 1), Some(1));
        assert_eq!(toggle_section(Some(1), 1), None);
    }

    #[test]
    fn ordinals_are_zero_padded() {
        assert_eq!(ordinal(0), "01");
        assert_eq!(ordinal(9), "10");
    }
}
