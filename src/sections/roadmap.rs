use yew::prelude::*;

use crate::components::reveal::{Entrance, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::motion::hooks::{use_scroll_progress, use_spotlight};
use crate::motion::reveal::ViewportOptions;
use crate::motion::scroll::ScrollWindow;
use crate::motion::spring::SpringConfig;
use crate::motion::timeline::{Easing, Transition};

#[derive(Clone, PartialEq)]
pub struct Milestone {
    pub quarter: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

const MILESTONES: &[Milestone] = &[
    Milestone {
        quarter: "Q1 2024",
        title: "Platform Launch",
        description: "Initial release of the NFT marketplace with core features including minting, buying, and selling NFTs.",
        icon: "🚀",
    },
    Milestone {
        quarter: "Q2 2024",
        title: "Community Features",
        description: "Introduction of social features, artist tools, and enhanced community engagement capabilities.",
        icon: "👥",
    },
    Milestone {
        quarter: "Q3 2024",
        title: "Mobile App Release",
        description: "Launch of our mobile application for iOS and Android platforms.",
        icon: "📱",
    },
    Milestone {
        quarter: "Q4 2024",
        title: "Marketplace Expansion",
        description: "Integration of multiple chains and introduction of advanced trading features.",
        icon: "🌐",
    },
];

/// Even milestones sit left of the line and slide in from the left.
pub fn entrance_for(index: usize) -> Entrance {
    if index % 2 == 0 {
        Entrance::Left(50.0)
    } else {
        Entrance::Right(50.0)
    }
}

#[derive(Properties, PartialEq)]
struct MilestoneCardProps {
    milestone: Milestone,
    index: usize,
}

#[function_component(MilestoneCard)]
fn milestone_card(props: &MilestoneCardProps) -> Html {
    let card = use_node_ref();
    use_spotlight(card.clone());

    let milestone = &props.milestone;
    let side = if props.index % 2 == 0 { "left" } else { "right" };

    html! {
        <div class={classes!("milestone", side)}>
            <div class="milestone-ghost">{ milestone.quarter }</div>
            <div class="milestone-node">
                <Reveal entrance={Entrance::Scale(0.0)} transition={Transition::default().delayed(0.2)}>
                    <div class="node-ring"><div class="node-core"></div></div>
                </Reveal>
            </div>
            <Reveal
                class="milestone-card"
                entrance={entrance_for(props.index)}
                transition={Transition::new(0.5, Easing::EaseOut)}
                viewport={ViewportOptions::inset("-100px")}
            >
                <div ref={card} class="milestone-body spotlight-host">
                    <div class="milestone-badge">{ milestone.quarter }</div>
                    <div class="milestone-icon">{ milestone.icon }</div>
                    <h3>{ milestone.title }</h3>
                    <p>{ milestone.description }</p>
                    <div class="spotlight"></div>
                </div>
            </Reveal>
            <div class="milestone-spacer"></div>
        </div>
    }
}

#[function_component(Roadmap)]
pub fn roadmap() -> Html {
    let section = use_node_ref();
    let window = use_memo(
        |_| ScrollWindow::from_offsets("start end", "end end", ScrollWindow::ENTER_TO_SETTLE),
        (),
    );
    let fill = use_scroll_progress(section.clone(), *window, Some(SpringConfig::default()));

    html! {
        <section class="roadmap" id="roadmap" ref={section}>
            <style>
                {r#"
                    .roadmap {
                        padding: 5rem 1rem;
                        background: #05171a;
                    }
                    .roadmap-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .timeline {
                        position: relative;
                    }
                    .timeline-track {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        left: 50%;
                        width: 4px;
                        background: rgba(114, 211, 245, 0.2);
                    }
                    .timeline-fill {
                        width: 100%;
                        height: 100%;
                        background: #72d3f5;
                        transform-origin: top;
                    }
                    .milestones {
                        display: flex;
                        flex-direction: column;
                        gap: 4rem;
                    }
                    .milestone {
                        position: relative;
                        display: flex;
                        gap: 2rem;
                    }
                    .milestone.right { flex-direction: row-reverse; }
                    .milestone-ghost {
                        position: absolute;
                        top: 2rem;
                        left: calc(50% - 160px);
                        z-index: -1;
                        font-size: 6rem;
                        font-weight: 700;
                        color: #72d3f5;
                        opacity: 0.2;
                    }
                    .milestone-node {
                        position: relative;
                        z-index: 10;
                    }
                    .node-ring {
                        width: 3rem;
                        height: 3rem;
                        padding: 2px;
                        border-radius: 50%;
                        background: linear-gradient(to right, #72d3f5, #a5f7ff);
                    }
                    .node-core {
                        width: 100%;
                        height: 100%;
                        border-radius: 50%;
                        background: #05171a;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .node-core::after {
                        content: '';
                        width: 1.5rem;
                        height: 1.5rem;
                        border-radius: 50%;
                        background: #72d3f5;
                        animation: node-pulse 2s ease-in-out infinite;
                    }
                    @keyframes node-pulse {
                        0%, 100% { transform: scale(1); opacity: 0.5; }
                        50% { transform: scale(1.2); opacity: 1; }
                    }
                    .milestone-card, .milestone-spacer {
                        flex: 1;
                        width: calc(50% - 3rem);
                    }
                    .milestone-body {
                        position: relative;
                        height: 100%;
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(114, 211, 245, 0.3);
                        background: #05171a;
                        transition: transform 0.3s cubic-bezier(0.34, 1.5, 0.64, 1), border-color 0.3s;
                    }
                    .milestone-body:hover {
                        transform: scale(1.02);
                        border-color: #a5f7ff;
                    }
                    .milestone-badge {
                        display: none;
                        margin-bottom: 1rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: rgba(114, 211, 245, 0.2);
                        color: #72d3f5;
                        font-weight: 700;
                    }
                    .milestone-icon {
                        font-size: 1.875rem;
                        margin-bottom: 1rem;
                    }
                    .milestone-body h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #72d3f5;
                        margin-bottom: 0.75rem;
                    }
                    .milestone-body p { color: rgba(114, 211, 245, 0.7); }
                    .milestone-body .spotlight {
                        border-radius: 1rem;
                        background: radial-gradient(circle at var(--mouse-x) var(--mouse-y), rgba(114, 211, 245, 0.1) 0%, transparent 80%);
                    }
                    @media (max-width: 768px) {
                        .timeline-track { left: 1rem; }
                        .milestone, .milestone.right { flex-direction: column; gap: 1rem; margin-left: 1rem; }
                        .milestone-ghost, .milestone-spacer { display: none; }
                        .milestone-card { width: auto; margin-left: 2rem; }
                        .milestone-badge { display: inline-block; }
                    }
                "#}
            </style>
            <div class="roadmap-inner">
                <SectionHeading title="Roadmap" />
                <div class="timeline">
                    <div class="timeline-track">
                        <div class="timeline-fill" style={format!("transform: scaleY({:.4});", fill)}></div>
                    </div>
                    <div class="milestones">
                        { for MILESTONES.iter().enumerate().map(|(index, milestone)| html! {
                            <MilestoneCard milestone={milestone.clone()} {index} />
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestones_alternate_sides() {
        assert_eq!(entrance_for(0), Entrance::Left(50.0));
        assert_eq!(entrance_for(1), Entrance::Right(50.0));
        assert_eq!(entrance_for(2), Entrance::Left(50.0));
    }
}
