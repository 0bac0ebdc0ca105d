use yew::prelude::*;

use crate::components::animated_button::AnimatedButton;
use crate::components::particles::{Drift, Particles};
use crate::motion::timeline::{Easing, Stagger, Transition};

const TITLE: &str = "Discover Unique Digital Art";
const SUBTITLE: &str = "Explore, collect, and trade extraordinary NFTs on our platform";

const WORDS: Stagger = Stagger::new(0.3, 0.1);
const LETTER_STEP: f64 = 0.03;
const SUBTITLE_CHARS: Stagger = Stagger::new(1.0, 0.02);

/// A single animated glyph of the hero copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub text: String,
    pub delay: f64,
    pub hue: u32,
}

/// Title letters grouped by word. Words stagger in, and letters stagger
/// within their word; hue shifts 5° per letter.
pub fn title_glyphs(title: &str) -> Vec<Vec<Glyph>> {
    title
        .split_whitespace()
        .enumerate()
        .map(|(word_index, word)| {
            word.chars()
                .enumerate()
                .map(|(letter_index, letter)| Glyph {
                    text: letter.to_string(),
                    delay: WORDS.delay_for(word_index) + letter_index as f64 * LETTER_STEP,
                    hue: letter_index as u32 * 5,
                })
                .collect()
        })
        .collect()
}

/// Subtitle characters. Spaces become non-breaking so inline-block spans
/// keep their width.
pub fn subtitle_glyphs(subtitle: &str) -> Vec<Glyph> {
    subtitle
        .chars()
        .enumerate()
        .map(|(index, ch)| Glyph {
            text: if ch == ' ' { '\u{00A0}'.to_string() } else { ch.to_string() },
            delay: SUBTITLE_CHARS.delay_for(index),
            hue: 0,
        })
        .collect()
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let title = use_memo(|_| title_glyphs(TITLE), ());
    let subtitle = use_memo(|_| subtitle_glyphs(SUBTITLE), ());

    let word_in = Transition::new(0.5, Easing::CubicBezier(0.2, 0.65, 0.3, 0.9));
    let char_in = Transition::new(0.3, Easing::EaseOut);
    let cta_in = Transition::new(0.5, Easing::EaseOut).delayed(2.0);

    html! {
        <section class="hero" id="home">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 0 1rem;
                        overflow: hidden;
                        background: linear-gradient(to bottom, #05171a, #022632);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        text-align: center;
                    }
                    .hero-title {
                        font-size: clamp(2.25rem, 7vw, 90px);
                        font-weight: 700;
                        text-transform: uppercase;
                        margin-bottom: 1.5rem;
                    }
                    .hero-word {
                        display: inline-block;
                        margin-right: 0.2em;
                    }
                    .hero-letter, .hero-char, .hero-cta {
                        display: inline-block;
                    }
                    .hero-letter { text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.2); }
                    .hero-subtitle {
                        font-size: clamp(1.1rem, 2vw, 1.5rem);
                        color: #a5f7ff;
                        font-weight: 500;
                        margin-bottom: 2rem;
                    }
                    @keyframes rise-50 {
                        from { opacity: 0; transform: translateY(50px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes rise-20 {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-orb {
                        position: absolute;
                        width: 10rem;
                        height: 10rem;
                        border-radius: 50%;
                        filter: blur(64px);
                        animation: orb-pulse 4s ease-in-out infinite;
                    }
                    .hero-orb.top-left {
                        top: -5rem;
                        left: -5rem;
                        background: linear-gradient(to right, rgba(114, 211, 245, 0.3), transparent);
                    }
                    .hero-orb.bottom-right {
                        bottom: -5rem;
                        right: -5rem;
                        background: linear-gradient(to left, rgba(165, 247, 255, 0.3), transparent);
                        animation-delay: 2s;
                    }
                    @keyframes orb-pulse {
                        0%, 100% { transform: scale(1); opacity: 0.3; }
                        50% { transform: scale(1.2); opacity: 0.5; }
                    }
                "#}
            </style>
            <Particles count={20} motion={Drift::RISE} />
            <div class="hero-content">
                <h1 class="hero-title">
                    { for title.iter().map(|word| html! {
                        <span class="hero-word">
                            { for word.iter().map(|g| html! {
                                <span
                                    class="hero-letter"
                                    style={format!(
                                        "color: hsl({}, 70%, 60%); {}",
                                        g.hue,
                                        word_in.delayed(g.delay).animation_css("rise-50")
                                    )}
                                >
                                    { g.text.clone() }
                                </span>
                            }) }
                        </span>
                    }) }
                </h1>
                <p class="hero-subtitle">
                    { for subtitle.iter().map(|g| html! {
                        <span class="hero-char" style={char_in.delayed(g.delay).animation_css("rise-20")}>
                            { g.text.clone() }
                        </span>
                    }) }
                </p>
                <div class="hero-cta" style={cta_in.animation_css("rise-20")}>
                    <AnimatedButton>{"Get Started"}</AnimatedButton>
                </div>
                <div class="hero-orb top-left"></div>
                <div class="hero-orb bottom-right"></div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_staggers_words_then_letters() {
        let words = title_glyphs(TITLE);
        assert_eq!(words.len(), 4);

        let second_word = &words[1];
        assert_eq!(second_word[0].text, "U");
        assert!((second_word[0].delay - 0.4).abs() < 1e-9);
        assert!((second_word[2].delay - 0.46).abs() < 1e-9);
        assert_eq!(second_word[2].hue, 10);
    }

    #[test]
    fn subtitle_keeps_spaces_visible() {
        let glyphs = subtitle_glyphs("on our");
        assert_eq!(glyphs[2].text, "\u{00A0}");
        assert!((glyphs[0].delay - 1.0).abs() < 1e-9);
        assert!((glyphs[5].delay - 1.1).abs() < 1e-9);
    }
}
