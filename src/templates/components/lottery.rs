// templates/components/lottery.rs

use crate::domain::CommentRecord;
use crate::lottery::{LotterySnapshot, Phase};
use crate::templates::components::avatar;
use maud::{html, Markup};

const COUNTDOWN_POLL: &str = "every 100ms";
const CELEBRATION_POLL: &str = "every 500ms";

const CONFETTI_COLORS: [&str; 7] = [
    "#facc15", "#f472b6", "#60a5fa", "#4ade80", "#c084fc", "#f87171", "#fdba74",
];

/// Everything under the upload card. Replaced wholesale after an upload.
pub fn lottery_root(snapshot: &LotterySnapshot) -> Markup {
    html! {
        div id="lottery-root" {
            @if snapshot.record_count > 0 {
                p class="muted" id="record-count" {
                    "📊 Loaded " (snapshot.record_count) " comments"
                }
                (lottery_panel(snapshot))
            }
        }
    }
}

/// The lottery card, polled while the countdown runs or confetti is up.
pub fn lottery_panel(snapshot: &LotterySnapshot) -> Markup {
    let poll = match snapshot.phase {
        Phase::Countdown => Some(COUNTDOWN_POLL),
        Phase::Revealed if snapshot.celebrating => Some(CELEBRATION_POLL),
        _ => None,
    };

    html! {
        section
            class="card"
            id="lottery-panel"
            data-phase=(phase_name(snapshot.phase))
            hx-get=[poll.map(|_| "/lottery/panel")]
            hx-trigger=[poll]
            hx-swap=[poll.map(|_| "outerHTML")]
        {
            @match snapshot.phase {
                Phase::Idle => (start_button()),
                Phase::Countdown => {
                    div class="countdown" { (snapshot.ticks_remaining) }
                    @if let Some(preview) = &snapshot.preview {
                        (comment_card(preview))
                    }
                },
                Phase::Revealed => {
                    @if let Some(winner) = &snapshot.winner {
                        (winner_card(winner))
                    }
                    button
                        class="btn"
                        hx-post="/lottery/reset"
                        hx-target="#lottery-panel"
                        hx-swap="outerHTML"
                    { "Run Another Lottery" }
                    @if snapshot.celebrating {
                        (confetti())
                    }
                },
            }
        }
    }
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::Countdown => "countdown",
        Phase::Revealed => "revealed",
    }
}

fn start_button() -> Markup {
    html! {
        button
            class="btn-start"
            hx-post="/lottery/start"
            hx-target="#lottery-panel"
            hx-swap="outerHTML"
        { "✨ Start Lottery!" }
    }
}

/// Flickering preview during the countdown.
pub fn comment_card(record: &CommentRecord) -> Markup {
    html! {
        div class="comment" {
            (avatar(record, false))
            div {
                strong { "@" (record.username()) }
                div class="muted" { (record.text()) }
            }
        }
    }
}

pub fn winner_card(record: &CommentRecord) -> Markup {
    html! {
        div class="winner-banner" { "🏆 WINNER! 🏆" }
        div class="comment winner" id="winner" {
            (avatar(record, true))
            div {
                div style="font-size: 1.75rem; font-weight: 700; color: #7e22ce;" {
                    "@" (record.username())
                }
                div style="margin-top: 0.5rem;" { "\"" (record.text()) "\"" }
                div class="muted" style="margin-top: 0.5rem;" {
                    "Comment ID: " (record.comment_id())
                }
            }
        }
    }
}

fn confetti() -> Markup {
    html! {
        div class="confetti" aria-hidden="true" {
            @for i in 0..60usize {
                span style={
                    "left: " ((i * 37) % 100) "%; "
                    "background: " (CONFETTI_COLORS[i % CONFETTI_COLORS.len()]) "; "
                    "animation-delay: " ((i % 10) * 200) "ms; "
                    "border-radius: " (if i % 2 == 0 { "50%" } else { "0" }) ";"
                } {}
            }
        }
    }
}
