use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
body {
  margin: 0;
  min-height: 100vh;
  font-family: system-ui, sans-serif;
  background: linear-gradient(135deg, #c084fc, #ec4899, #ef4444);
  padding: 1rem;
  box-sizing: border-box;
}
main { max-width: 42rem; margin: 0 auto; display: grid; gap: 1.5rem; }
.card { background: #fff; border-radius: 0.75rem; padding: 1.5rem; text-align: center; box-shadow: 0 4px 12px rgba(0,0,0,.15); }
.title { font-size: 1.9rem; font-weight: 700; color: #9333ea; margin: 0 0 1rem; }
.muted { color: #6b7280; font-size: 0.9rem; }
.btn { border: 1px solid #d1d5db; background: #fff; border-radius: 0.5rem; padding: 0.6rem 1rem; cursor: pointer; width: 100%; }
.btn-start { width: auto; border: none; color: #fff; font-weight: 700; font-size: 1.25rem; border-radius: 999px; padding: 1rem 2rem; background: linear-gradient(90deg, #a855f7, #ec4899); }
.countdown { font-size: 6rem; font-weight: 700; color: #9333ea; }
.comment { display: flex; align-items: center; gap: 1rem; text-align: left; padding: 1rem; border-radius: 0.75rem; background: linear-gradient(90deg, #f3e8ff, #fce7f3); }
.comment.winner { border: 4px solid #facc15; background: linear-gradient(90deg, #fef9c3, #ffedd5); }
.avatar { position: relative; width: 3rem; height: 3rem; border-radius: 999px; overflow: hidden; background: #e5e7eb; display: grid; place-items: center; font-weight: 700; flex-shrink: 0; }
.avatar.large { width: 5rem; height: 5rem; font-size: 1.5rem; }
.avatar img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
.winner-banner { font-size: 2.25rem; font-weight: 700; color: #eab308; }
.confetti { position: fixed; inset: 0; pointer-events: none; overflow: hidden; z-index: 50; }
.confetti span { position: absolute; top: -12px; width: 10px; height: 10px; animation: confetti-fall 4s linear forwards; }
@keyframes confetti-fall {
  0% { transform: translateY(0) rotate(0deg); opacity: 1; }
  100% { transform: translateY(100vh) rotate(720deg); opacity: 0; }
}
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="icon" type="image/svg+xml" href="/placeholder.svg";
                style { (PreEscaped(STYLES)) }
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
                (content)
            }
        }
    }
}
