// templates/pages/home.rs

use crate::lottery::LotterySnapshot;
use crate::templates::{components::card, desktop_layout, lottery_root};
use maud::{html, Markup, PreEscaped};

// The file never leaves the browser as a file: its text is posted as the
// request body and the returned partial replaces #lottery-root.
const UPLOAD_SCRIPT: &str = r#"
document.getElementById('csv-upload').addEventListener('change', async (event) => {
  const file = event.target.files && event.target.files[0];
  if (!file) return;
  const text = await file.text();
  const resp = await fetch('/upload', {
    method: 'POST',
    headers: { 'Content-Type': 'text/csv; charset=utf-8' },
    body: text,
  });
  const html = await resp.text();
  if (!resp.ok) { alert('Upload failed'); return; }
  const root = document.getElementById('lottery-root');
  root.outerHTML = html;
  htmx.process(document.getElementById('lottery-root'));
  event.target.value = '';
});
"#;

pub fn home_page(snapshot: &LotterySnapshot) -> Markup {
    desktop_layout(
        "Instagram Comment Lottery",
        html! {
            main {
                (card(html! {
                    h1 class="title" { "🎉 Instagram Comment Lottery 🎉" }
                    label for="csv-upload" { "Upload CSV File" }
                    input id="csv-upload" type="file" accept=".csv" hidden;
                    button
                        class="btn"
                        type="button"
                        onclick="document.getElementById('csv-upload').click()"
                    { "⬆ Choose CSV File" }
                }))

                (lottery_root(snapshot))
            }
            script { (PreEscaped(UPLOAD_SCRIPT)) }
        },
    )
}
