//! HTML page for the dashboard
//!
//! A single self-contained document: inline CSS and script, the figure
//! embedded as JSON, and Plotly loaded from its CDN to draw the map.

use worldcup_finals::{win_counts, years, COUNTRY_PROMPT, YEAR_PROMPT};

use crate::callbacks::{COUNTRY_DROPDOWN, COUNTRY_OUTPUT, YEAR_DROPDOWN, YEAR_OUTPUT};
use crate::figure::Figure;

pub const PAGE_TITLE: &str = "FIFA World Cup Dashboard";

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Render the dashboard page with `figure` as its map
pub fn render_page(figure: &Figure) -> serde_json::Result<String> {
    let countries: Vec<&str> = win_counts().countries().collect();
    let year_options: Vec<String> = years().iter().map(|y| y.to_string()).collect();

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
    <script src="{plotly}"></script>
</head>
<body>
    <h1>FIFA World Cup Finals Dashboard</h1>
    <div id="map" class="map"></div>
    <script type="application/json" id="figure-data">{figure}</script>
    <hr>
    <div class="row">
        <div class="column">
            <h2>Countries That Have Won the World Cup</h2>
            {country_list}
        </div>
        <div class="column">
            <h2>View Wins by Country</h2>
            {country_selector}
        </div>
    </div>
    <hr>
    <div class="centered">
        <h2>View Final Result by Year</h2>
        {year_selector}
    </div>
    <script>{js}</script>
</body>
</html>"#,
        title = PAGE_TITLE,
        css = INLINE_CSS,
        plotly = PLOTLY_CDN,
        figure = embed_json(figure)?,
        country_list = render_list(&countries),
        country_selector = render_selector(
            "Select a Country:",
            COUNTRY_DROPDOWN,
            "text",
            "Select a country",
            countries.as_slice(),
            COUNTRY_OUTPUT,
            COUNTRY_PROMPT,
        ),
        year_selector = render_selector(
            "Select a Year:",
            YEAR_DROPDOWN,
            "number",
            "Select a year",
            year_options.as_slice(),
            YEAR_OUTPUT,
            YEAR_PROMPT,
        ),
        js = INLINE_JS,
    ))
}

fn render_list(items: &[&str]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!("<ul>{items}</ul>")
}

fn render_selector<S: AsRef<str>>(
    label: &str,
    input_id: &str,
    kind: &str,
    placeholder: &str,
    options: &[S],
    output_id: &str,
    prompt: &str,
) -> String {
    let options: String = options
        .iter()
        .map(|o| {
            let o = escape_html(o.as_ref());
            format!(r#"<option value="{o}">{o}</option>"#)
        })
        .collect();

    format!(
        r#"<label for="{input_id}">{label}</label>
            <select id="{input_id}" data-callback data-kind="{kind}" data-output="{output_id}">
                <option value="">{placeholder}</option>
                {options}
            </select>
            <div id="{output_id}" class="output">{prompt}</div>"#,
        label = escape_html(label),
        placeholder = escape_html(placeholder),
        prompt = escape_html(prompt),
    )
}

/// JSON for an inline `<script>` block; `<` is escaped so the payload can
/// never close the element.
fn embed_json<T: serde::Serialize>(value: &T) -> serde_json::Result<String> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const INLINE_CSS: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif; margin: 0 2rem 2rem; color: #222; }
h1 { text-align: center; }
.map { width: 100%; min-height: 450px; }
.row { display: flex; gap: 5%; }
.column { width: 45%; vertical-align: top; }
.centered { width: 50%; margin: auto; }
label { display: block; margin-bottom: 0.5rem; }
select { width: 100%; padding: 0.4rem; font-size: 1rem; }
.output { margin-top: 20px; }
"#;

const INLINE_JS: &str = r#"
(function () {
    var figure = JSON.parse(document.getElementById('figure-data').textContent);
    var map = document.getElementById('map');
    if (window.Plotly) {
        Plotly.newPlot(map, figure.data, figure.layout, { responsive: true });
    } else {
        map.textContent = 'Map unavailable: the charting library could not be loaded.';
    }

    function dispatch(input, value) {
        return fetch('/api/callback', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ input: input, value: value })
        }).then(function (res) {
            return res.json().then(function (body) {
                if (!res.ok) { throw new Error(body.error || res.statusText); }
                return body;
            });
        });
    }

    document.querySelectorAll('select[data-callback]').forEach(function (select) {
        select.addEventListener('change', function () {
            var raw = select.value;
            var value = raw === '' ? null : (select.dataset.kind === 'number' ? Number(raw) : raw);
            var region = document.getElementById(select.dataset.output);
            dispatch(select.id, value).then(function (body) {
                if (select.value !== raw) { return; }
                document.getElementById(body.output).textContent = body.content;
            }).catch(function (err) {
                console.error(err);
                if (select.value !== raw) { return; }
                region.textContent = 'Something went wrong: ' + err.message;
            });
        });
    });
})();
"#;
