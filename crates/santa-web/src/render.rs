//! HTML for the single page.

use santa_core::{Assessment, Portrait, Tone};

use crate::config::Variant;

pub const TITLE: &str = "Happy Christmas Advisory 🎄";
pub const TAGLINE: &str = "Buro Happold | Advisory AI‑assisted Christmas scoping.";
pub const INTRO: &str = "Santa has been seconded into the Advisory team this year. \
He’s brought an AI model that scores how deliverable your wish really is.";
pub const PROMPT: &str = "What would you like for Christmas (Advisory edition)?";
pub const PLACEHOLDER: &str = "e.g. An agreed scope and no change requests";
pub const HINT: &str =
    "Hint: the AI likes clear scope, roadmaps and funding more than bikes and bonuses.";
pub const BUTTON: &str = "Ask Santa & the AI model";
pub const ANALYSIS_HEADING: &str = "🤖 Advisory AI feasibility analysis";

/// Everything needed to draw the page once.
pub struct Page<'a> {
    pub variant: Variant,
    /// `data:` URI of the background image.
    pub background: &'a str,
    pub portrait: Portrait,
    pub result: Option<&'a Assessment>,
}

pub fn render_page(page: &Page<'_>) -> String {
    let mut html = String::with_capacity(4096 + page.background.len());

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Advisory Christmas</title>\n");
    html.push_str(
        "<link rel=\"icon\" href=\"data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 \
         viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>🎄</text></svg>\">\n",
    );
    push_style(&mut html, page.background);
    html.push_str("</head>\n<body>\n<main class=\"app\">\n");

    html.push_str(&format!("<h1>{}</h1>\n", escape_html(TITLE)));
    html.push_str(&format!("<p class=\"tagline\">{}</p>\n", escape_html(TAGLINE)));
    html.push_str(&format!("<p>{}</p>\n", escape_html(INTRO)));

    html.push_str(&format!(
        "<figure class=\"santa-frame\"><img src=\"/assets/{}\" alt=\"Santa\">\
         <figcaption>{}</figcaption></figure>\n",
        escape_html(page.portrait.image),
        escape_html(page.portrait.caption),
    ));

    push_form(&mut html, page.result.map(|r| r.wish.as_str()).unwrap_or(""));

    if let Some(result) = page.result {
        push_results(&mut html, page.variant, result);
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn push_style(html: &mut String, background: &str) {
    html.push_str(&format!(
        r#"<style>
body {{
    margin: 0;
    font-family: "Source Sans Pro", sans-serif;
}}
.app {{
    min-height: 100vh;
    padding: 3rem max(1rem, calc(50vw - 22rem));
    background-image: url("{background}");
    background-size: cover;
    background-position: center;
    background-repeat: no-repeat;
    color: #111827;
}}
.santa-frame {{ margin: 1rem 0; }}
.santa-frame img {{
    width: 100%;
    border-radius: 18px;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.7);
    border: 3px solid rgba(15, 23, 42, 0.7);
}}
.tagline {{ font-size: 0.95rem; opacity: 0.9; margin-bottom: 0.5rem; }}
.hint {{ font-size: 0.8rem; opacity: 0.85; margin-top: 0.5rem; }}
.banner {{ padding: 1rem; border-radius: 0.5rem; margin: 1rem 0; }}
.banner.success {{ background: rgba(33, 195, 84, 0.2); }}
.banner.warning {{ background: rgba(255, 189, 69, 0.25); }}
.banner.error {{ background: rgba(255, 43, 43, 0.2); }}
.banner.info {{ background: rgba(28, 131, 225, 0.2); }}
.columns {{ display: flex; gap: 2rem; }}
.columns > div {{ flex: 1; }}
.metric-label {{ font-size: 0.875rem; }}
.metric-value {{ font-size: 2.25rem; }}
</style>
"#
    ));
}

fn push_form(html: &mut String, wish: &str) {
    html.push_str(&format!("<h3>{}</h3>\n", escape_html(PROMPT)));
    html.push_str(&format!(
        "<form method=\"post\" action=\"/\">\n\
         <label for=\"wish\">Type your wish here:</label>\n\
         <input type=\"text\" id=\"wish\" name=\"wish\" value=\"{}\" placeholder=\"{}\">\n\
         <p class=\"hint\">{}</p>\n\
         <button type=\"submit\">{}</button>\n\
         </form>\n",
        escape_html(wish),
        escape_html(PLACEHOLDER),
        escape_html(HINT),
        escape_html(BUTTON),
    ));
}

fn push_results(html: &mut String, variant: Variant, result: &Assessment) {
    push_banner(html, result.tier.message_tone(), &result.message);

    match variant {
        Variant::Plain => push_metric(html, result.score),
        Variant::Analysis => {
            let f = &result.features;
            html.push_str(&format!("<h3>{}</h3>\n", escape_html(ANALYSIS_HEADING)));
            html.push_str("<div class=\"columns\">\n<div>\n");
            push_metric(html, result.score);
            html.push_str(&format!("<p>- Words: <strong>{}</strong></p>\n", f.word_count));
            html.push_str(&format!(
                "<p>- Buzzwords: <strong>{}</strong></p>\n",
                f.buzzword_count
            ));
            html.push_str("</div>\n<div>\n");
            html.push_str(&format!(
                "<p>- Fun words: <strong>{}</strong></p>\n",
                f.fun_word_count
            ));
            html.push_str(&format!(
                "<p>- Avg. word length: <strong>{:.1}</strong></p>\n",
                f.avg_word_length
            ));
            push_banner(html, result.tier.commentary_tone(), result.tier.commentary());
            html.push_str("</div>\n</div>\n");
        }
    }
}

fn push_banner(html: &mut String, tone: Tone, text: &str) {
    html.push_str(&format!(
        "<div class=\"banner {}\" role=\"status\">{}</div>\n",
        tone.as_str(),
        escape_html(text)
    ));
}

fn push_metric(html: &mut String, score: f64) {
    html.push_str(&format!(
        "<div class=\"metric\"><div class=\"metric-label\">Feasibility score</div>\
         <div class=\"metric-value\">{score:.1} / 100</div></div>\n"
    ));
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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
