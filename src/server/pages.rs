//! Static marketing pages and the sitemap. Pure content; the only logic is
//! banding example scores with [`ScoreBand`] and splicing pages into the
//! shared layout.

use super::handlers::AppState;
use crate::analysis::ScoreBand;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};

struct ExampleCard {
    idea: &'static str,
    score: f64,
    highlight: &'static str,
    description: &'static str,
}

const EXAMPLES: &[ExampleCard] = &[
    ExampleCard {
        idea: "AI-powered meal planning app that generates recipes based on what's in your fridge",
        score: 8.5,
        highlight: "High market demand with clear utility",
        description: "Addresses a common problem with a practical solution, strong market fit, and clear monetization potential through subscriptions or grocery partnerships.",
    },
    ExampleCard {
        idea: "Monthly subscription box delivering artisanal coffee from different countries",
        score: 6.2,
        highlight: "Saturated market with growth potential",
        description: "The coffee subscription market is competitive, but unique sourcing and curation can differentiate. Success depends on quality, pricing, and marketing execution.",
    },
    ExampleCard {
        idea: "B2B SaaS platform for small businesses to manage inventory and suppliers",
        score: 9.0,
        highlight: "Significant market opportunity",
        description: "Clear value proposition with high demand in an underserved small business market. Strong potential for recurring revenue.",
    },
    ExampleCard {
        idea: "Social media app for pet owners to connect and arrange playdates",
        score: 4.3,
        highlight: "Challenging network effects",
        description: "Cute concept but faces significant hurdles with user acquisition and monetization. Network effects are hard to build against established platforms.",
    },
    ExampleCard {
        idea: "Delivery service for fresh, local produce to urban apartments",
        score: 7.8,
        highlight: "Growing trend with clear customer base",
        description: "Taps rising health and sustainability trends. Strong potential with proper logistics and local farm partnerships.",
    },
    ExampleCard {
        idea: "Blockchain-based social network for privacy-conscious users",
        score: 3.1,
        highlight: "Limited market appeal and high execution complexity",
        description: "Most users don't prioritize privacy enough to switch platforms, and blockchain adds complexity without clear benefits.",
    },
    ExampleCard {
        idea: "Online marketplace connecting freelance designers with small business clients",
        score: 7.2,
        highlight: "Proven market with clear value proposition",
        description: "Two-sided marketplace with existing demand. Success depends on curation, pricing, and building trust on both sides.",
    },
    ExampleCard {
        idea: "App that gamifies fitness by turning workouts into quests and battles",
        score: 5.7,
        highlight: "Engagement challenges in saturated market",
        description: "Faces strong competition from established fitness apps; user retention is the key challenge.",
    },
];

fn band_color(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Strong => "#22c55e",
        ScoreBand::Moderate => "#eab308",
        ScoreBand::Weak => "#ef4444",
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | IdeaChecker</title>
<style>
  body {{ margin: 0; font-family: system-ui, sans-serif; background: #0f172a; color: #e2e8f0; }}
  nav {{ border-bottom: 1px solid #334155; padding: 1rem 2rem; display: flex; gap: 1.5rem; }}
  nav a {{ color: #e2e8f0; text-decoration: none; }}
  nav a:hover {{ color: #38bdf8; }}
  main {{ max-width: 56rem; margin: 0 auto; padding: 3rem 1rem; }}
  h1 {{ font-size: 2.25rem; }}
  textarea {{ width: 100%; min-height: 8rem; background: #1e293b; color: #e2e8f0;
             border: 1px solid #334155; border-radius: 0.5rem; padding: 0.75rem; }}
  button {{ background: #38bdf8; color: #0f172a; border: none; border-radius: 0.5rem;
           padding: 0.75rem 1.5rem; font-weight: 600; cursor: pointer; }}
  button:disabled {{ opacity: 0.5; cursor: wait; }}
  .card {{ background: #1e293b; border: 1px solid #334155; border-radius: 0.75rem;
          padding: 1.25rem; margin: 1rem 0; }}
  .bar {{ height: 0.5rem; border-radius: 999px; background: #334155; overflow: hidden; }}
  .bar > div {{ height: 100%; }}
  .error {{ color: #f87171; }}
</style>
</head>
<body>
<nav>
  <a href="/"><strong>IdeaChecker</strong></a>
  <a href="/how-it-works">How it works</a>
  <a href="/examples">Examples</a>
  <a href="/about">About</a>
</nav>
<main>
{body}
</main>
</body>
</html>
"##
    )
}

pub async fn home() -> Html<String> {
    Html(layout("Validate your business idea", HOME_BODY))
}

const HOME_BODY: &str = r##"<h1>IdeaChecker</h1>
<p>Get a brutally honest, AI-powered evaluation of your business idea in seconds.</p>
<form id="idea-form">
  <textarea id="idea" placeholder="Describe your business idea in a few sentences..."></textarea>
  <p><button id="submit" type="submit">Check my idea</button></p>
</form>
<p id="error" class="error" hidden></p>
<div id="result" class="card" hidden>
  <p><strong>Score: <span id="score"></span>/10</strong></p>
  <div class="bar"><div id="score-bar"></div></div>
  <div id="analysis"></div>
</div>
<script>
const form = document.getElementById('idea-form');
const button = document.getElementById('submit');

function bandColor(score) {
  if (score >= 7) return '#22c55e';
  if (score >= 4) return '#eab308';
  return '#ef4444';
}

// **bold** markers from the model become styled spans.
function renderAnalysis(text) {
  const escaped = text
    .replace(/&/g, '&amp;').replace(/</g, '&lt;').replace(/>/g, '&gt;');
  return escaped
    .replace(/\*\*([^*]+)\*\*/g, '<strong>$1</strong>')
    .split('\n\n')
    .map((p) => '<p>' + p.replace(/\n/g, '<br>') + '</p>')
    .join('');
}

form.addEventListener('submit', async (e) => {
  e.preventDefault();
  const idea = document.getElementById('idea').value.trim();
  if (!idea || button.disabled) return;

  button.disabled = true;
  document.getElementById('error').hidden = true;
  document.getElementById('result').hidden = true;

  try {
    const response = await fetch('/api/check-idea', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ idea }),
    });
    const data = await response.json();
    if (!response.ok) throw new Error(data.error || 'Failed to analyze idea');

    document.getElementById('score').textContent = data.score.toFixed(1);
    const bar = document.getElementById('score-bar');
    bar.style.width = (data.score / 10) * 100 + '%';
    bar.style.background = bandColor(data.score);
    document.getElementById('analysis').innerHTML = renderAnalysis(data.analysis);
    document.getElementById('result').hidden = false;
  } catch (err) {
    const el = document.getElementById('error');
    el.textContent = err.message;
    el.hidden = false;
  } finally {
    button.disabled = false;
  }
});
</script>
"##;

pub async fn examples() -> Html<String> {
    let cards: String = EXAMPLES
        .iter()
        .map(|example| {
            let band = ScoreBand::from_score(example.score);
            format!(
                r##"<div class="card">
  <p><strong>{idea}</strong></p>
  <p><span style="color:{color};font-weight:600">{label}</span> &middot; {score:.1}/10 &mdash; {highlight}</p>
  <div class="bar"><div style="width:{pct:.0}%;background:{color}"></div></div>
  <p>{description}</p>
</div>
"##,
                idea = example.idea,
                color = band_color(band),
                label = band.label(),
                score = example.score,
                pct = example.score * 10.0,
                highlight = example.highlight,
                description = example.description,
            )
        })
        .collect();

    let body = format!(
        "<h1>Example Validations</h1>\n<p>Real examples of how IdeaChecker scores business ideas across the Strong, Moderate, and Weak bands.</p>\n{cards}"
    );
    Html(layout("Example Validations", &body))
}

pub async fn about() -> Html<String> {
    Html(layout(
        "About",
        r#"<h1>About IdeaChecker</h1>
<p>IdeaChecker gives founders an honest first read on a business idea before
they sink months into it. Paste your concept, and a language model evaluates
feasibility, market opportunity, competition, and effort from the
perspective of a pragmatic small-business founder.</p>
<p>The score is a starting point for discussion, not a verdict. Treat it the
way you would a blunt friend's opinion: directionally useful, worth
stress-testing.</p>"#,
    ))
}

pub async fn how_it_works() -> Html<String> {
    Html(layout(
        "How it works",
        r#"<h1>How it works</h1>
<p><strong>1. Describe your idea.</strong> A couple of sentences is enough;
more detail gives a sharper analysis.</p>
<p><strong>2. The AI evaluates it.</strong> Your idea is embedded into a
structured evaluation prompt covering feasibility, market size (TAM / SAM /
SOM), time and effort, and competition, answered by a language model tuned
toward small-business realism rather than VC logic.</p>
<p><strong>3. You get a scored analysis.</strong> The reply includes a
0&ndash;10 rating: 7 and above is a strong idea, 4&ndash;6.9 is moderate,
below 4 is weak. Ideas targeting real, reachable markets with proof-based
growth paths score higher.</p>"#,
    ))
}

pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let base = state.config.server.public_url.trim_end_matches('/');
    let today = chrono::Utc::now().format("%Y-%m-%d");

    let routes: &[(&str, &str, &str)] = &[
        ("", "daily", "1.0"),
        ("/about", "monthly", "0.8"),
        ("/how-it-works", "monthly", "0.8"),
        ("/examples", "weekly", "0.8"),
    ];

    let urls: String = routes
        .iter()
        .map(|(path, changefreq, priority)| {
            format!(
                "  <url>\n    <loc>{base}{path}</loc>\n    <lastmod>{today}</lastmod>\n    <changefreq>{changefreq}</changefreq>\n    <priority>{priority}</priority>\n  </url>\n"
            )
        })
        .collect();

    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{urls}</urlset>\n"
    );

    ([(header::CONTENT_TYPE, "application/xml")], xml)
}
