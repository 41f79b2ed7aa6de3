//! Full page rendering.
//!
//! Serializes a [`Document`] into the single-page HTML the browser loads. The
//! markers the controller toggles (`active`, `hidden`, `with-sidebar`) come
//! straight from the document, so the page always reflects the session.
//!
//! The inline script forwards clicks and submits to `/api/v1/events` and reloads
//! the page with the resulting state.

use std::fmt::Write;

use super::html::escape;
use crate::controller::state::Section;
use crate::dom::{ContainerId, Document, FormId, LinkKind, CANVAS_ID, MODAL_ID};

const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js";

const LOGIN_SCRIPT: &str = r#"
document.getElementById('loginForm').addEventListener('submit', async (e) => {
  e.preventDefault();
  const body = JSON.stringify({ email: e.target.email.value, password: e.target.password.value });
  const status = document.getElementById('loginStatus');
  status.textContent = 'Authenticating and loading dashboard...';
  try {
    const response = await fetch('/api/auth/login', { method: 'POST', headers: { 'Content-Type': 'application/json' }, body: body });
    const data = await response.json();
    if (data.success) {
      window.location.href = `/dashboard?client_id=${data.client.id}`;
    } else {
      status.textContent = 'Login failed: Invalid credentials';
    }
  } catch (error) {
    status.textContent = 'Connection error. Please check your credentials.';
  }
});
"#;

const STYLE: &str = r#"
body { font-family: 'Segoe UI', Tahoma, sans-serif; background: #0f0f0f; color: #fff; margin: 0; }
.hidden { display: none !important; }
.section { display: none; padding: 24px; }
.section.active { display: block; }
.sidebar { position: fixed; top: 64px; left: 0; width: 220px; bottom: 0; background: #1a1a1a; }
.main-content.with-sidebar { margin-left: 220px; }
.nav-link.active, .sidebar-link.active, .filter-btn.active { color: #dc2626; }
.threat-level.HIGH, .alert-severity.HIGH { color: #dc2626; }
.threat-level.MEDIUM, .alert-severity.MEDIUM { color: #f59e0b; }
.threat-level.LOW, .alert-severity.LOW { color: #10b981; }
.modal { position: fixed; inset: 0; background: rgba(0,0,0,0.7); }
.notice { background: #1a2d26; padding: 12px 24px; }
"#;

const SCRIPT: &str = r#"
function describe(el, kind) {
  const attributes = {};
  for (const a of el.attributes || []) { if (a.name.startsWith('data-')) attributes[a.name] = a.value; }
  const target = { id: el.id || null, classes: Array.from(el.classList || []), attributes: attributes,
                   href: el.getAttribute ? el.getAttribute('href') : null };
  if (kind === 'submit') {
    target.fields = {};
    for (const input of el.querySelectorAll('input, textarea')) { target.fields[input.name] = input.value; }
  }
  return { kind: kind, target: target };
}
function send(event) {
  return fetch('/api/v1/events', { method: 'POST', headers: { 'Content-Type': 'application/json' },
                                   body: JSON.stringify(event) }).then(() => window.location.reload());
}
document.addEventListener('click', (e) => {
  if (e.target.closest('form') && e.target.type !== 'button') return;
  const link = e.target.closest('a[href]');
  if (link && !link.getAttribute('href').startsWith('#')) return;
  e.preventDefault();
  send(describe(e.target, 'click'));
});
document.addEventListener('submit', (e) => { e.preventDefault(); send(describe(e.target, 'submit')); });
"#;

fn class_if(condition: bool, class: &str) -> &str {
    if condition {
        class
    } else {
        ""
    }
}

fn container(doc: &Document, id: ContainerId) -> String {
    match doc.container(id) {
        Some(c) => format!(r#"<div id="{}">{}</div>"#, id.dom_id(), c.html),
        None => String::new(),
    }
}

fn links(doc: &Document, kind: LinkKind) -> String {
    doc.links
        .iter()
        .filter(|l| l.kind == kind)
        .map(|l| {
            format!(
                r##"<a href="#" class="{} {}" data-section="{}">{}</a>"##,
                kind.class(),
                class_if(l.active, "active"),
                escape(&l.section),
                escape(&l.label)
            )
        })
        .collect()
}

fn form(doc: &Document, id: FormId, submit_label: &str) -> String {
    let Some(form) = doc.form(id) else {
        return String::new();
    };

    let mut html = format!(r#"<form id="{}">"#, id.dom_id());
    for field in &form.fields {
        let required = if field.required { " required" } else { "" };
        let input = if field.input_type == "textarea" {
            format!(
                r#"<textarea name="{}"{}>{}</textarea>"#,
                escape(&field.name),
                required,
                escape(&field.value)
            )
        } else {
            format!(
                r#"<input type="{}" name="{}" value="{}"{}>"#,
                escape(&field.input_type),
                escape(&field.name),
                escape(&field.value),
                required
            )
        };
        let _ = write!(
            html,
            r#"<div class="form-group"><label>{}</label>{}</div>"#,
            escape(&field.label),
            input
        );
    }

    if id == FormId::AddCompetitor {
        html.push_str(r#"<button type="button" id="cancelModal" class="btn btn--outline">Cancel</button>"#);
    }
    let _ = write!(
        html,
        r#"<button type="submit" class="btn btn--primary">{}</button></form>"#,
        escape(submit_label)
    );
    html
}

fn section_body(doc: &Document, section: Section) -> String {
    match section {
        Section::Landing => format!(
            r##"<div class="hero"><h1>We see what they hide. You win.</h1>
<p>24/7 competitor monitoring: pricing, promotions and reviews with instant alerts.</p>
<button id="accessDashboard" class="btn btn--primary">Access Dashboard</button>
<a href="#pricing">See pricing</a></div>
<div id="features" class="features">
<div class="feature"><h4>Real-time Monitoring</h4><p>Automated tracking of competitor websites, pricing, and promotions.</p></div>
<div class="feature"><h4>Instant Alerts</h4><p>Notifications for price drops, new promotions, and market changes.</p></div>
<div class="feature"><h4>Strategic Insights</h4><p>Actionable recommendations for competitive response.</p></div>
</div>
<div id="pricing"><h2>Pricing</h2>{pricing}</div>
<div id="contact"><h2>Contact Us</h2>{contact}</div>"##,
            pricing = container(doc, ContainerId::PricingGrid),
            contact = form(doc, FormId::Contact, "Send Message"),
        ),
        Section::Dashboard => {
            let canvas = if doc.canvas.is_some() {
                format!(r#"<canvas id="{}" height="300"></canvas>"#, CANVAS_ID)
            } else {
                String::new()
            };
            format!(
                r#"<h2>Dashboard</h2>
<div class="card"><h3>Recent Alerts</h3>{alerts}</div>
<div class="card"><h3>Competitor Overview</h3>{overview}</div>
<div class="card"><h3>Threat Trend</h3>{canvas}</div>
<div class="card"><h3>Activity Timeline</h3>{timeline}</div>"#,
                alerts = container(doc, ContainerId::DashboardAlerts),
                overview = container(doc, ContainerId::CompetitorOverview),
                timeline = container(doc, ContainerId::ActivityTimeline),
            )
        }
        Section::Competitors => format!(
            r#"<h2>Competitors</h2>
<button id="addCompetitorBtn" class="btn btn--primary">Add Competitor</button>
{}"#,
            container(doc, ContainerId::CompetitorsGrid)
        ),
        Section::Reports => format!(
            "<h2>Reports</h2>\n{}",
            container(doc, ContainerId::ReportsList)
        ),
        Section::Alerts => {
            let filters: String = doc
                .filter_controls
                .iter()
                .map(|f| {
                    format!(
                        r#"<button class="filter-btn {}" data-filter="{}">{}</button>"#,
                        class_if(f.active, "active"),
                        escape(&f.token),
                        escape(&f.label)
                    )
                })
                .collect();
            format!(
                r#"<h2>Alerts</h2>
<div class="alert-filters">{}</div>
{}"#,
                filters,
                alerts_with_visibility(doc)
            )
        }
        Section::Settings => format!(
            r#"<h2>Settings</h2>
<div class="card"><h3>Profile</h3>{}</div>
<div class="card"><h3>Subscription</h3>{}</div>"#,
            container(doc, ContainerId::ProfileInfo),
            container(doc, ContainerId::SubscriptionInfo)
        ),
    }
}

/// The alerts list with hidden cards wrapped so the browser does not show them
fn alerts_with_visibility(doc: &Document) -> String {
    let Some(list) = doc.container(ContainerId::AlertsList) else {
        return String::new();
    };

    let hidden: Vec<String> = list
        .items
        .iter()
        .filter(|item| !item.visible)
        .filter_map(|item| item.get("data-alert-id"))
        .map(|id| format!(r#"[data-alert-id="{}"]"#, escape(id)))
        .collect();

    let style = if hidden.is_empty() {
        String::new()
    } else {
        format!("<style>{} {{ display: none; }}</style>", hidden.join(", "))
    };

    format!(
        r#"{}<div id="{}">{}</div>"#,
        style,
        ContainerId::AlertsList.dom_id(),
        list.html
    )
}

fn modal(doc: &Document) -> String {
    let Some(hidden) = doc.modal_hidden else {
        return String::new();
    };
    format!(
        r#"<div id="{id}" class="modal {hidden}">
<div class="modal-content">
<div class="modal-header"><h3>Add Competitor</h3><button id="closeModal" class="modal-close">&times;</button></div>
{form}
</div>
</div>"#,
        id = MODAL_ID,
        hidden = class_if(hidden, "hidden"),
        form = form(doc, FormId::AddCompetitor, "Add Competitor"),
    )
}

fn chart_script(doc: &Document) -> String {
    match doc.canvas.as_ref().and_then(|c| c.chart.as_ref()) {
        Some(chart) => format!(
            r#"<script src="{url}"></script>
<script>
const canvas = document.getElementById('{id}');
if (canvas && !canvas.chart) {{ canvas.chart = new Chart(canvas.getContext('2d'), {config}); }}
</script>"#,
            url = CHART_JS_URL,
            id = CANVAS_ID,
            config = chart.to_json().replace("</", "<\\/"),
        ),
        None => String::new(),
    }
}

/// Render the whole document as an HTML page
pub fn render_page(doc: &Document, title: &str) -> String {
    let mut sections = String::new();
    for (section, active) in &doc.sections {
        let _ = writeln!(
            sections,
            r#"<section id="{}" class="section {}">{}</section>"#,
            section.id(),
            class_if(*active, "active"),
            section_body(doc, *section)
        );
    }

    let sidebar = match doc.sidebar_hidden {
        Some(hidden) => format!(
            r#"<aside id="sidebar" class="sidebar {}">{}</aside>"#,
            class_if(hidden, "hidden"),
            links(doc, LinkKind::Sidebar)
        ),
        None => String::new(),
    };

    let notice = doc
        .notice
        .as_deref()
        .map(|n| format!(r#"<div class="notice" role="status">{}</div>"#, escape(n)))
        .unwrap_or_default();

    let main_class = class_if(doc.main_with_sidebar.unwrap_or(false), "with-sidebar");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
    <header class="header"><div class="brand">BLACK FANG INTELLIGENCE</div><nav>{nav}</nav></header>
    {notice}
    {sidebar}
    <main class="main-content {main_class}">
{sections}    </main>
    {modal}
    {chart}
    <script>{script}</script>
</body>
</html>
"#,
        title = escape(title),
        style = STYLE,
        nav = links(doc, LinkKind::Nav),
        modal = modal(doc),
        chart = chart_script(doc),
        script = SCRIPT,
    )
}

/// The demo login page; a successful login opens the client dashboard
pub fn render_login_page(title: &str, demo_email: &str, demo_password: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
    <header class="header"><div class="brand">BLACK FANG INTELLIGENCE</div></header>
    <main class="main-content">
    <section id="login" class="section active">
    <h2>Intelligence Dashboard Access</h2>
    <form id="loginForm">
        <div class="form-group"><label>Email Address:</label><input type="email" name="email" value="{email}" required></div>
        <div class="form-group"><label>Password:</label><input type="password" name="password" value="{password}" required></div>
        <button type="submit" class="btn btn--primary">Access Intelligence Dashboard</button>
    </form>
    <p id="loginStatus" role="status"></p>
    <div class="card"><h3>Demo Account Access</h3>
        <p><strong>Email:</strong> {email}</p>
        <p><strong>Password:</strong> {password}</p>
    </div>
    </section>
    </main>
    <script>{script}</script>
</body>
</html>
"#,
        title = escape(title),
        style = STYLE,
        email = escape(demo_email),
        password = escape(demo_password),
        script = LOGIN_SCRIPT,
    )
}
