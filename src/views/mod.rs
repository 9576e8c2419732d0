//! Server-rendered HTML.
//!
//! Pages are built from a handful of helpers: a shared layout, a table
//! renderer for list pages, and a field/form renderer for add and edit pages.
//! All dynamic text goes through `escape`.

use axum::response::Html;
use std::fmt::Display;

use crate::session::SessionUser;

pub fn escape(s: &str) -> String {
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

/// Render an optional value for display; `None` shows as an empty cell.
pub fn opt<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title} - Ella Rises</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

pub fn page(title: &str, body: &str) -> Html<String> {
    Html(layout(title, body))
}

pub fn landing(user: Option<&SessionUser>) -> Html<String> {
    let body = match user {
        Some(user) => format!(
            r#"<h1>Ella Rises</h1>
<p>Welcome, {}</p>
<a href="/dashboard">Dashboard</a><br>
<a href="/logout">Logout</a>"#,
            escape(&user.email)
        ),
        None => r#"<h1>Ella Rises</h1>
<a href="/login">Login</a>"#
            .to_string(),
    };
    page("Home", &body)
}

pub fn login(error: bool) -> Html<String> {
    let mut body = String::from("<h2>Login</h2>\n");
    if error {
        body.push_str("<p>Invalid login. Try again.</p>\n");
    }
    body.push_str(
        r#"<form method="POST" action="/login">
  <input name="email" placeholder="email" required><br>
  <input name="password" type="password" placeholder="password" required><br>
  <button>Login</button>
</form>"#,
    );
    page("Login", &body)
}

pub fn dashboard(user: &SessionUser) -> Html<String> {
    let mut body = format!(
        r#"<h1>Dashboard</h1>
<p>Hello {}</p>
<ul>
  <li><a href="/participants">Participants</a></li>
  <li><a href="/events">Events</a></li>
  <li><a href="/surveys">Surveys</a></li>
  <li><a href="/milestones">Milestones</a></li>
  <li><a href="/donations">Donations</a></li>
"#,
        escape(&user.email)
    );
    if user.is_manager() {
        body.push_str("  <li><a href=\"/users\">Users</a></li>\n");
    }
    body.push_str("</ul>\n<a href=\"/logout\">Logout</a>");
    page("Dashboard", &body)
}

/// One table row plus the id used to build its action links.
pub struct Row {
    pub id: i32,
    pub cells: Vec<String>,
}

/// List page: a heading, an optional "add" link, and one table. `links` adds
/// one action column per entry, each pointing at `base/{row id}`.
pub fn table_page(
    title: &str,
    add_href: Option<&str>,
    headers: &[&str],
    links: &[(&str, &str)],
    rows: Vec<Row>,
) -> Html<String> {
    let mut body = format!("<h1>{}</h1>\n", escape(title));
    if let Some(href) = add_href {
        body.push_str(&format!("<p><a href=\"{}\">Add</a></p>\n", href));
    }
    body.push_str("<table border=\"1\">\n  <tr>");
    for header in headers {
        body.push_str(&format!("<th>{}</th>", escape(header)));
    }
    for (label, _) in links {
        body.push_str(&format!("<th>{}</th>", escape(label)));
    }
    body.push_str("</tr>\n");
    for row in rows {
        body.push_str("  <tr>");
        for cell in &row.cells {
            body.push_str(&format!("<td>{}</td>", escape(cell)));
        }
        for (label, base) in links {
            body.push_str(&format!(
                r#"<td><a href="{}/{}">{}</a></td>"#,
                base,
                row.id,
                escape(label),
            ));
        }
        body.push_str("</tr>\n");
    }
    body.push_str("</table>\n<p><a href=\"/dashboard\">Back to dashboard</a></p>");
    page(title, &body)
}

/// One form input on an add/edit page.
pub struct Field {
    name: String,
    label: String,
    kind: FieldKind,
    value: String,
    required: bool,
}

enum FieldKind {
    Input(&'static str),
    TextArea,
    Select(Vec<String>),
}

impl Field {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            value: String::new(),
            required: false,
        }
    }

    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Input("text"))
    }

    pub fn password(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Input("password"))
    }

    pub fn date(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Input("date"))
    }

    pub fn number(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Input("number"))
    }

    pub fn textarea(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::TextArea)
    }

    pub fn select(name: &str, label: &str, options: &[&str]) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Select(options.iter().map(|s| s.to_string()).collect()),
        )
    }

    pub fn value(mut self, value: impl Display) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn render(&self) -> String {
        let required = if self.required { " required" } else { "" };
        let control = match &self.kind {
            FieldKind::Input(kind) => format!(
                r#"<input type="{}" name="{}" value="{}"{}>"#,
                kind,
                escape(&self.name),
                escape(&self.value),
                required,
            ),
            FieldKind::TextArea => format!(
                r#"<textarea name="{}">{}</textarea>"#,
                escape(&self.name),
                escape(&self.value),
            ),
            FieldKind::Select(options) => {
                let mut html = format!(r#"<select name="{}">"#, escape(&self.name));
                for option in options {
                    let selected = if *option == self.value { " selected" } else { "" };
                    html.push_str(&format!(
                        r#"<option value="{0}"{1}>{0}</option>"#,
                        escape(option),
                        selected,
                    ));
                }
                html.push_str("</select>");
                html
            }
        };
        format!(
            "  <label>{}<br>{}</label><br>\n",
            escape(&self.label),
            control
        )
    }
}

/// Add/edit page: one POST form.
pub fn form_page(title: &str, action: &str, back_href: &str, fields: &[Field]) -> Html<String> {
    let mut body = format!(
        "<h1>{}</h1>\n<form method=\"POST\" action=\"{}\">\n",
        escape(title),
        action,
    );
    for field in fields {
        body.push_str(&field.render());
    }
    body.push_str(&format!(
        "  <button>Save</button>\n</form>\n<p><a href=\"{}\">Back</a></p>",
        back_href,
    ));
    page(title, &body)
}
