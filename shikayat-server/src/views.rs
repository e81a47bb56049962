// Inline HTML views. Small enough that a templating engine would be
// more code than the pages themselves.

use shikayat_core::models::{Complaint, ComplaintFilter};

/// Escape user-supplied text for embedding in HTML.
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

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Shikayat</title>
</head>
<body>
<nav><a href="/submit">Submit</a> | <a href="/complaints">Complaints</a> | <a href="/admin">Admin</a></nav>
<h1>{title}</h1>
{body}
</body>
</html>
"#
    )
}

/// Flash banner carried across a redirect, or nothing.
fn flash(msg: Option<&str>, kind: Option<&str>) -> String {
    match msg {
        Some(m) if !m.is_empty() => {
            let kind = kind.unwrap_or("info");
            format!(
                r#"<p class="flash {}">{}</p>"#,
                escape(kind),
                escape(m)
            )
        }
        _ => String::new(),
    }
}

pub fn submit_page(msg: Option<&str>, kind: Option<&str>) -> String {
    let body = format!(
        r#"{flash}
<form method="post" action="/submit">
  <label>Name* <input name="name"></label><br>
  <label>Email* <input name="email" type="email"></label><br>
  <label>Role* <input name="role"></label><br>
  <label>Title* <input name="title"></label><br>
  <label>Description* <textarea name="description"></textarea></label><br>
  <label>Category <input name="category"></label><br>
  <label>Location <input name="location"></label><br>
  <button type="submit">Submit complaint</button>
</form>"#,
        flash = flash(msg, kind),
    );
    page("Submit a complaint", &body)
}

fn complaint_rows(complaints: &[Complaint], with_update_form: bool) -> String {
    let mut rows = String::new();
    for c in complaints {
        let status_cell = if with_update_form {
            format!(
                r#"<form method="post" action="/admin/update/{id}">
<input name="status" value="{status}">
<button type="submit">Update</button>
</form>"#,
                id = c.id,
                status = escape(&c.status),
            )
        } else {
            escape(&c.status)
        };
        rows.push_str(&format!(
            r#"<tr>
  <td>{id}</td>
  <td>{title}</td>
  <td>{description}</td>
  <td>{role}</td>
  <td>{category}</td>
  <td>{location}</td>
  <td>{status}</td>
  <td>{created}</td>
</tr>
"#,
            id = c.id,
            title = escape(&c.title),
            description = escape(&c.description),
            role = escape(&c.role),
            category = escape(c.category.as_deref().unwrap_or("-")),
            location = escape(c.location.as_deref().unwrap_or("-")),
            status = status_cell,
            created = c.created_at.format("%Y-%m-%d %H:%M"),
        ));
    }
    rows
}

fn complaint_table(complaints: &[Complaint], with_update_form: bool) -> String {
    if complaints.is_empty() {
        return "<p>No complaints found.</p>".to_string();
    }
    format!(
        r#"<table border="1">
<tr><th>ID</th><th>Title</th><th>Description</th><th>Role</th><th>Category</th><th>Location</th><th>Status</th><th>Created</th></tr>
{}
</table>"#,
        complaint_rows(complaints, with_update_form)
    )
}

pub fn listing_page(
    complaints: &[Complaint],
    filter: &ComplaintFilter,
    is_admin: bool,
    msg: Option<&str>,
    kind: Option<&str>,
) -> String {
    let admin_note = if is_admin {
        r#"<p>Logged in as admin - <a href="/admin">dashboard</a> | <a href="/admin/logout">logout</a></p>"#
    } else {
        ""
    };
    let body = format!(
        r#"{flash}{admin_note}
<form method="get" action="/complaints">
  <input name="q" placeholder="Search" value="{q}">
  <input name="status" placeholder="Status" value="{status}">
  <input name="role" placeholder="Role" value="{role}">
  <button type="submit">Filter</button>
</form>
{table}"#,
        flash = flash(msg, kind),
        q = escape(filter.q.as_deref().unwrap_or("")),
        status = escape(filter.status.as_deref().unwrap_or("")),
        role = escape(filter.role.as_deref().unwrap_or("")),
        table = complaint_table(complaints, false),
    );
    page("Complaints", &body)
}

pub fn login_page(msg: Option<&str>, kind: Option<&str>) -> String {
    let body = format!(
        r#"{flash}
<form method="post" action="/admin/login">
  <label>Password <input name="password" type="password"></label>
  <button type="submit">Log in</button>
</form>"#,
        flash = flash(msg, kind),
    );
    page("Admin login", &body)
}

pub fn dashboard_page(
    complaints: &[Complaint],
    msg: Option<&str>,
    kind: Option<&str>,
) -> String {
    let body = format!(
        r#"{flash}<p><a href="/admin/logout">Log out</a></p>
{table}"#,
        flash = flash(msg, kind),
        table = complaint_table(complaints, true),
    );
    page("Admin dashboard", &body)
}

pub fn not_found_page() -> String {
    page("Not found", "<p>The requested complaint does not exist.</p>")
}

pub fn error_page() -> String {
    page("Something went wrong", "<p>Please try again later.</p>")
}
