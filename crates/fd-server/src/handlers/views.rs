//! Server-rendered HTML views.
//!
//! Each view is a complete document: header with the variant toggle,
//! sidebar built from the filtered navigation, page content and table of
//! contents. Unknown paths render the not-found page with status 404.

use std::fmt::Write;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use fd_content::{NavigationSection, RenderedPage, TocEntry, Variant, normalize_path, render_page};
use fd_highlight::escape_html;

use crate::handlers::to_url_path;
use crate::state::AppState;

/// Handle GET /.
pub(crate) async fn root_view(State(state): State<Arc<AppState>>) -> (StatusCode, Html<String>) {
    page_view_impl("", &state)
}

/// Handle GET /{*path}.
pub(crate) async fn page_view(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Html<String>) {
    page_view_impl(&path, &state)
}

fn page_view_impl(path: &str, state: &AppState) -> (StatusCode, Html<String>) {
    let content = state.content();
    let variant = state.variant();
    let resolved = content.resolve(path);

    let status = if resolved.is_found() {
        StatusCode::OK
    } else {
        tracing::debug!(path, "No page at path");
        StatusCode::NOT_FOUND
    };

    let current_path = to_url_path(&normalize_path(path));
    let layout = Layout {
        site_title: &state.options.title,
        current_path: &current_path,
        variant,
        navigation: &content.visible_navigation(variant),
        page: &render_page(resolved.page(), variant),
    };

    (status, Html(layout.render()))
}

struct Layout<'a> {
    site_title: &'a str,
    current_path: &'a str,
    variant: Variant,
    navigation: &'a [NavigationSection],
    page: &'a RenderedPage,
}

impl Layout<'_> {
    fn render(&self) -> String {
        let mut html = String::with_capacity(self.page.html.len() + 4096);

        write!(
            html,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{page} | {site}</title>
<link rel="stylesheet" href="/assets/style.css">
<script src="/assets/app.js" defer></script>
</head>
<body data-variant="{variant}" data-path="{path}">
<header class="site-header">
<a class="site-title" href="/">{site}</a>
"#,
            page = escape_html(&self.page.title),
            site = escape_html(self.site_title),
            variant = self.variant,
            path = escape_html(self.current_path),
        )
        .unwrap();

        self.render_toggle(&mut html);
        html.push_str("</header>\n<div class=\"layout\">\n");
        self.render_sidebar(&mut html);

        write!(
            html,
            "<main class=\"content\">\n{}</main>\n",
            self.page.html
        )
        .unwrap();

        render_toc(&self.page.toc, &mut html);
        html.push_str("</div>\n</body>\n</html>\n");
        html
    }

    fn render_toggle(&self, html: &mut String) {
        write!(
            html,
            r#"<form class="variant-toggle" method="post" action="/variant">
<input type="hidden" name="redirect" value="{}">
"#,
            escape_html(self.current_path)
        )
        .unwrap();

        for variant in Variant::ALL {
            write!(
                html,
                r#"<button type="submit" name="variant" value="{}" aria-pressed="{}">{}</button>
"#,
                variant,
                variant == self.variant,
                escape_html(variant.label())
            )
            .unwrap();
        }
        html.push_str("</form>\n");
    }

    fn render_sidebar(&self, html: &mut String) {
        html.push_str("<nav class=\"sidebar\">\n");
        for section in self.navigation {
            write!(
                html,
                "<section>\n<h2>{}</h2>\n<ul>\n",
                escape_html(&section.title)
            )
            .unwrap();

            for entry in &section.items {
                let current = if entry.href == self.current_path {
                    r#" aria-current="page""#
                } else {
                    ""
                };
                write!(
                    html,
                    r#"<li><a href="{}"{current}>{}</a></li>
"#,
                    escape_html(&entry.href),
                    escape_html(&entry.title)
                )
                .unwrap();
            }
            html.push_str("</ul>\n</section>\n");
        }
        html.push_str("</nav>\n");
    }
}

fn render_toc(toc: &[TocEntry], html: &mut String) {
    if toc.is_empty() {
        return;
    }

    html.push_str("<aside class=\"toc\">\n<h2>On this page</h2>\n<ul>\n");
    for entry in toc {
        write!(
            html,
            r##"<li class="toc-level-{}"><a href="#{}">{}</a></li>
"##,
            entry.level,
            escape_html(&entry.id),
            escape_html(&entry.title)
        )
        .unwrap();
    }
    html.push_str("</ul>\n</aside>\n");
}
