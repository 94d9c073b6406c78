use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Artistly" }
                style { (STYLE) }
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" { "Artistly" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/artists" { "Browse Artists" } }
                            li { a href="/onboarding" { "Onboard an Artist" } }
                            li { a href="/dashboard" { "Dashboard" } }
                        }
                    }
                }
                (content)
                footer class="site-footer" {
                    p { "Artistly — book singers, dancers, DJs and speakers." }
                }
            }
        }
    }
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }
.site-header { display: flex; align-items: center; justify-content: space-between;
  padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
.brand { font-weight: 700; font-size: 1.2rem; color: #2563eb; text-decoration: none; }
.site-header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
.site-header nav a { color: #374151; text-decoration: none; }
.site-header nav a:hover { color: #2563eb; }
main.container { max-width: 960px; margin: 0 auto; padding: 2rem 1rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1.5rem; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; background: #fff; }
.card h3 { margin-top: 0; }
.muted { color: #6b7280; }
.stats-line { margin: 0.5rem 0 1.5rem; color: #6b7280; }
.filter-block { display: flex; flex-wrap: wrap; gap: 0.75rem; align-items: flex-end;
  margin-bottom: 1.5rem; }
.filter-block label { display: block; font-size: 0.85rem; font-weight: 500; }
.filter-block input, .filter-block select { padding: 0.4rem; }
.field-error { color: #dc2626; font-size: 0.9rem; margin: 0.25rem 0 0; }
.hero { text-align: center; padding: 3rem 1rem; }
button, .button { background: #2563eb; color: #fff; border: none; border-radius: 6px;
  padding: 0.5rem 1rem; cursor: pointer; text-decoration: none; display: inline-block; }
table { border-collapse: collapse; width: 100%; }
th, td { text-align: left; padding: 0.5rem 0.75rem; border-bottom: 1px solid #e5e7eb; }
.site-footer { margin-top: 3rem; padding: 1.5rem; border-top: 1px solid #e5e7eb; color: #6b7280; }
"#;
