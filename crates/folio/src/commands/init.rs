//! Scaffold a starter site.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use folio_site::assets::ASSET_CATEGORIES;
use folio_site::SiteConfig;

/// Run the init command.
pub fn run(root: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing folio site in {}...", root.display());

    let config = SiteConfig::load(root).context("Failed to load site configuration")?;

    if config.src_dir.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config.src_dir.display()
        );
        return Ok(());
    }

    for dir in [&config.template_dir, &config.data_dir] {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    for category in ASSET_CATEGORIES {
        let dir = config.static_dir.join(category);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let files: [(&Path, &str, &str); 14] = [
        (config.template_dir.as_path(), "base.html", BASE_TEMPLATE),
        (config.template_dir.as_path(), "index.html", INDEX_TEMPLATE),
        (config.template_dir.as_path(), "academics.html", ACADEMICS_TEMPLATE),
        (config.template_dir.as_path(), "experience.html", EXPERIENCE_TEMPLATE),
        (config.template_dir.as_path(), "research.html", RESEARCH_TEMPLATE),
        (config.template_dir.as_path(), "professional.html", ACTIVITIES_TEMPLATE),
        (config.template_dir.as_path(), "personal.html", ACTIVITIES_TEMPLATE),
        (config.data_dir.as_path(), "profile.yaml", DEFAULT_PROFILE),
        (config.data_dir.as_path(), "academics.yaml", DEFAULT_ACADEMICS),
        (config.data_dir.as_path(), "experience.yaml", DEFAULT_EXPERIENCE),
        (config.data_dir.as_path(), "research.yaml", DEFAULT_RESEARCH),
        (config.data_dir.as_path(), "professional.yaml", DEFAULT_PROFESSIONAL),
        (config.data_dir.as_path(), "personal.yaml", DEFAULT_PERSONAL),
        (config.static_dir.as_path(), "css/style.css", DEFAULT_CSS),
    ];

    for (dir, name, content) in files {
        let path = dir.join(name);
        if !path.exists() || yes {
            fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Created {}", path.display());
        }
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'folio build' to generate the site.");

    Ok(())
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{% block title %}{{ profile.name }}{% endblock %}</title>
  <link rel="stylesheet" href="css/style.css">
</head>
<body>
  <nav>
    {% for page in ["index", "academics", "experience", "research", "professional", "personal"] %}
    <a href="{{ page }}.html"{% if page == current_page %} class="active"{% endif %}>{{ page | title }}</a>
    {% endfor %}
  </nav>
  <main>
    {% block content %}{% endblock %}
  </main>
  <footer>Last updated {{ build_date }}</footer>
</body>
</html>
"##;

const INDEX_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<h1>{{ profile.name }}</h1>
<p>{{ profile.title }}</p>
{% if profile.bio %}<p>{{ profile.bio }}</p>{% endif %}
{% if research.interests %}
<h2>Research interests</h2>
<ul>
  {% for interest in research.interests %}
  <li>{{ interest }}</li>
  {% endfor %}
</ul>
{% endif %}
{% endblock %}
"##;

const ACADEMICS_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<h1>Academics</h1>
<ul>
  {% for degree in academics.degrees %}
  <li>{{ degree.degree }}, {{ degree.institution }} ({{ degree.date | year_from_date }})</li>
  {% endfor %}
</ul>
{% endblock %}
"##;

const EXPERIENCE_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<h1>Experience</h1>
<ul>
  {% for position in experience.positions %}
  <li>{{ position.role }}, {{ position.organization }}
    ({{ position.start | year_from_date }}&ndash;{{ position.end | year_from_date or "present" }})</li>
  {% endfor %}
</ul>
{% endblock %}
"##;

const RESEARCH_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<h1>Research</h1>
<ol>
  {% for paper in research.publications %}
  <li>{{ paper.authors }}. <em>{{ paper.title }}</em>. {{ paper.venue }}, {{ paper.date | year_from_date }}.</li>
  {% endfor %}
</ol>
{% endblock %}
"##;

const ACTIVITIES_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<h1>{{ current_page | title }} activities</h1>
<ul>
  {% for item in activities.items %}
  <li>{{ item.title }} ({{ item.date | year_from_date }})</li>
  {% endfor %}
</ul>
{% endblock %}
"##;

const DEFAULT_PROFILE: &str = r#"name: Your Name
title: PhD Candidate
email: you@example.org
bio: A short paragraph about your work.
"#;

const DEFAULT_ACADEMICS: &str = r#"degrees:
  - degree: BSc Computer Science
    institution: Example University
    date: "2020-06-15"
"#;

const DEFAULT_EXPERIENCE: &str = r#"positions:
  - role: Research Assistant
    organization: Example Lab
    start: "2021-09-01"
"#;

const DEFAULT_RESEARCH: &str = r#"interests:
  - Programming languages
publications:
  - title: An Example Paper
    authors: Y. Name
    venue: Example Workshop
    date: "2023-05-01"
"#;

const DEFAULT_PROFESSIONAL: &str = r#"items:
  - title: Reviewer, Example Conference
    date: "2024"
"#;

const DEFAULT_PERSONAL: &str = r#"items:
  - title: Ran a half marathon
    date: "2022-10-09"
"#;

const DEFAULT_CSS: &str = r#"body {
  font-family: system-ui, sans-serif;
  max-width: 48rem;
  margin: 0 auto;
  padding: 1rem;
}

nav a.active {
  font-weight: 700;
}
"#;
