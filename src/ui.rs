use crate::store::StoreData;

pub fn render_index(data: &StoreData) -> String {
    INDEX_HTML
        .replace("{{STREAKS}}", &data.streaks.len().to_string())
        .replace("{{COLLECTIONS}}", &data.collections.len().to_string())
        .replace("{{GOALS}}", &data.goals.len().to_string())
        .replace("{{GOAL_SETS}}", &data.goal_sets.len().to_string())
        .replace("{{TRACKED_VALUES}}", &data.tracked_values.len().to_string())
        .replace(
            "{{TRACKED_VALUE_SETS}}",
            &data.tracked_value_sets.len().to_string(),
        )
        .replace(
            "{{CHECKLIST_ITEMS}}",
            &data.checklist_items.len().to_string(),
        )
        .replace("{{CHECKLISTS}}", &data.checklists.len().to_string())
        .replace("{{SUPER_SETS}}", &data.super_sets.len().to_string())
        .replace("{{VIEWS}}", &data.read_only_views.len().to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Streakz</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(2rem, 4vw, 2.8rem);
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Streakz</h1>
      <p class="subtitle">Streaks, goals, tracked values and checklists, grouped into sets.</p>
    </header>

    <section class="panel">
      <div class="stat"><span class="label">Streaks</span><span class="value">{{STREAKS}}</span></div>
      <div class="stat"><span class="label">Collections</span><span class="value">{{COLLECTIONS}}</span></div>
      <div class="stat"><span class="label">Goals</span><span class="value">{{GOALS}}</span></div>
      <div class="stat"><span class="label">Goal sets</span><span class="value">{{GOAL_SETS}}</span></div>
      <div class="stat"><span class="label">Tracked values</span><span class="value">{{TRACKED_VALUES}}</span></div>
      <div class="stat"><span class="label">Tracked value sets</span><span class="value">{{TRACKED_VALUE_SETS}}</span></div>
      <div class="stat"><span class="label">Checklist items</span><span class="value">{{CHECKLIST_ITEMS}}</span></div>
      <div class="stat"><span class="label">Checklists</span><span class="value">{{CHECKLISTS}}</span></div>
      <div class="stat"><span class="label">Super sets</span><span class="value">{{SUPER_SETS}}</span></div>
      <div class="stat"><span class="label">Read-only views</span><span class="value">{{VIEWS}}</span></div>
    </section>

    <p class="hint">Everything is served from the JSON API under /api; this page is just a head count.</p>
  </main>
</body>
</html>
"#;
