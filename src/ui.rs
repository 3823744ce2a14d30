use crate::config::AppConfig;
use crate::models::Subject;

pub fn render_index(config: &AppConfig) -> String {
    let options: String = Subject::ALL
        .iter()
        .map(|subject| {
            format!(
                r#"<option value="{}">{}</option>"#,
                subject,
                escape_html(config.subject_name(*subject))
            )
        })
        .collect();

    let buttons: String = config
        .page_behaviors()
        .into_iter()
        .map(|behavior| {
            let behavior = escape_html(behavior);
            format!(r#"<button type="button" class="behavior" data-behavior="{behavior}">{behavior}</button>"#)
        })
        .collect();

    INDEX_HTML
        .replace("{{SUBJECT_OPTIONS}}", &options)
        .replace("{{BEHAVIOR_BUTTONS}}", &buttons)
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Behavior Log</title>
  <style>
    :root {
      --bg: #f6f1e7;
      --ink: #2b2a28;
      --solo: steelblue;
      --joint: #ffb347;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 20px 50px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 28px 16px 40px;
    }

    .app {
      width: min(820px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 22px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .controls {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: center;
    }

    select, input[type="text"] {
      font: inherit;
      padding: 10px 14px;
      border-radius: 12px;
      border: 1px solid #d7d0c4;
    }

    input[type="text"] {
      flex: 1 1 220px;
    }

    #buttons {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: #2f4858;
      color: white;
    }

    button.secondary {
      background: #e7e0d4;
      color: var(--ink);
    }

    button.danger {
      background: #c8553d;
    }

    #summary {
      font-weight: 600;
    }

    .chart-label {
      font-size: 12px;
      fill: #6b665f;
    }

    .chart-axis {
      stroke: #9c958a;
    }

    .status[data-type="error"] {
      color: #c8553d;
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>Behavior Log</h1>

    <div class="controls">
      <select id="select-subject">{{SUBJECT_OPTIONS}}</select>
      <label><input type="checkbox" id="together-checkbox" /> Together</label>
      <input type="text" id="note-input" placeholder="Optional note" />
    </div>

    <div id="buttons">
      {{BEHAVIOR_BUTTONS}}
      <button type="button" class="secondary" id="export-btn">Export CSV</button>
      <button type="button" class="danger" id="reset-btn">Reset</button>
    </div>

    <p id="summary"></p>
    <svg id="chart" width="640" height="300" role="img"></svg>
    <p class="status" id="status"></p>
  </main>

  <script>
    const selectSubject = document.getElementById('select-subject');
    const togetherEl = document.getElementById('together-checkbox');
    const noteEl = document.getElementById('note-input');
    const summaryEl = document.getElementById('summary');
    const chartEl = document.getElementById('chart');
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeText = (value) =>
      value.replace(/[&<>"']/g, (ch) => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;' }[ch]));

    const renderChart = (view) => {
      summaryEl.textContent = view.summary;

      const width = +chartEl.getAttribute('width');
      const height = +chartEl.getAttribute('height');
      const margin = { top: 20, right: 20, bottom: 30, left: 30 };
      const bars = view.bars;

      if (!bars.length) {
        chartEl.innerHTML = `<text class="chart-label" x="50%" y="50%" text-anchor="middle">No behaviors logged yet</text>`;
        return;
      }

      const band = (width - margin.left - margin.right) / bars.length;
      const barWidth = band * 0.9;
      const y = (value) => height - margin.bottom - (value / view.scale_max) * (height - margin.top - margin.bottom);

      const rects = bars
        .map((bar, index) => {
          const x = margin.left + index * band + band * 0.05;
          const fill = bar.dominance === 'joint' ? 'var(--joint)' : 'var(--solo)';
          return `<rect x="${x}" y="${y(bar.count)}" width="${barWidth}" height="${y(0) - y(bar.count)}" fill="${fill}">` +
            `<title>${escapeText(bar.behavior)}\nShared: ${bar.shared_pct.toFixed(1)}%</title></rect>` +
            `<text class="chart-label" x="${x + barWidth / 2}" y="${height - margin.bottom + 16}" text-anchor="middle">${escapeText(bar.behavior)}</text>`;
        })
        .join('');

      let ticks = '';
      for (let value = 0; value <= view.scale_max; value += Math.max(1, Math.ceil(view.scale_max / 5))) {
        ticks += `<text class="chart-label" x="${margin.left - 6}" y="${y(value) + 4}" text-anchor="end">${value}</text>`;
      }

      chartEl.innerHTML = `
        <line class="chart-axis" x1="${margin.left}" y1="${y(0)}" x2="${width - margin.right}" y2="${y(0)}" />
        <line class="chart-axis" x1="${margin.left}" y1="${margin.top}" x2="${margin.left}" y2="${y(0)}" />
        ${ticks}
        ${rects}
      `;
    };

    const loadSummary = async () => {
      const res = await fetch(`/api/summary/${selectSubject.value}`);
      if (!res.ok) {
        throw new Error('Unable to load summary');
      }
      renderChart(await res.json());
    };

    const logBehavior = async (behavior) => {
      const res = await fetch('/api/log', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          subject: selectSubject.value,
          behavior,
          together: togetherEl.checked,
          note: noteEl.value
        })
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      noteEl.value = '';
      renderChart(await res.json());
      setStatus('', '');
    };

    const resetLogs = async () => {
      const confirmed = window.confirm('Clear all behaviour logs for both subjects?');
      const res = await fetch('/api/reset', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ confirm: confirmed })
      });
      if (!res.ok) {
        throw new Error('Reset failed');
      }
      await loadSummary();
    };

    document.getElementById('buttons').addEventListener('click', (event) => {
      const target = event.target;
      if (target.dataset.behavior) {
        logBehavior(target.dataset.behavior).catch((err) => setStatus(err.message, 'error'));
      } else if (target.id === 'reset-btn') {
        resetLogs().catch((err) => setStatus(err.message, 'error'));
      } else if (target.id === 'export-btn') {
        window.location.href = `/api/export/${selectSubject.value}`;
      }
    });

    selectSubject.addEventListener('change', () => {
      loadSummary().catch((err) => setStatus(err.message, 'error'));
    });

    loadSummary().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_lists_configured_behaviors() {
        let mut config = AppConfig::default();
        config.behaviors = vec!["Eating".to_string(), "Binky <3".to_string()];
        config.subject2_name = "Clover".to_string();

        let html = render_index(&config);
        assert!(html.contains(r#"data-behavior="Eating""#));
        assert!(html.contains("Binky &lt;3"));
        assert!(html.contains(r#"<option value="subject2">Clover</option>"#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn open_vocabulary_still_offers_buttons() {
        let mut config = AppConfig::default();
        config.behaviors.clear();

        let html = render_index(&config);
        for behavior in crate::config::DEFAULT_BEHAVIORS {
            assert!(html.contains(&format!(r#"data-behavior="{behavior}""#)));
        }
    }
}
