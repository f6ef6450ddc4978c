pub fn render_index(source: &str, row_count: usize) -> String {
    INDEX_HTML
        .replace("{{SOURCE}}", &escape_html(source))
        .replace("{{ROWS}}", &row_count.to_string())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Sales Dashboard</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --ink: #2b2a28;
      --accent: #3b82f6;
      --high: #22c55e;
      --low: #ef4444;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: #ffffff;
      transition: background-color 600ms ease;
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
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

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .chart-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .chart-header h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      padding: 8px 14px;
      font-size: 0.9rem;
      color: #6b645d;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .chart-card {
      background: #1f2933;
      border-radius: 20px;
      padding: 16px;
    }

    #chart {
      width: 100%;
      height: 300px;
      display: block;
    }

    .bar {
      fill: var(--accent);
    }

    .bar.high {
      fill: var(--high);
    }

    .bar.low {
      fill: var(--low);
    }

    .chart-label {
      fill: rgba(255, 255, 255, 0.7);
      font-size: 11px;
    }

    .chart-value {
      fill: white;
      font-size: 11px;
    }

    .metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .colors {
      display: flex;
      gap: 12px;
      align-items: center;
    }

    .colors button {
      background: var(--accent-2);
      color: white;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Sales Dashboard</h1>
      <p class="subtitle">{{ROWS}} rows loaded from {{SOURCE}}</p>
    </header>

    <section>
      <div class="chart-header">
        <h2 id="chart-title">Monthly Sales</h2>
        <div class="tabs" role="tablist">
          <button class="tab active" type="button" data-view="monthly" role="tab" aria-selected="true">Monthly</button>
          <button class="tab" type="button" data-view="yearly" role="tab" aria-selected="false">Yearly</button>
        </div>
      </div>
    </section>

    <div class="chart-card">
      <svg id="chart" viewBox="0 0 640 300" aria-label="Sales chart" role="img"></svg>
    </div>

    <section class="metrics">
      <div class="stat">
        <span class="label">Total sales</span>
        <span class="value" id="total-sales">--</span>
      </div>
      <div class="stat">
        <span class="label">Average sales</span>
        <span class="value" id="average-sales">--</span>
      </div>
      <div class="stat">
        <span class="label" id="top-title">Top month</span>
        <span class="value" id="highest">--</span>
      </div>
    </section>

    <section class="colors">
      <button id="color-start" type="button">Start colors</button>
      <button id="color-stop" type="button">Stop colors</button>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const chartEl = document.getElementById('chart');
    const titleEl = document.getElementById('chart-title');
    const topTitleEl = document.getElementById('top-title');
    const totalEl = document.getElementById('total-sales');
    const averageEl = document.getElementById('average-sales');
    const highestEl = document.getElementById('highest');
    const statusEl = document.getElementById('status');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let salesData = null;
    let activeView = 'monthly';
    let colorTimer = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const show = (value) => (value === null || value === undefined ? '--' : value);

    const escapeHtml = (value) =>
      String(value)
        .replace(/&/g, '&amp;')
        .replace(/</g, '&lt;')
        .replace(/>/g, '&gt;')
        .replace(/"/g, '&quot;')
        .replace(/'/g, '&#39;');

    const renderBarChart = (series) => {
      const points = series.labels.map((label, index) => ({
        label: show(label),
        value: series.values[index]
      }));
      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data</text>';
        return;
      }

      const width = 640;
      const height = 300;
      const paddingX = 40;
      const paddingY = 40;
      const top = 24;
      const numbers = points.map((point) => point.value).filter((value) => typeof value === 'number');
      const max = Math.max(0, ...numbers);
      const min = Math.min(...numbers);
      const scale = max > 0 ? (height - top - paddingY) / max : 0;
      const slot = (width - paddingX * 2) / points.length;
      const barWidth = Math.min(30, slot * 0.7);

      chartEl.innerHTML = points
        .map((point, index) => {
          const value = typeof point.value === 'number' ? point.value : 0;
          const barHeight = Math.max(0, value * scale);
          const x = paddingX + index * slot + (slot - barWidth) / 2;
          const y = height - paddingY - barHeight;
          const tone = value === max ? 'high' : value === min ? 'low' : '';
          return `
            <rect class="bar ${tone}" x="${x}" y="${y}" width="${barWidth}" height="${barHeight}" rx="8" />
            <text class="chart-value" x="${x + barWidth / 2}" y="${y - 6}" text-anchor="middle">${escapeHtml(show(point.value))}</text>
            <text class="chart-label" x="${x + barWidth / 2}" y="${height - paddingY + 18}" text-anchor="middle">${escapeHtml(point.label)}</text>`;
        })
        .join('');
    };

    const loadSummary = async () => {
      const res = await fetch(`/api/summary?view=${activeView}`);
      if (!res.ok) {
        throw new Error(await res.text() || 'Unable to load summary');
      }
      const summary = await res.json();
      totalEl.textContent = `$${show(summary.total)}`;
      averageEl.textContent = `$${summary.average_display}`;
      highestEl.textContent = show(summary.highest_label);
    };

    const render = () => {
      if (!salesData) {
        return;
      }
      const monthly = activeView === 'monthly';
      titleEl.textContent = monthly ? 'Monthly Sales' : 'Yearly Sales';
      topTitleEl.textContent = monthly ? 'Top month' : 'Top year';
      renderBarChart(monthly ? salesData.monthly : salesData.yearly);
      loadSummary().catch((err) => setStatus(err.message, 'error'));
    };

    const loadSales = async () => {
      const res = await fetch('/api/sales');
      if (!res.ok) {
        throw new Error(await res.text() || 'Unable to load sales');
      }
      salesData = await res.json();
      render();
    };

    const setView = (view) => {
      activeView = view;
      tabs.forEach((button) => {
        const isActive = button.dataset.view === view;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      render();
    };

    const applyColor = (status) => {
      document.body.style.backgroundColor = status.color;
      if (status.running && !colorTimer) {
        colorTimer = setInterval(() => {
          fetch('/api/color')
            .then((res) => res.json())
            .then(applyColor)
            .catch((err) => setStatus(err.message, 'error'));
        }, 500);
      } else if (!status.running && colorTimer) {
        clearInterval(colorTimer);
        colorTimer = null;
      }
    };

    const postColor = async (action) => {
      const res = await fetch(`/api/color/${action}`, { method: 'POST' });
      if (!res.ok) {
        throw new Error('Color request failed');
      }
      applyColor(await res.json());
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setView(button.dataset.view));
    });

    document.getElementById('color-start').addEventListener('click', () => {
      postColor('start').catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('color-stop').addEventListener('click', () => {
      postColor('stop').catch((err) => setStatus(err.message, 'error'));
    });

    loadSales().catch((err) => setStatus(err.message, 'error'));
    fetch('/api/color').then((res) => res.json()).then(applyColor).catch(() => {});
  </script>
</body>
</html>
"#;
