use crate::coach::{INTRO, QUICK_QUESTIONS};

pub fn render_index(total_points: u64, unread: usize) -> String {
    let quick_questions: String = QUICK_QUESTIONS
        .iter()
        .map(|(label, query)| {
            format!(
                r#"<button class="chip" type="button" data-query="{}">{}</button>"#,
                escape_html(query),
                escape_html(label)
            )
        })
        .collect();

    INDEX_HTML
        .replace("{{POINTS}}", &total_points.to_string())
        .replace("{{UNREAD}}", &unread.to_string())
        .replace("{{COACH_INTRO}}", &escape_html(INTRO))
        .replace("{{QUICK_QUESTIONS}}", &quick_questions)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
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
  <title>Carbon Tracker</title>
  <style>
    :root {
      --bg: #f1f7f2;
      --ink: #1f2b24;
      --muted: #5c6b62;
      --accent: #2f9e5b;
      --accent-2: #1f5f7a;
      --card: #ffffff;
      --shadow: 0 18px 40px rgba(31, 95, 122, 0.12);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg), #e3f1e7 60%, #f7fbf8 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 24px 16px 96px;
    }

    .app { width: min(900px, 100%); margin: 0 auto; display: grid; gap: 20px; }

    header { display: flex; justify-content: space-between; align-items: center; gap: 12px; }
    h1 { margin: 0; font-family: Georgia, serif; font-size: clamp(1.8rem, 4vw, 2.4rem); }
    .badges { display: flex; gap: 8px; }
    .badge {
      background: var(--card);
      border-radius: 999px;
      padding: 8px 14px;
      font-weight: 600;
      box-shadow: var(--shadow);
      border: none;
      cursor: pointer;
    }

    nav { display: flex; flex-wrap: wrap; gap: 6px; }
    nav button {
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      background: rgba(31, 95, 122, 0.08);
      color: var(--muted);
      font-weight: 600;
      cursor: pointer;
    }
    nav button.active { background: var(--accent); color: white; }

    section.view { display: none; gap: 16px; }
    section.view.active { display: grid; }

    .card {
      background: var(--card);
      border-radius: 20px;
      padding: 20px;
      box-shadow: var(--shadow);
      display: grid;
      gap: 12px;
    }

    .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 12px; }
    .stat .label { font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.1em; color: var(--muted); }
    .stat .value { font-size: 1.6rem; font-weight: 700; color: var(--accent-2); }
    .trend-down { color: var(--accent); }
    .trend-up { color: #c0632b; }

    label { display: grid; gap: 4px; font-size: 0.9rem; color: var(--muted); }
    input, select {
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(31, 95, 122, 0.2);
      font-size: 1rem;
    }
    button.primary {
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      background: var(--accent);
      color: white;
      font-weight: 600;
      cursor: pointer;
    }
    button.secondary {
      border: 1px solid var(--accent);
      border-radius: 999px;
      padding: 8px 14px;
      background: transparent;
      color: var(--accent);
      font-weight: 600;
      cursor: pointer;
    }
    button:disabled { opacity: 0.5; cursor: default; }

    .bar { height: 10px; border-radius: 999px; background: rgba(31, 95, 122, 0.1); overflow: hidden; }
    .bar span { display: block; height: 100%; background: var(--accent); }

    .chat { display: grid; gap: 10px; max-height: 460px; overflow-y: auto; }
    .msg { padding: 12px 14px; border-radius: 16px; white-space: pre-wrap; max-width: 85%; }
    .msg.assistant { background: #eef6f0; justify-self: start; }
    .msg.user { background: var(--accent-2); color: white; justify-self: end; }
    .chips { display: flex; flex-wrap: wrap; gap: 8px; }
    .chip {
      border: 1px solid rgba(31, 95, 122, 0.25);
      border-radius: 999px;
      padding: 6px 12px;
      background: white;
      cursor: pointer;
    }
    .chat-input { display: flex; gap: 8px; }
    .chat-input input { flex: 1; }

    .result.zero { border: 2px solid var(--accent); }
    ul { margin: 0; padding-left: 20px; }
    .leader.you { border: 2px solid var(--accent); }
    .notification.unread { border-left: 4px solid var(--accent); }
    .status { min-height: 1.2em; color: var(--muted); }
    .status[data-type="error"] { color: #c63b2b; }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Carbon Tracker</h1>
      <div class="badges">
        <span class="badge" id="points-badge">{{POINTS}} pts</span>
        <button class="badge" id="bell" type="button">🔔 <span id="unread">{{UNREAD}}</span></button>
      </div>
    </header>

    <nav>
      <button class="active" data-view="dashboard" type="button">Dashboard</button>
      <button data-view="calculator" type="button">Calculator</button>
      <button data-view="coach" type="button">Eco-Coach</button>
      <button data-view="learn" type="button">Learn</button>
      <button data-view="challenges" type="button">Challenges</button>
      <button data-view="leaderboard" type="button">Leaderboard</button>
      <button data-view="notifications" type="button">Notifications</button>
    </nav>

    <div class="status" id="status"></div>

    <section class="view active" id="view-dashboard">
      <div class="grid" id="dashboard-stats"></div>
      <div class="card">
        <h2>Today's Challenge</h2>
        <p id="daily-challenge"></p>
      </div>
      <div class="card">
        <h2>Where your emissions come from</h2>
        <div id="breakdown"></div>
      </div>
      <div class="card">
        <h2>Last 7 days (kg CO₂)</h2>
        <div id="daily-series"></div>
      </div>
    </section>

    <section class="view" id="view-calculator">
      <form class="card" data-category="transport">
        <h2>🚗 Transport</h2>
        <label>Mode
          <select name="mode" id="mode-select" required></select>
        </label>
        <label>Distance (km)
          <input name="distance" type="number" min="0" step="any" placeholder="0" required />
        </label>
        <button class="primary" type="submit">Calculate Emissions</button>
      </form>
      <form class="card" data-category="energy">
        <h2>⚡ Energy</h2>
        <label>Electricity used (kWh)
          <input name="kwh" type="number" min="0" step="any" placeholder="0" required />
        </label>
        <p class="hint" id="energy-hint"></p>
        <button class="primary" type="submit">Calculate Emissions</button>
      </form>
      <form class="card" data-category="food">
        <h2>🍽️ Food</h2>
        <label>Meal type
          <select name="food_type" id="food-select" required></select>
        </label>
        <label>Servings
          <input name="servings" type="number" min="0" step="any" placeholder="0" required />
        </label>
        <button class="primary" type="submit">Calculate Emissions</button>
      </form>
      <div class="card result" id="calc-result" hidden></div>
    </section>

    <section class="view" id="view-coach">
      <div class="card">
        <div class="chat" id="chat">
          <div class="msg assistant">{{COACH_INTRO}}</div>
        </div>
        <div class="chips" id="quick-questions">{{QUICK_QUESTIONS}}</div>
        <form class="chat-input" id="chat-form">
          <input id="chat-input" placeholder="Ask about reducing emissions..." autocomplete="off" />
          <button class="primary" type="submit">Send</button>
        </form>
      </div>
    </section>

    <section class="view" id="view-learn">
      <div class="card">
        <h2 id="learn-level"></h2>
        <div class="bar"><span id="learn-bar"></span></div>
      </div>
      <div class="grid" id="modules"></div>
      <div class="card" id="tips-card">
        <h2>Daily tips</h2>
        <ul id="tips"></ul>
      </div>
      <div class="card" id="quiz-card">
        <h2>Quick quiz</h2>
        <div id="quiz"></div>
        <button class="primary" id="quiz-submit" type="button">Submit answers</button>
        <p id="quiz-result"></p>
      </div>
    </section>

    <section class="view" id="view-challenges">
      <div class="grid" id="challenge-summary"></div>
      <div id="challenge-list" class="grid"></div>
    </section>

    <section class="view" id="view-leaderboard">
      <div id="leaders" class="grid"></div>
    </section>

    <section class="view" id="view-notifications">
      <div class="card">
        <div class="chips">
          <button class="secondary" id="read-all" type="button">Mark all read</button>
          <button class="secondary" id="clear-all" type="button">Clear</button>
        </div>
        <div id="notification-list" class="grid"></div>
      </div>
    </section>
  </main>

  <script>
    const $ = (id) => document.getElementById(id);
    const statusEl = $('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (text) => String(text)
      .replace(/&/g, '&amp;')
      .replace(/</g, '&lt;')
      .replace(/>/g, '&gt;');

    const api = async (path, options = {}) => {
      const res = await fetch(path, {
        headers: { 'content-type': 'application/json' },
        ...options
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const post = (path, body) => api(path, { method: 'POST', body: JSON.stringify(body || {}) });

    const refreshBadges = async () => {
      const [challenges, notes] = await Promise.all([api('/api/challenges'), api('/api/notifications')]);
      $('points-badge').textContent = `${challenges.total_points} pts`;
      $('unread').textContent = notes.unread_count;
    };

    const loaders = {};

    document.querySelectorAll('nav button').forEach((button) => {
      button.addEventListener('click', () => showView(button.dataset.view));
    });
    $('bell').addEventListener('click', () => showView('notifications'));

    const showView = (name) => {
      document.querySelectorAll('nav button').forEach((b) => b.classList.toggle('active', b.dataset.view === name));
      document.querySelectorAll('section.view').forEach((s) => s.classList.toggle('active', s.id === `view-${name}`));
      if (loaders[name]) {
        loaders[name]().catch((err) => setStatus(err.message, 'error'));
      }
    };

    loaders.dashboard = async () => {
      const data = await api('/api/dashboard');
      $('dashboard-stats').innerHTML = data.stats.map((s) => `
        <div class="card stat">
          <span class="label">${s.label}</span>
          <span class="value">${s.value} ${s.unit}</span>
          <span class="${s.trend < 0 ? 'trend-down' : 'trend-up'}">${s.trend > 0 ? '+' : ''}${s.trend}%</span>
        </div>`).join('');
      $('daily-challenge').textContent = data.daily_challenge;
      $('breakdown').innerHTML = data.breakdown.map((b) => `
        <label>${b.category} ${b.percent}%<div class="bar"><span style="width:${b.percent}%"></span></div></label>`).join('');
      const max = Math.max(...data.daily.map((d) => d.total));
      $('daily-series').innerHTML = data.daily.map((d) => `
        <label>${d.label} ${d.total}<div class="bar"><span style="width:${(d.total / max) * 100}%"></span></div></label>`).join('');
    };

    loaders.calculator = async () => {
      if ($('mode-select').options.length) {
        return;
      }
      const factors = await api('/api/factors');
      $('mode-select').innerHTML = factors.transport
        .map((f) => `<option value="${f.key}">${f.key.replace('-', ' ')} (${f.factor} kg/km)</option>`).join('');
      $('food-select').innerHTML = factors.food
        .map((f) => `<option value="${f.key}">${f.key} (${f.factor} kg/serving)</option>`).join('');
      $('energy-hint').textContent = `Average emission factor: ${factors.energy} kg CO₂ per kWh`;
    };

    document.querySelectorAll('form[data-category]').forEach((form) => {
      form.addEventListener('submit', async (event) => {
        event.preventDefault();
        const body = { category: form.dataset.category };
        new FormData(form).forEach((value, key) => {
          body[key] = form.elements[key].type === 'number' ? parseFloat(value) : value;
        });
        try {
          const data = await post('/api/calculate', body);
          const el = $('calc-result');
          el.hidden = false;
          el.classList.toggle('zero', data.zero_emissions);
          el.innerHTML = data.zero_emissions
            ? `<h2>🌍 Zero Carbon Emissions</h2><p>${escapeHtml(data.result.details)}</p>`
            : `<h2>${data.result.emissions.toFixed(2)} kg CO₂</h2>
               <p>${escapeHtml(data.result.details)}</p>
               <p>📊 Equivalent to ${data.car_equivalent_km.toFixed(1)} km driven by an average car</p>
               <ul>${data.recommendations.map((tip) => `<li>${escapeHtml(tip)}</li>`).join('')}</ul>`;
          refreshBadges().catch(() => {});
        } catch (err) {
          setStatus(err.message, 'error');
        }
      });
    });

    const appendMessage = (role, text) => {
      const el = document.createElement('div');
      el.className = `msg ${role}`;
      el.textContent = text;
      $('chat').appendChild(el);
      $('chat').scrollTop = $('chat').scrollHeight;
      return el;
    };

    const sendChat = async (text) => {
      if (!text.trim()) {
        return;
      }
      appendMessage('user', text);
      $('quick-questions').hidden = true;
      const typing = appendMessage('assistant', '…');
      try {
        const data = await post('/api/coach', { message: text });
        typing.textContent = data.reply;
      } catch (err) {
        typing.remove();
        setStatus(err.message, 'error');
      }
    };

    $('chat-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const text = $('chat-input').value;
      $('chat-input').value = '';
      sendChat(text);
    });
    $('quick-questions').querySelectorAll('.chip').forEach((chip) => {
      chip.addEventListener('click', () => sendChat(chip.dataset.query));
    });

    const renderLearn = (data) => {
      $('learn-level').textContent = `${data.level.icon} ${data.level.name} · ${data.progress}%`;
      $('learn-bar').style.width = `${data.progress}%`;
      $('modules').innerHTML = data.modules.map((m) => `
        <div class="card">
          <h3>${m.completed ? '✅ ' : ''}${escapeHtml(m.title)}</h3>
          <p>${escapeHtml(m.intro)}</p>
          <ul>${m.key_points.map((p) => `<li>${escapeHtml(p)}</li>`).join('')}</ul>
          <button class="secondary" data-module="${m.id}" type="button" ${m.completed ? 'disabled' : ''}>Mark complete</button>
        </div>`).join('');
      $('modules').querySelectorAll('button[data-module]').forEach((button) => {
        button.addEventListener('click', async () => {
          renderLearn(await post(`/api/learn/modules/${button.dataset.module}/complete`));
        });
      });
      $('tips').innerHTML = data.tips.map((t) => `<li>${t.icon} ${escapeHtml(t.text)} (saves ${t.saves})</li>`).join('');
      if (!data.tips_viewed) {
        post('/api/learn/tips-viewed').then(renderLearn).catch(() => {});
      }
    };

    loaders.learn = async () => {
      const [data, quiz] = await Promise.all([api('/api/learn'), api('/api/learn/quiz')]);
      renderLearn(data);
      $('quiz').innerHTML = quiz.map((q, i) => `
        <label>${escapeHtml(q.question)}
          <select data-question="${i}">${q.options.map((o, j) => `<option value="${j}">${escapeHtml(o)}</option>`).join('')}</select>
        </label>`).join('');
    };

    $('quiz-submit').addEventListener('click', async () => {
      const answers = Array.from($('quiz').querySelectorAll('select')).map((s) => Number(s.value));
      try {
        const result = await post('/api/learn/quiz', { answers });
        $('quiz-result').textContent = `You scored ${result.correct}/${result.total}. Level: ${result.level.icon} ${result.level.name}`;
        renderLearn(await api('/api/learn'));
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    const renderChallenges = (data) => {
      $('points-badge').textContent = `${data.total_points} pts`;
      $('challenge-summary').innerHTML = `
        <div class="card stat"><span class="label">Points</span><span class="value">${data.total_points}</span></div>
        <div class="card stat"><span class="label">Active</span><span class="value">${data.summary.active}</span></div>
        <div class="card stat"><span class="label">Completed</span><span class="value">${data.summary.completed}</span></div>
        <div class="card stat"><span class="label">Saved</span><span class="value">${data.summary.estimated_savings_kg}+ kg</span></div>`;
      $('challenge-list').innerHTML = data.challenges.map((c) => `
        <div class="card">
          <h3>${escapeHtml(c.title)} · ${c.points} pts</h3>
          <p>${escapeHtml(c.description)}</p>
          <div class="bar"><span style="width:${(c.progress / c.total) * 100}%"></span></div>
          <p>${c.progress}/${c.total} · ${escapeHtml(c.deadline)}</p>
          ${c.status === 'active'
            ? `<button class="primary" data-progress="${c.id}" type="button">Add Progress</button>`
            : `<button class="secondary" data-reset="${c.id}" type="button">Restart Challenge</button>`}
        </div>`).join('');
      $('challenge-list').querySelectorAll('button[data-progress]').forEach((button) => {
        button.addEventListener('click', async () => {
          renderChallenges(await post(`/api/challenges/${button.dataset.progress}/progress`));
          refreshBadges().catch(() => {});
        });
      });
      $('challenge-list').querySelectorAll('button[data-reset]').forEach((button) => {
        button.addEventListener('click', async () => {
          renderChallenges(await post(`/api/challenges/${button.dataset.reset}/reset`));
        });
      });
    };

    loaders.challenges = async () => renderChallenges(await api('/api/challenges'));

    loaders.leaderboard = async () => {
      const leaders = await api('/api/leaderboard');
      $('leaders').innerHTML = leaders.map((l) => `
        <div class="card leader ${l.highlight ? 'you' : ''}">
          <h3>#${l.rank} ${escapeHtml(l.name)}</h3>
          <p>${l.points} pts · ${l.trend}</p>
        </div>`).join('');
    };

    loaders.notifications = async () => {
      const data = await api('/api/notifications');
      $('unread').textContent = data.unread_count;
      $('notification-list').innerHTML = data.notifications.length
        ? data.notifications.map((n) => `
          <div class="card notification ${n.read ? '' : 'unread'}" data-id="${n.id}">
            <strong>${escapeHtml(n.title)}</strong>
            <span>${escapeHtml(n.message)}</span>
            <small>${new Date(n.timestamp).toLocaleString()}</small>
          </div>`).join('')
        : '<p>No notifications yet.</p>';
      $('notification-list').querySelectorAll('.notification.unread').forEach((el) => {
        el.addEventListener('click', async () => {
          await post(`/api/notifications/${el.dataset.id}/read`);
          loaders.notifications();
        });
      });
    };

    $('read-all').addEventListener('click', async () => {
      await post('/api/notifications/read-all');
      loaders.notifications();
    });
    $('clear-all').addEventListener('click', async () => {
      await api('/api/notifications', { method: 'DELETE' });
      loaders.notifications();
    });

    loaders.dashboard().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_every_placeholder() {
        let html = render_index(135, 2);
        assert!(!html.contains("{{"));
        assert!(html.contains("135 pts"));
        assert!(html.contains(r#"<span id="unread">2</span>"#));
    }

    #[test]
    fn escapes_coach_intro() {
        let html = render_index(0, 0);
        assert!(html.contains("Challenges, achievements &amp; leaderboard"));
        assert!(html.contains("data-query=\"Compare emissions of car, bike, bus and train\""));
    }
}
