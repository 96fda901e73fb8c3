// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedded single-page chat client served at `/`.

/// Minimal chat page: a message log, an input box, and a safety note.
/// Talks to POST /api/chat with JSON and renders the reply with its origin.
pub const CHAT_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Haven</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 640px; margin: 2rem auto; padding: 0 1rem; color: #222; }
  h1 { font-size: 1.4rem; }
  #log { border: 1px solid #ddd; border-radius: 8px; padding: 1rem; min-height: 240px; margin-bottom: 1rem; }
  .user { text-align: right; margin: .4rem 0; }
  .bot { text-align: left; margin: .4rem 0; }
  .bubble { display: inline-block; padding: .4rem .8rem; border-radius: 12px; max-width: 85%; }
  .user .bubble { background: #dbeafe; }
  .bot .bubble { background: #f1f5f9; }
  .origin { font-size: .7rem; color: #888; display: block; }
  form { display: flex; gap: .5rem; }
  input[type=text] { flex: 1; padding: .5rem; border: 1px solid #ccc; border-radius: 6px; }
  button { padding: .5rem 1rem; border: 0; border-radius: 6px; background: #2563eb; color: #fff; }
  .note { font-size: .8rem; color: #666; margin-top: 1rem; }
</style>
</head>
<body>
<h1>Haven</h1>
<div id="log"></div>
<form id="chat">
  <input type="text" id="message" placeholder="Say something..." autocomplete="off">
  <button type="submit">Send</button>
</form>
<p class="note">This service is supportive, not a replacement for professional care.
If you are in immediate danger, contact local emergency services.</p>
<script>
const log = document.getElementById('log');
const sessionId = crypto.randomUUID();

function append(cls, text, origin) {
  const row = document.createElement('div');
  row.className = cls;
  const bubble = document.createElement('span');
  bubble.className = 'bubble';
  bubble.textContent = text;
  if (origin) {
    const tag = document.createElement('span');
    tag.className = 'origin';
    tag.textContent = origin;
    bubble.appendChild(tag);
  }
  row.appendChild(bubble);
  log.appendChild(row);
  log.scrollTop = log.scrollHeight;
}

document.getElementById('chat').addEventListener('submit', async (e) => {
  e.preventDefault();
  const input = document.getElementById('message');
  const message = input.value.trim();
  if (!message) return;
  append('user', message);
  input.value = '';
  try {
    const res = await fetch('/api/chat', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ message, session_id: sessionId }),
    });
    const body = await res.json();
    if (res.ok) {
      append('bot', body.reply, body.origin);
    } else {
      append('bot', body.error || 'request failed');
    }
  } catch (err) {
    append('bot', 'could not reach the server');
  }
});
</script>
</body>
</html>
"#;
