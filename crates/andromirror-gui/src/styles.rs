//! CSS 样式定义
//!
//! 浅色 / 深色两套变量，挂在根容器的 `theme-*` 类上；
//! `theme-system` 跟随 `prefers-color-scheme`。

/// 全局 CSS 样式
pub const GLOBAL_CSS: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

.theme-light, .theme-system {
    --primary: #FACC15;
    --secondary: #F472B6;
    --accent: #22D3EE;
    --danger: #FB7185;
    --bg: #F8FAFC;
    --tile: #FFFFFF;
    --hover: #FFFBEB;
    --border: #000000;
    --text: #000000;
    --muted: #475569;
}

.theme-dark {
    --primary: #CA8A04;
    --secondary: #BE185D;
    --accent: #0E7490;
    --danger: #E11D48;
    --bg: #0F172A;
    --tile: #1E293B;
    --hover: #334155;
    --border: #E2E8F0;
    --text: #F1F5F9;
    --muted: #94A3B8;
}

@media (prefers-color-scheme: dark) {
    .theme-system {
        --primary: #CA8A04;
        --secondary: #BE185D;
        --accent: #0E7490;
        --danger: #E11D48;
        --bg: #0F172A;
        --tile: #1E293B;
        --hover: #334155;
        --border: #E2E8F0;
        --text: #F1F5F9;
        --muted: #94A3B8;
    }
}

body {
    font-family: 'Outfit', 'Inter', sans-serif;
    line-height: 1.5;
}

/* Bento Grid Layout */
.app-container {
    min-height: 100vh;
    padding: 24px;
    background-color: var(--bg);
    color: var(--text);
    display: grid;
    grid-template-columns: repeat(12, 1fr);
    grid-auto-rows: minmax(60px, auto);
    gap: 20px;
}

.bento-tile {
    background: var(--tile);
    border: 3px solid var(--border);
    box-shadow: 6px 6px 0px var(--border);
    padding: 24px;
    position: relative;
    overflow: hidden;
}

.header-tile {
    grid-column: span 12;
    background: var(--primary);
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.tab-row {
    grid-column: span 12;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 20px;
}

.main-left { grid-column: span 7; }
.main-right { grid-column: span 5; background: var(--accent); }
.log-tile { grid-column: span 12; }
.full-tile { grid-column: span 12; }

h1 { font-size: 32px; font-weight: 900; letter-spacing: -1px; }
h2 { font-size: 22px; font-weight: 800; }
h3 { font-size: 16px; font-weight: 800; margin-bottom: 8px; }

.logo { display: flex; align-items: baseline; gap: 12px; }
.logo-version { font-weight: 700; }

.theme-picker { display: flex; align-items: center; gap: 10px; font-weight: 700; }

/* Tabs */
.tab-card {
    border: 3px solid var(--border);
    background: var(--tile);
    box-shadow: 4px 4px 0px var(--border);
    padding: 14px 20px;
    display: flex;
    align-items: center;
    gap: 12px;
    cursor: pointer;
    font-weight: 800;
    transition: all 0.1s;
}

.tab-card:hover { transform: translate(-2px, -2px); }
.tab-card.active { background: var(--secondary); }
.tab-card-icon { font-size: 22px; }

/* Cards */
.card { display: flex; flex-direction: column; gap: 12px; margin-bottom: 20px; }
.card-header { display: flex; justify-content: space-between; align-items: center; }

/* Buttons */
.btn {
    font-family: inherit;
    font-weight: 800;
    padding: 12px 24px;
    border: 3px solid var(--border);
    box-shadow: 4px 4px 0px var(--border);
    cursor: pointer;
    background: var(--tile);
    color: var(--text);
    text-transform: uppercase;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 10px;
    transition: all 0.1s;
}

.btn:active {
    transform: translate(2px, 2px);
    box-shadow: 0px 0px 0px var(--border);
}

.btn:disabled {
    cursor: not-allowed;
    opacity: 0.5;
    box-shadow: none;
}

.btn-primary { background: var(--primary); }
.btn-secondary { background: var(--secondary); }
.btn-danger { background: var(--danger); }

/* Inputs */
.form-row {
    display: grid;
    grid-template-columns: 140px 1fr;
    align-items: center;
    gap: 10px;
}

.form-label { font-weight: 700; }

.input, .select {
    font-family: inherit;
    font-size: 14px;
    padding: 8px 10px;
    border: 2px solid var(--border);
    background: var(--tile);
    color: var(--text);
}

.checkbox { display: flex; align-items: center; gap: 8px; cursor: pointer; }

/* Device List */
.device-list {
    display: flex;
    flex-direction: column;
    gap: 12px;
    max-height: 260px;
    overflow-y: auto;
}

.device-item {
    border: 3px solid var(--border);
    padding: 12px;
    background: var(--tile);
    display: flex;
    align-items: center;
    gap: 16px;
    cursor: pointer;
    box-shadow: 4px 4px 0px var(--border);
    transition: all 0.2s;
}

.device-item:hover { background: var(--hover); }
.device-item.selected { background: var(--primary); }

.device-icon {
    width: 40px;
    height: 40px;
    border: 2px solid var(--border);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 20px;
}

.device-name { font-weight: 800; font-family: monospace; }

.empty-state { text-align: center; padding: 24px; color: var(--muted); }
.empty-state-icon { font-size: 36px; }

/* Connect */
.connect-panel { display: flex; flex-direction: column; gap: 12px; }

.progress-bar {
    border: 3px solid var(--border);
    height: 20px;
    background: var(--tile);
    overflow: hidden;
}

.progress-fill {
    height: 100%;
    background: var(--secondary);
    transition: width 0.3s ease;
}

.status-line { font-weight: 700; }

.instructions { margin-top: 20px; font-size: 14px; }
.instructions ol { padding-left: 20px; }

/* Settings */
.settings-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 24px;
}

/* About */
.about {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 16px;
    text-align: center;
}

.about-subtitle { color: var(--muted); font-size: 18px; }
.about-credits { margin-top: 24px; font-size: 13px; color: var(--muted); }

/* Activity Log */
.log-list {
    font-family: monospace;
    font-size: 13px;
    max-height: 160px;
    overflow-y: auto;
}

.log-entry { padding: 2px 0; }
.log-entry.log-ERROR { color: var(--danger); }
.log-entry.log-WARN { color: var(--primary); }
.log-empty { color: var(--muted); }
"#;
