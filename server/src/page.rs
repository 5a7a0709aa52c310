//! Server-rendered search page.
//!
//! [`PageState`] holds everything the page shows for one request; the route
//! handler builds it, drives it through a search, and hands it to
//! [`render`].

use lostark_siblings::{ApiKey, CharacterRecord};

pub const ENTER_KEY_NOTICE: &str = "Please enter your API key.";
pub const KEY_SAVED_NOTICE: &str = "API key saved.";
pub const NO_KEY_ERROR: &str = "No API key. Enter your API key first.";
pub const FETCH_FAILED: &str = "Failed to fetch data";
pub const EMPTY_PROMPT: &str = "Search a nickname to see results.";
pub const LOADING_TEXT: &str = "Loading...";

#[derive(Debug, Default)]
pub struct PageState {
    pub character_name: String,
    pub api_key: Option<ApiKey>,
    pub characters: Vec<CharacterRecord>,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl PageState {
    /// Initial state for a visit. Without a key the user is prompted for one.
    pub fn new(api_key: Option<ApiKey>) -> Self {
        let notice = api_key.is_none().then(|| ENTER_KEY_NOTICE.to_string());
        Self {
            api_key,
            notice,
            ..Self::default()
        }
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn begin_search(&mut self, character_name: &str) {
        self.character_name = character_name.to_string();
        self.error = None;
        self.loading = true;
    }

    /// Apply a search outcome. Loading is cleared either way.
    pub fn finish_search<E>(&mut self, outcome: Result<Vec<CharacterRecord>, E>) {
        match outcome {
            Ok(characters) => self.characters = characters,
            Err(_) => self.error = Some(FETCH_FAILED.to_string()),
        }
        self.loading = false;
    }

    pub fn shows_empty_prompt(&self) -> bool {
        !self.loading && self.error.is_none() && self.characters.is_empty() && self.has_key()
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

const STYLE: &str = "\
body{font-family:sans-serif;background:linear-gradient(135deg,#3b82f6,#9333ea);min-height:100vh;margin:0;display:flex;align-items:center;justify-content:center}\
main{background:#fff;border-radius:8px;padding:2rem;max-width:48rem;width:100%}\
h1{text-align:center}form{display:flex;gap:1rem;margin-bottom:1.5rem}input{flex:1;padding:.75rem}\
.notice{background:#fef3c7;padding:.75rem;margin-bottom:1rem}.loading,.empty{text-align:center;color:#6b7280}\
.error{text-align:center;color:#ef4444}table{width:100%;border-collapse:collapse}\
th{background:#a855f7;color:#fff;text-align:left}th,td{padding:.75rem 1rem;border:1px solid #e5e7eb}\
tr.even{background:#f9fafb}";

pub fn render(state: &PageState) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Character Search</title>\n");
    html.push_str(&format!("<style>{STYLE}</style>\n"));
    html.push_str("</head>\n<body>\n<main>\n<h1>Character Search</h1>\n");

    if let Some(notice) = &state.notice {
        html.push_str(&format!(
            "<div class=\"notice\" role=\"alert\">{}</div>\n",
            escape_html(notice)
        ));
    }

    if state.has_key() {
        html.push_str(&format!(
            "<form method=\"get\" action=\"/\" onsubmit=\"document.getElementById('loading').hidden=false\">\n\
             <input type=\"text\" name=\"name\" value=\"{}\" placeholder=\"Enter a nickname\">\n\
             <button type=\"submit\">Search</button>\n</form>\n",
            escape_html(&state.character_name)
        ));
    } else {
        html.push_str(
            "<form method=\"post\" action=\"/api-key\">\n\
             <input type=\"text\" name=\"api_key\" placeholder=\"Enter your API key\">\n\
             <button type=\"submit\">Save API key</button>\n</form>\n",
        );
    }

    html.push_str(&format!(
        "<div id=\"loading\" class=\"loading\"{}>{LOADING_TEXT}</div>\n",
        if state.loading { "" } else { " hidden" }
    ));

    if let Some(error) = &state.error {
        html.push_str(&format!("<div class=\"error\">{}</div>\n", escape_html(error)));
    }

    if !state.characters.is_empty() {
        render_table(&mut html, &state.characters);
    }

    if state.shows_empty_prompt() {
        html.push_str(&format!("<div class=\"empty\">{EMPTY_PROMPT}</div>\n"));
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_table(html: &mut String, characters: &[CharacterRecord]) {
    html.push_str(
        "<table>\n<thead>\n<tr><th>Server</th><th>Character</th><th>Level</th>\
         <th>Class</th><th>Avg Item Level</th><th>Max Item Level</th></tr>\n</thead>\n<tbody>\n",
    );
    for (i, c) in characters.iter().enumerate() {
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            if i % 2 == 0 { "even" } else { "odd" },
            escape_html(&c.server_name),
            escape_html(&c.character_name),
            c.character_level,
            escape_html(&c.character_class_name),
            escape_html(&c.item_avg_level),
            escape_html(&c.item_max_level),
        ));
    }
    html.push_str("</tbody>\n</table>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> CharacterRecord {
        CharacterRecord {
            server_name: "Azena".into(),
            character_name: name.into(),
            character_level: 60,
            character_class_name: "Bard".into(),
            item_avg_level: "1,620.00".into(),
            item_max_level: "1,625.00".into(),
        }
    }

    fn key() -> Option<ApiKey> {
        ApiKey::new("k")
    }

    #[test]
    fn no_key_prompts_and_shows_key_form() {
        let state = PageState::new(None);
        let html = render(&state);

        assert!(html.contains(ENTER_KEY_NOTICE));
        assert!(html.contains("action=\"/api-key\""));
        assert!(!html.contains("name=\"name\""));
        assert!(!html.contains(EMPTY_PROMPT));
    }

    #[test]
    fn key_present_shows_search_form_and_prompt() {
        let state = PageState::new(key());
        let html = render(&state);

        assert!(state.notice.is_none());
        assert!(html.contains("name=\"name\""));
        assert!(html.contains(EMPTY_PROMPT));
    }

    #[test]
    fn begin_search_clears_error_and_sets_loading() {
        let mut state = PageState::new(key());
        state.error = Some("old".into());
        state.begin_search("Bard");

        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(render(&state).contains("<div id=\"loading\" class=\"loading\">"));
    }

    #[test]
    fn successful_search_renders_table() {
        let mut state = PageState::new(key());
        state.begin_search("Bard");
        state.finish_search::<()>(Ok(vec![record("One"), record("Two")]));

        let html = render(&state);
        assert!(!state.loading);
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>One</td>"));
        assert!(html.contains("<tr class=\"odd\">"));
        assert!(!html.contains(EMPTY_PROMPT));
    }

    #[test]
    fn empty_result_shows_prompt_not_error() {
        let mut state = PageState::new(key());
        state.begin_search("Nobody");
        state.finish_search::<()>(Ok(Vec::new()));

        let html = render(&state);
        assert!(html.contains(EMPTY_PROMPT));
        assert!(!html.contains(FETCH_FAILED));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn failed_search_shows_error_and_keeps_previous_list() {
        let mut state = PageState::new(key());
        state.characters = vec![record("Kept")];
        state.begin_search("Bard");
        state.finish_search(Err("boom"));

        let html = render(&state);
        assert!(!state.loading);
        assert!(html.contains(FETCH_FAILED));
        assert!(html.contains("<td>Kept</td>"));
        assert!(!html.contains(EMPTY_PROMPT));
    }

    #[test]
    fn blocks_are_newline_terminated() {
        let mut state = PageState::new(key());
        state.begin_search("Bard");
        state.finish_search::<()>(Ok(vec![record("One")]));

        let html = render(&state);
        assert!(html.contains("</form>\n<div id=\"loading\" class=\"loading\" hidden>"));
        assert!(html.contains("Loading...</div>\n<table>"));
        assert!(html.contains("<td>1,625.00</td></tr>\n</tbody>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn upstream_text_is_escaped() {
        let mut state = PageState::new(key());
        state.begin_search("<b>");
        state.finish_search::<()>(Ok(vec![record("<script>x</script>")]));

        let html = render(&state);
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(html.contains("value=\"&lt;b&gt;\""));
    }
}
