// WASM bindings for the Completr dictionary matching engine.
//
// Provides a `WasmCompletr` class exported via wasm-bindgen that wraps a
// `WordListProvider` and the settings it was configured with. Suggestions
// are serialized to JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const completr = new WasmCompletr('{"wordInsertionMode": "Ignore-Case & Append"}');
//   completr.loadWordList("apple\napplication\n");   // => 2
//   completr.suggest("APP");
//   // => [{ displayText: "APPle", insertionText: "APPle" }, ...]
//   completr.setSettings('{"ignoreDiacriticsWhenFiltering": true}');
//   completr.clear();

use wasm_bindgen::prelude::*;

use completr_core::error::CompletrError;
use completr_core::policy::Policy;
use completr_core::settings::Settings;
use completr_core::suggestion::Suggestion;
use completr_dict::provider::{DictionaryProvider, WordListProvider};

fn completr_error_to_js(e: CompletrError) -> JsError {
    JsError::new(&e.to_string())
}

/// Dictionary completion engine for WebAssembly.
#[wasm_bindgen]
pub struct WasmCompletr {
    settings: Settings,
    policy: Policy,
    provider: WordListProvider,
}

impl WasmCompletr {
    fn with_settings(settings: Settings) -> Self {
        Self {
            policy: Policy::from_settings(&settings),
            provider: WordListProvider::new(&settings),
            settings,
        }
    }

    fn suggestions(&self, query: &str) -> Vec<Suggestion> {
        let mut result = self.provider.suggestions(query, &self.policy);
        if let Some(limit) = self.settings.suggestion_limit() {
            result.truncate(limit);
        }
        result
    }
}

#[wasm_bindgen]
impl WasmCompletr {
    /// Create an engine with no words loaded.
    ///
    /// `settings_json` is an optional settings object in JSON; missing fields
    /// take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Result<WasmCompletr, JsError> {
        let settings = match settings_json.as_deref() {
            Some(json) => Settings::from_json(json).map_err(completr_error_to_js)?,
            None => Settings::default(),
        };
        Ok(Self::with_settings(settings))
    }

    /// Add a word list (one word per line). Returns the number of words
    /// accepted from it.
    #[wasm_bindgen(js_name = "loadWordList")]
    pub fn load_word_list(&mut self, text: &str) -> usize {
        self.provider.add_list(text)
    }

    /// Drop every loaded word list.
    pub fn clear(&mut self) {
        self.provider.clear();
    }

    /// Number of distinct words currently indexed.
    #[wasm_bindgen(js_name = "wordCount")]
    pub fn word_count(&self) -> usize {
        self.provider.word_count()
    }

    /// Replace the settings. Loaded lists are kept and re-indexed if the
    /// minimum word length changed.
    #[wasm_bindgen(js_name = "setSettings")]
    pub fn set_settings(&mut self, settings_json: &str) -> Result<(), JsError> {
        let settings = Settings::from_json(settings_json).map_err(completr_error_to_js)?;
        self.provider.apply_settings(&settings);
        self.policy = Policy::from_settings(&settings);
        self.settings = settings;
        Ok(())
    }

    /// Suggest completions for a partial word.
    ///
    /// Returns a JavaScript array of `{ displayText, insertionText }` objects,
    /// shortest display text first.
    pub fn suggest(&self, query: &str) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.suggestions(query))
            .map_err(|e| JsError::new(&e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use completr_core::enums::InsertionMode;

    #[test]
    fn loads_and_suggests() {
        let mut completr = WasmCompletr::with_settings(Settings::default());
        assert_eq!(completr.load_word_list("apple\napplication\nbanana\n"), 3);
        assert_eq!(completr.word_count(), 3);
        let texts: Vec<_> = completr
            .suggestions("APP")
            .into_iter()
            .map(|s| s.display_text)
            .collect();
        assert_eq!(texts, ["apple", "application"]);
    }

    #[test]
    fn limit_and_mode_come_from_settings() {
        let mut completr = WasmCompletr::with_settings(Settings {
            word_insertion_mode: InsertionMode::AppendIgnoreCase,
            max_suggestions: 1,
            ..Settings::default()
        });
        completr.load_word_list("apple\napplication\n");
        assert_eq!(completr.suggestions("APP"), [Suggestion::from_text("APPle")]);
    }

    #[test]
    fn append_label_settings_parse() {
        let settings = Settings::from_json(r#"{"wordInsertionMode": "Ignore-Case & Append"}"#)
            .unwrap_or_else(|e| panic!("settings rejected: {e}"));
        let mut completr = WasmCompletr::with_settings(settings);
        completr.load_word_list("apple\n");
        assert_eq!(completr.suggestions("APP"), [Suggestion::from_text("APPle")]);
    }

    #[test]
    fn clear_empties_the_index() {
        let mut completr = WasmCompletr::with_settings(Settings::default());
        completr.load_word_list("apple\n");
        completr.clear();
        assert_eq!(completr.word_count(), 0);
        assert!(completr.suggestions("app").is_empty());
    }
}
