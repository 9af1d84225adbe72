//! Header search input.

use leveling_streaming::escape_html;

/// Search box holding the typed query. Nothing is searched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBar {
    query: String,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn render(&self) -> String {
        format!(
            r#"<div class="relative hidden md:block"><div class="flex items-center bg-gray-100 rounded-full px-4 py-2 w-48 lg:w-56 hover:bg-gray-200 transition"><svg class="w-5 h-5 text-gray-600 mr-2" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"/></svg><input type="text" placeholder="Search" value="{}" class="bg-transparent text-sm outline-none w-full placeholder-gray-600"></div></div>"#,
            escape_html(&self.query)
        )
    }
}
