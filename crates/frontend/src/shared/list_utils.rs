/// List page helpers: search box, match highlighting, empty state
use contracts::shared::list_view::NO_RECORDS_FOUND;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Byte ranges of case-insensitive occurrences of `filter` in `text`.
/// Every range starts and ends on a char boundary of `text`.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = filter.trim().chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(ch) = text[from..].chars().next() {
        match match_end(text, from, &needle) {
            Some(end) => {
                ranges.push((from, end));
                from = end;
            }
            None => from += ch.len_utf8(),
        }
    }
    ranges
}

/// End of a match starting at `start`; the needle must be used up exactly
/// at the end of a char of `text`
fn match_end(text: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut pos = 0;
    for (offset, ch) in text[start..].char_indices() {
        for lower in ch.to_lowercase() {
            if needle.get(pos) != Some(&lower) {
                return None;
            }
            pos += 1;
        }
        if pos == needle.len() {
            return Some(start + offset + ch.len_utf8());
        }
    }
    None
}

/// Wrap every match of `filter` in `text` into a highlight span
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any());
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box; every keystroke is passed to `on_change`
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Placeholder rendered instead of an empty table
#[component]
pub fn NoRecords(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="no-records">
            {icon("search")}
            <p>{message.unwrap_or_else(|| NO_RECORDS_FOUND.to_string())}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Nike Air NIKE", "nike"), vec![(0, 4), (9, 13)]);
    }

    #[test]
    fn test_match_ranges_non_ascii() {
        assert_eq!(match_ranges("Café CAFÉ", "é"), vec![(3, 5), (9, 11)]);
        // 'İ' lowercases to two chars, the Kelvin sign to a one-byte 'k'
        assert_eq!(match_ranges("İİK", "k"), vec![(4, 5)]);
        assert_eq!(match_ranges("\u{212A}elvin", "k"), vec![(0, 3)]);
        for text in ["İİK", "ǅungla", "ﬁle"] {
            for (start, end) in match_ranges(text, "l") {
                assert!(text.is_char_boundary(start) && text.is_char_boundary(end));
            }
        }
    }

    #[test]
    fn test_match_ranges_empty_filter() {
        assert!(match_ranges("Adidas", "  ").is_empty());
        assert!(match_ranges("Adidas", "puma").is_empty());
    }
}
