//! Card Component
//!
//! The panel frame every dashboard section sits in.

use leptos::*;

const CARD_CLASS: &str = "rounded-xl bg-surface0/70 backdrop-blur border border-surface1/60 \
     shadow-lg shadow-black/30 p-4 md:p-5 \
     hover:shadow-xl hover:-translate-y-[1px] transition-transform";

/// Inline style for a control tinted with one palette color.
///
/// `fill` is the background strength in percent; the border is always 40%.
pub fn tinted(color: &str, fill: u8) -> String {
    format!(
        "background-color: color-mix(in oklab, var(--color-{color}) {fill}%, transparent); \
         color: var(--color-{color}); \
         border-color: color-mix(in oklab, var(--color-{color}) 40%, transparent)"
    )
}

/// Dashboard card with an optional heading
#[component]
pub fn Card(
    /// Heading shown above the content
    #[prop(optional, into)]
    title: Option<String>,
    /// Extra classes appended to the card frame
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=format!("{} {}", CARD_CLASS, class)>
            {title.map(|title| view! {
                <h2 class="text-sm font-semibold text-subtext1 mb-2 tracking-wide">{title}</h2>
            })}
            {children()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tinted_style() {
        let style = tinted("teal", 20);
        assert!(style.starts_with(
            "background-color: color-mix(in oklab, var(--color-teal) 20%, transparent);"
        ));
        assert!(style.contains("color: var(--color-teal);"));
        assert!(style.ends_with("var(--color-teal) 40%, transparent)"));
    }
}
