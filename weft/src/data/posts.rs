/// Blog post metadata plus a pre-rendered HTML body. Dates are RFC 3339 and
/// formatted for display by [`crate::date::format_date`].
pub struct Post {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub body: &'static str,
}

/// Posts, newest first.
pub fn posts() -> Vec<Post> {
    vec![
        Post {
            slug: "design-tokens-that-scale",
            title: "Design tokens that scale with your team",
            description: "Why constraining styles to a fixed token vocabulary beats ad-hoc values, and how atomic classes keep the payload small.",
            date: "2024-03-18T00:00:00Z",
            body: "<p>Every design system I have worked on eventually converged on the same idea: \
a small, closed vocabulary of spacing, type, and color tokens, and a generated set of \
single-purpose classes that map onto it.</p>\
<p>The payoff is that adding a new component adds almost no new CSS. The classes already \
exist; the component only references them.</p>\
<ul><li>Tokens make review conversations concrete.</li>\
<li>Atomic classes make the stylesheet size a function of the schema, not the page count.</li>\
<li>Symbolic color references make theming a single class swap.</li></ul>",
        },
        Post {
            slug: "two-axes-of-dark-mode",
            title: "The two axes of dark mode",
            description: "An explicit theme toggle and the OS-level preference are different features. Treat them separately.",
            date: "2024-01-05T00:00:00Z",
            body: "<p>A theme toggle answers the question <em>what did this visitor choose</em>. \
The prefers-color-scheme media query answers <em>what does the operating system suggest</em>. \
Conflating the two produces toggles that fight the OS.</p>\
<p>This site keeps them separate: the toggle swaps a theme class on the document root, while \
a handful of presentation details key off the media query directly.</p>",
        },
    ]
}
